use gtk4::prelude::*;
use gtk4::DrawingArea;
use image::RgbaImage;

use crate::geometry::{fit_within, RenderedBounds, Size};

/// Where `natural` lands inside a canvas of the given pixel size.
pub(super) fn rendered_bounds(natural: Size, canvas_width: i32, canvas_height: i32) -> RenderedBounds {
    fit_within(
        natural,
        Size::new(f64::from(canvas_width), f64::from(canvas_height)),
    )
}

pub(super) fn image_size(image: &RgbaImage) -> Size {
    Size::new(f64::from(image.width()), f64::from(image.height()))
}

/// Canvas that paints the image scaled to fit, centered, never enlarged.
pub(super) fn build_image_canvas(image: &RgbaImage) -> DrawingArea {
    let canvas = DrawingArea::new();
    canvas.set_hexpand(true);
    canvas.set_vexpand(true);

    let natural = image_size(image);
    let surface = rgba_image_to_cairo_surface(image);
    if surface.is_none() {
        tracing::warn!(
            width = image.width(),
            height = image.height(),
            "failed to build cairo surface; canvas will stay blank"
        );
    }

    canvas.set_draw_func(move |_, context, width, height| {
        let Some(surface) = surface.as_ref() else {
            return;
        };
        let bounds = rendered_bounds(natural, width, height);
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return;
        }
        context.save().ok();
        context.translate(bounds.x, bounds.y);
        context.scale(bounds.width / natural.width, bounds.height / natural.height);
        if context.set_source_surface(surface, 0.0, 0.0).is_ok() {
            let _ = context.paint();
        }
        context.restore().ok();
    });
    canvas
}

pub(super) fn rgba_image_to_cairo_surface(image: &RgbaImage) -> Option<gtk4::cairo::ImageSurface> {
    let width = i32::try_from(image.width()).ok()?;
    let height = i32::try_from(image.height()).ok()?;
    let mut surface =
        gtk4::cairo::ImageSurface::create(gtk4::cairo::Format::ARgb32, width, height).ok()?;
    let stride = usize::try_from(surface.stride()).ok()?;

    {
        let mut data = surface.data().ok()?;
        let row_len = usize::try_from(image.width()).ok()?.checked_mul(4)?;
        if row_len == 0 {
            return None;
        }
        for (row, src_row) in image.as_raw().chunks_exact(row_len).enumerate() {
            let dst_offset = row.checked_mul(stride)?;
            let dst_row = data.get_mut(dst_offset..dst_offset.checked_add(row_len)?)?;
            for (src, dst) in src_row.chunks_exact(4).zip(dst_row.chunks_exact_mut(4)) {
                dst.copy_from_slice(&premultiplied_bgra([src[0], src[1], src[2], src[3]]));
            }
        }
    }

    surface.flush();
    Some(surface)
}

/// Cairo's ARGB32 is premultiplied and stored little-endian as B, G, R, A.
fn premultiplied_bgra([r, g, b, a]: [u8; 4]) -> [u8; 4] {
    match a {
        0 => [0, 0, 0, 0],
        255 => [b, g, r, 255],
        _ => {
            let alpha = u16::from(a);
            let premul = |channel: u8| ((u16::from(channel) * alpha + 127) / 255) as u8;
            [premul(b), premul(g), premul(r), a]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_pixels_swap_to_bgra() {
        assert_eq!(premultiplied_bgra([10, 20, 30, 255]), [30, 20, 10, 255]);
    }

    #[test]
    fn translucent_pixels_are_premultiplied() {
        assert_eq!(premultiplied_bgra([255, 0, 128, 128]), [64, 0, 128, 128]);
        assert_eq!(premultiplied_bgra([255, 255, 255, 0]), [0, 0, 0, 0]);
    }

    #[test]
    fn rendered_bounds_follow_canvas_size() {
        let bounds = rendered_bounds(Size::new(1600.0, 1200.0), 800, 600);
        assert_eq!(bounds, RenderedBounds::new(0.0, 0.0, 800.0, 600.0));
    }
}
