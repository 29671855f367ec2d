//! Viewport and image-space primitives shared by selection, extraction and rendering.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportPoint {
    pub x: f64,
    pub y: f64,
}

impl ViewportPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_positive(self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Rectangle in viewport pixels, origin at the top-left of the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl ViewportRect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Normalized rectangle spanning two drag points, regardless of drag direction.
    pub fn spanning(start: ViewportPoint, end: ViewportPoint) -> Self {
        Self {
            x: start.x.min(end.x),
            y: start.y.min(end.y),
            w: (end.x - start.x).abs(),
            h: (end.y - start.y).abs(),
        }
    }

    pub fn origin(self) -> ViewportPoint {
        ViewportPoint::new(self.x, self.y)
    }
}

/// Rectangle in natural (unscaled) image pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl ImageRect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub const fn full(natural_width: u32, natural_height: u32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            w: natural_width as f64,
            h: natural_height as f64,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactors {
    pub scale_x: f64,
    pub scale_y: f64,
}

impl ScaleFactors {
    /// `None` when either size has a non-positive dimension.
    pub fn between(viewport: Size, natural: Size) -> Option<Self> {
        if !viewport.is_positive() || !natural.is_positive() {
            return None;
        }
        Some(Self {
            scale_x: natural.width / viewport.width,
            scale_y: natural.height / viewport.height,
        })
    }
}

/// Where the image is painted inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderedBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RenderedBounds {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Integer pixel region inside a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRegion {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Snaps an image rect outward to whole pixels and clips it to the image.
    /// Returns `None` when nothing of the rect lies inside the image.
    pub fn from_image_rect(rect: ImageRect, image_width: u32, image_height: u32) -> Option<Self> {
        if image_width == 0 || image_height == 0 {
            return None;
        }
        let max_x = f64::from(image_width);
        let max_y = f64::from(image_height);
        let left = rect.x.floor().clamp(0.0, max_x);
        let top = rect.y.floor().clamp(0.0, max_y);
        let right = (rect.x + rect.w).ceil().clamp(0.0, max_x);
        let bottom = (rect.y + rect.h).ceil().clamp(0.0, max_y);
        if right <= left || bottom <= top {
            return None;
        }

        Some(Self::new(
            left as u32,
            top as u32,
            (right - left) as u32,
            (bottom - top) as u32,
        ))
    }
}

/// Maps a viewport selection into natural image pixels, scaling by
/// `natural / viewport` on each axis and clamping to the natural bounds.
pub fn to_image_space(rect: ViewportRect, viewport: Size, natural: Size) -> ImageRect {
    let Some(scale) = ScaleFactors::between(viewport, natural) else {
        return ImageRect::new(0.0, 0.0, 0.0, 0.0);
    };

    let x = (rect.x.max(0.0) * scale.scale_x).min(natural.width);
    let y = (rect.y.max(0.0) * scale.scale_y).min(natural.height);
    let w = (rect.w.max(0.0) * scale.scale_x).min(natural.width - x);
    let h = (rect.h.max(0.0) * scale.scale_y).min(natural.height - y);
    ImageRect::new(x, y, w, h)
}

/// Like [`to_image_space`], but measured against the box the image is actually
/// painted in. The part of the selection outside that box is discarded.
pub fn to_image_space_within(
    rect: ViewportRect,
    rendered: RenderedBounds,
    natural: Size,
) -> ImageRect {
    let left = rect.x.max(rendered.x);
    let top = rect.y.max(rendered.y);
    let right = (rect.x + rect.w).min(rendered.x + rendered.width);
    let bottom = (rect.y + rect.h).min(rendered.y + rendered.height);
    let local = ViewportRect::new(
        left - rendered.x,
        top - rendered.y,
        (right - left).max(0.0),
        (bottom - top).max(0.0),
    );
    to_image_space(local, rendered.size(), natural)
}

/// Bounds of an image shown scaled down to fit the viewport (never enlarged),
/// centered on both axes.
pub fn fit_within(natural: Size, viewport: Size) -> RenderedBounds {
    if !natural.is_positive() || !viewport.is_positive() {
        return RenderedBounds::new(0.0, 0.0, 0.0, 0.0);
    }
    let scale = (viewport.width / natural.width)
        .min(viewport.height / natural.height)
        .min(1.0);
    let width = natural.width * scale;
    let height = natural.height * scale;
    RenderedBounds::new(
        (viewport.width - width) / 2.0,
        (viewport.height - height) / 2.0,
        width,
        height,
    )
}
