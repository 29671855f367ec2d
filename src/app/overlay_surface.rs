use std::cell::Cell;
use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::{DrawingArea, Overlay};

use crate::geometry::{ViewportPoint, ViewportRect};
use crate::selection::OverlaySurface;
use crate::ui::SELECTION_STROKE;

/// Full-window drawing layer stacked on the viewer overlay for one drag.
#[derive(Debug)]
pub(super) struct GtkOverlaySurface {
    overlay: Overlay,
    area: DrawingArea,
    frame: Rc<Cell<Option<ViewportRect>>>,
}

impl GtkOverlaySurface {
    pub(super) fn attach(overlay: &Overlay) -> Self {
        let area = DrawingArea::new();
        area.set_can_target(false);
        area.set_hexpand(true);
        area.set_vexpand(true);

        let frame = Rc::new(Cell::new(None::<ViewportRect>));
        let frame_for_draw = frame.clone();
        area.set_draw_func(move |_, context, _, _| {
            let Some(rect) = frame_for_draw.get() else {
                return;
            };
            context.save().ok();
            context.set_source_rgb(SELECTION_STROKE.red, SELECTION_STROKE.green, SELECTION_STROKE.blue);
            context.set_line_width(SELECTION_STROKE.width);
            context.rectangle(rect.x, rect.y, rect.w, rect.h);
            let _ = context.stroke();
            context.restore().ok();
        });

        overlay.add_overlay(&area);
        tracing::debug!("selection surface attached");
        Self {
            overlay: overlay.clone(),
            area,
            frame,
        }
    }
}

impl OverlaySurface for GtkOverlaySurface {
    fn clear(&mut self) {
        self.frame.set(None);
        self.area.queue_draw();
    }

    fn stroke_rect(&mut self, origin: ViewportPoint, current: ViewportPoint) {
        self.frame.set(Some(ViewportRect::spanning(origin, current)));
        self.area.queue_draw();
    }

    fn remove(&mut self) {
        self.overlay.remove_overlay(&self.area);
        tracing::debug!("selection surface removed");
    }
}
