use crate::geometry::{Size, ViewportPoint, ViewportRect};

use super::{SelectionError, SelectionResult};

/// Transient full-viewport drawing layer shown while a selection is dragged.
pub trait OverlaySurface {
    /// Drops whatever the previous frame drew.
    fn clear(&mut self);
    /// Outlines the rectangle spanning `origin` and `current`.
    fn stroke_rect(&mut self, origin: ViewportPoint, current: ViewportPoint);
    /// Detaches the surface from the window. Called exactly once.
    fn remove(&mut self);
}

/// One live selection session. Owns its surface and detaches it on
/// [`SelectionOverlay::finish`], or on drop when the session is abandoned.
#[derive(Debug)]
pub struct SelectionOverlay<S: OverlaySurface> {
    surface: Option<S>,
    origin: ViewportPoint,
}

impl<S: OverlaySurface> SelectionOverlay<S> {
    pub fn begin(surface: S, viewport: Size, origin: ViewportPoint) -> Self {
        tracing::debug!(
            x = origin.x,
            y = origin.y,
            viewport_width = viewport.width,
            viewport_height = viewport.height,
            "selection started"
        );
        Self {
            surface: Some(surface),
            origin,
        }
    }

    pub fn origin(&self) -> ViewportPoint {
        self.origin
    }

    pub fn drag_to(&mut self, point: ViewportPoint) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        surface.clear();
        surface.stroke_rect(self.origin, point);
    }

    /// Ends the session at `release`. The surface is gone before this returns,
    /// whether or not the region passes validation.
    pub fn finish(mut self, release: ViewportPoint, minimum: f64) -> SelectionResult<ViewportRect> {
        self.detach();

        let rect = ViewportRect::spanning(self.origin, release);
        if rect.w < minimum || rect.h < minimum {
            tracing::debug!(width = rect.w, height = rect.h, "selection rejected as too small");
            return Err(SelectionError::TooSmall {
                width: rect.w,
                height: rect.h,
                minimum,
            });
        }
        tracing::debug!(
            x = rect.x,
            y = rect.y,
            width = rect.w,
            height = rect.h,
            "selection finalized"
        );
        Ok(rect)
    }

    fn detach(&mut self) {
        if let Some(mut surface) = self.surface.take() {
            surface.remove();
        }
    }
}

impl<S: OverlaySurface> Drop for SelectionOverlay<S> {
    fn drop(&mut self) {
        self.detach();
    }
}
