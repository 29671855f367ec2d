use crate::geometry::{Size, ViewportPoint, ViewportRect};
use crate::state::{ModeController, PointerTarget, ToggleOutcome};

use super::overlay::{OverlaySurface, SelectionOverlay};
use super::{SelectionResult, MIN_SELECTION_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    Started,
    ModeDisabled,
    ToggleControl,
    SessionAlreadyActive,
}

/// Routes pointer events into at most one [`SelectionOverlay`] at a time.
#[derive(Debug)]
pub struct SelectionController<S: OverlaySurface> {
    mode: ModeController,
    session: Option<SelectionOverlay<S>>,
    min_selection_size: f64,
}

impl<S: OverlaySurface> SelectionController<S> {
    pub fn new(min_selection_size: f64) -> Self {
        Self {
            mode: ModeController::new(),
            session: None,
            min_selection_size,
        }
    }

    pub fn toggle(&mut self) -> ToggleOutcome {
        self.mode.toggle()
    }

    pub fn session(&self) -> Option<&SelectionOverlay<S>> {
        self.session.as_ref()
    }

    /// Opens a session when the mode allows it. The surface is only created
    /// (through `attach_surface`) once every check has passed.
    pub fn press(
        &mut self,
        target: PointerTarget,
        point: ViewportPoint,
        viewport: Size,
        attach_surface: impl FnOnce() -> S,
    ) -> PressOutcome {
        if target == PointerTarget::ToggleControl {
            return PressOutcome::ToggleControl;
        }
        if !self.mode.accepts_press(target) {
            return PressOutcome::ModeDisabled;
        }
        if self.session.is_some() {
            tracing::debug!("press ignored; selection already in progress");
            return PressOutcome::SessionAlreadyActive;
        }

        self.session = Some(SelectionOverlay::begin(attach_surface(), viewport, point));
        PressOutcome::Started
    }

    pub fn drag_to(&mut self, point: ViewportPoint) {
        if let Some(session) = self.session.as_mut() {
            session.drag_to(point);
        }
    }

    /// `None` when no session was live.
    pub fn release(&mut self, point: ViewportPoint) -> Option<SelectionResult<ViewportRect>> {
        let session = self.session.take()?;
        Some(session.finish(point, self.min_selection_size))
    }

    /// Abandons the live session, if any, detaching its surface.
    pub fn cancel(&mut self) {
        if self.session.take().is_some() {
            tracing::debug!("selection cancelled");
        }
    }
}

impl<S: OverlaySurface> Default for SelectionController<S> {
    fn default() -> Self {
        Self::new(MIN_SELECTION_SIZE)
    }
}
