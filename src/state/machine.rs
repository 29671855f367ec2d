use super::event::{PointerTarget, ToggleOutcome};

/// Owns the analysis-mode flag and whether the pointer-press listener exists.
///
/// Transitions:
/// - `toggle` flips `enabled`. The first switch to enabled also flips
///   `listener_installed`, which then stays set for the window's lifetime.
/// - Disabling never removes the listener; presses are filtered by
///   [`ModeController::accepts_press`] instead.
#[derive(Debug, Default)]
pub struct ModeController {
    enabled: bool,
    listener_installed: bool,
}

impl ModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn listener_installed(&self) -> bool {
        self.listener_installed
    }

    pub fn toggle(&mut self) -> ToggleOutcome {
        self.enabled = !self.enabled;
        let install_listener = self.enabled && !self.listener_installed;
        if install_listener {
            self.listener_installed = true;
        }
        tracing::debug!(
            enabled = self.enabled,
            install_listener,
            "analysis mode toggled"
        );
        ToggleOutcome {
            enabled: self.enabled,
            install_listener,
        }
    }

    /// Whether a press on `target` may open a selection session.
    pub fn accepts_press(&self, target: PointerTarget) -> bool {
        self.enabled && self.listener_installed && target != PointerTarget::ToggleControl
    }
}
