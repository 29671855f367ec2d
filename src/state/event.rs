/// What the pointer landed on when a press started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The analysis-mode toggle button (or one of its children).
    ToggleControl,
    /// Anything else in the viewer window.
    Viewport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub enabled: bool,
    /// Set exactly once: the first time analysis mode is switched on.
    pub install_listener: bool,
}

impl ToggleOutcome {
    pub const fn label(self) -> &'static str {
        toggle_label(self.enabled)
    }
}

pub const fn toggle_label(enabled: bool) -> &'static str {
    if enabled {
        "🛑 Disable Analysis"
    } else {
        "🎯 Enable Analysis"
    }
}
