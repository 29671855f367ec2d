pub mod event;
pub mod machine;

pub use event::{toggle_label, PointerTarget, ToggleOutcome};
pub use machine::ModeController;
