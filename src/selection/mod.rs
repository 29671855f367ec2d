mod controller;
mod overlay;

pub use controller::{PressOutcome, SelectionController};
pub use overlay::{OverlaySurface, SelectionOverlay};

use thiserror::Error;

/// Selections narrower or shorter than this (viewport px) are treated as stray clicks.
pub const MIN_SELECTION_SIZE: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SelectionError {
    #[error("selection {width}x{height} is smaller than {minimum}px")]
    TooSmall {
        width: f64,
        height: f64,
        minimum: f64,
    },
}

pub type SelectionResult<T> = std::result::Result<T, SelectionError>;
