use crate::selection::SelectionError;

use super::PipelineError;

/// User-facing, alert-style messages. One per failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    SelectionTooSmall,
    ExtractionFailed,
    ServiceUnavailable,
}

impl Notice {
    pub const fn message(self) -> &'static str {
        match self {
            Self::SelectionTooSmall => "Please select a larger region.",
            Self::ExtractionFailed => "Could not read the selected pixels.",
            Self::ServiceUnavailable => {
                "Failed to reach the color analysis service. Make sure it is running."
            }
        }
    }
}

impl From<&SelectionError> for Notice {
    fn from(err: &SelectionError) -> Self {
        match err {
            SelectionError::TooSmall { .. } => Self::SelectionTooSmall,
        }
    }
}

impl From<&PipelineError> for Notice {
    fn from(err: &PipelineError) -> Self {
        match err {
            PipelineError::Extraction(_) => Self::ExtractionFailed,
            PipelineError::Transport(_) | PipelineError::EmptyResult => Self::ServiceUnavailable,
        }
    }
}

pub trait Notifier {
    fn notify(&self, notice: Notice);
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::*;

    #[derive(Debug, Default)]
    pub(crate) struct RecordingNotifier {
        pub(crate) notices: RefCell<Vec<Notice>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notice: Notice) {
            self.notices.borrow_mut().push(notice);
        }
    }
}
