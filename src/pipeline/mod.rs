mod notice;
mod session;

pub use notice::{Notice, Notifier};
pub use session::{
    accept_selection, deliver_outcome, ImageLayout, PipelineError, PipelineResult, SessionPipeline,
    SessionRequest,
};
