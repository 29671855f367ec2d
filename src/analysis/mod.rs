mod client;
mod model;
mod transport;
mod wire;

pub use client::{AnalysisClient, DEFAULT_SERVICE_URL};
pub use model::{AnalysisResult, ColorEntry};
pub use transport::{AnalysisTransport, HttpResponse, HttpTransport};

#[cfg(test)]
pub(crate) use transport::testing as transport_testing;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
    #[error("analysis service answered with status {status}")]
    Status { status: u16, detail: Option<String> },
    #[error("analysis response is not valid JSON: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("analysis response has no colors field")]
    MissingColors,
    #[error("failed to serialize analysis request: {0}")]
    Serialize(#[source] serde_json::Error),
}

pub type ClientResult<T> = std::result::Result<T, AnalysisError>;
