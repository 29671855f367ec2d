use crate::extract::EncodedCrop;

use super::wire::{into_result, AnalyzeRequest, AnalyzeResponse};
use super::{AnalysisError, AnalysisResult, AnalysisTransport, ClientResult, HttpTransport};

pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:5050/analyze";

/// Single-shot client for the color analysis service. No retries.
#[derive(Debug, Clone)]
pub struct AnalysisClient<T = HttpTransport> {
    service_url: String,
    transport: T,
}

impl AnalysisClient<HttpTransport> {
    pub fn http(service_url: impl Into<String>) -> Self {
        Self::with_transport(service_url, HttpTransport::new())
    }
}

impl<T: AnalysisTransport> AnalysisClient<T> {
    pub fn with_transport(service_url: impl Into<String>, transport: T) -> Self {
        Self {
            service_url: service_url.into(),
            transport,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn analyze(&self, crop: &EncodedCrop) -> ClientResult<AnalysisResult> {
        let body = serde_json::to_string(&AnalyzeRequest {
            image: crop.data_uri(),
        })
        .map_err(AnalysisError::Serialize)?;

        tracing::info!(
            url = %self.service_url,
            width = crop.width(),
            height = crop.height(),
            "requesting color analysis"
        );
        let response = self.transport.post_json(&self.service_url, &body)?;

        if !response.is_success() {
            let detail = serde_json::from_slice::<AnalyzeResponse>(&response.body)
                .ok()
                .and_then(|parsed| parsed.error);
            return Err(AnalysisError::Status {
                status: response.status,
                detail,
            });
        }

        let parsed: AnalyzeResponse =
            serde_json::from_slice(&response.body).map_err(AnalysisError::Malformed)?;
        let colors = parsed.colors.ok_or(AnalysisError::MissingColors)?;
        let result = into_result(colors);
        tracing::info!(colors = result.len(), "color analysis complete");
        Ok(result)
    }
}
