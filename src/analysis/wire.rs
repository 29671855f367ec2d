use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{AnalysisResult, ColorEntry};

const FALLBACK_SWATCH: &str = "rgb(0,0,0)";

#[derive(Debug, Serialize)]
pub(super) struct AnalyzeRequest<'a> {
    pub(super) image: &'a str,
}

#[derive(Debug, Deserialize)]
pub(super) struct AnalyzeResponse {
    #[serde(default)]
    pub(super) colors: Option<BTreeMap<String, WireColor>>,
    #[serde(default)]
    pub(super) error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct WireColor {
    pub(super) percent: f64,
    #[serde(default = "fallback_swatch")]
    pub(super) swatch: String,
}

fn fallback_swatch() -> String {
    FALLBACK_SWATCH.to_string()
}

pub(super) fn into_result(colors: BTreeMap<String, WireColor>) -> AnalysisResult {
    colors
        .into_iter()
        .map(|(name, color)| ColorEntry::new(name, color.swatch, color.percent))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_image_field_only() {
        let body = serde_json::to_string(&AnalyzeRequest {
            image: "data:image/jpeg;base64,AAAA",
        })
        .expect("serialize request");
        assert_eq!(body, r#"{"image":"data:image/jpeg;base64,AAAA"}"#);
    }

    #[test]
    fn missing_swatch_falls_back_to_black() {
        let response: AnalyzeResponse =
            serde_json::from_str(r#"{"colors":{"gray":{"percent":12.5}}}"#).expect("parse");
        let result = into_result(response.colors.expect("colors present"));
        assert_eq!(
            result.get("gray"),
            Some(&ColorEntry::new("gray", "rgb(0,0,0)", 12.5))
        );
    }

    #[test]
    fn error_body_parses_without_colors() {
        let response: AnalyzeResponse =
            serde_json::from_str(r#"{"error":"No image data provided"}"#).expect("parse");
        assert!(response.colors.is_none());
        assert_eq!(response.error.as_deref(), Some("No image data provided"));
    }
}
