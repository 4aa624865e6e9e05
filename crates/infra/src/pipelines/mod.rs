//! The two AI pipelines: photo recognition and restock suggestion.
//!
//! Both share a shape: build a request, invoke the opaque model, normalize
//! whatever came back, and hand the caller a report that always carries the
//! analysis summary and, on failure, the raw value for display.

use serde_json::Value as JsonValue;
use thiserror::Error;

use stockpilot_ai::AiError;
use stockpilot_core::DomainError;

pub mod recognition;
pub mod restock;

/// Failures that abort a pipeline before it can produce a report.
///
/// Shape and empty-output failures do NOT abort; they come back inside the
/// report so partial data (summary, raw text) stays available for display.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// User-supplied input rejected before any model call.
    #[error(transparent)]
    Validation(#[from] DomainError),

    /// The model call itself failed, or its input was rejected.
    #[error(transparent)]
    Ai(#[from] AiError),
}

/// Split a raw model response into the named item-list field and the
/// analysis summary.
///
/// The response is supposed to be an object holding `field` and
/// `analysisSummary`. A response that is some other shape is treated as the
/// item-list payload itself (with an empty summary) so the normalizer can
/// classify and preserve it.
fn split_response(response: Option<JsonValue>, field: &str) -> (Option<JsonValue>, String) {
    match response {
        Some(JsonValue::Object(mut map)) => {
            let items = map.remove(field);
            let summary = match map.remove("analysisSummary") {
                Some(JsonValue::String(s)) => s,
                _ => String::new(),
            };
            (items, summary)
        }
        other => (other, String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn split_extracts_field_and_summary() {
        let response = json!({
            "recognizedItems": [{"name": "Brush", "count": 1}],
            "analysisSummary": "One brush, clearly visible."
        });
        let (items, summary) = split_response(Some(response), "recognizedItems");
        assert_eq!(items, Some(json!([{"name": "Brush", "count": 1}])));
        assert_eq!(summary, "One brush, clearly visible.");
    }

    #[test]
    fn missing_field_yields_none_with_summary_kept() {
        let response = json!({"analysisSummary": "Nothing I could count."});
        let (items, summary) = split_response(Some(response), "recognizedItems");
        assert_eq!(items, None);
        assert_eq!(summary, "Nothing I could count.");
    }

    #[test]
    fn non_object_response_passes_through_as_payload() {
        let (items, summary) = split_response(Some(json!([1, 2])), "recognizedItems");
        assert_eq!(items, Some(json!([1, 2])));
        assert_eq!(summary, "");
    }
}
