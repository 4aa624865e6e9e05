//! Photo-recognition pipeline: image in, reviewed batch into the store.
//!
//! Two stages on purpose: `analyze` produces a normalized batch for human
//! review, and `InventoryService::commit_recognized` merges the (possibly
//! corrected) batch once the operator confirms it. Nothing is persisted by
//! `analyze` itself.

use stockpilot_ai::{Normalized, RecognitionModel, RecognitionRequest, annotate_summary, normalize_items};
use stockpilot_inventory::RecognizedArtSupply;

use super::{PipelineError, split_response};

/// What the recognition model produced, normalized for review.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionReport {
    pub outcome: Normalized<RecognizedArtSupply>,
    /// The model's free-text commentary; carries an appended warning when
    /// normalization failed.
    pub analysis_summary: String,
}

/// Run the recognition model over a photo and normalize its output.
///
/// Aborts only on invalid input or a transport failure; a model that
/// answered with the wrong shape still yields a report, with the raw value
/// preserved inside `outcome` and a warning appended to the summary.
pub fn analyze<M: RecognitionModel>(
    model: &M,
    request: &RecognitionRequest,
) -> Result<RecognitionReport, PipelineError> {
    request.validate()?;

    let response = model.recognize(request)?;
    let (raw_items, summary) = split_response(response, "recognizedItems");

    let outcome = normalize_items::<RecognizedArtSupply>(raw_items);
    let analysis_summary = match outcome.error() {
        Some(error) => {
            tracing::warn!(%error, "recognition output did not match its schema");
            annotate_summary(&summary, error)
        }
        None => summary,
    };

    Ok(RecognitionReport {
        outcome,
        analysis_summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value as JsonValue, json};
    use stockpilot_ai::AiError;

    struct StubModel {
        response: Result<Option<JsonValue>, AiError>,
    }

    impl RecognitionModel for StubModel {
        fn recognize(&self, _request: &RecognitionRequest) -> Result<Option<JsonValue>, AiError> {
            self.response.clone()
        }
    }

    fn request() -> RecognitionRequest {
        RecognitionRequest::new("data:image/jpeg;base64,/9j/4AAQ")
    }

    #[test]
    fn structured_response_yields_ok_outcome() {
        let model = StubModel {
            response: Ok(Some(json!({
                "recognizedItems": [{"name": "Round Tip Paintbrush - Size 4", "count": 2}],
                "analysisSummary": "Two brushes on the left shelf."
            }))),
        };

        let report = analyze(&model, &request()).unwrap();
        let items = report.outcome.items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].count, 2);
        assert_eq!(report.analysis_summary, "Two brushes on the left shelf.");
    }

    #[test]
    fn stringified_item_list_is_recovered() {
        let model = StubModel {
            response: Ok(Some(json!({
                "recognizedItems": "[{\"name\": \"Canvas Panel 8x10 inch\", \"count\": 5}]",
                "analysisSummary": "Stacked panels."
            }))),
        };

        let report = analyze(&model, &request()).unwrap();
        assert!(matches!(report.outcome, Normalized::Recovered(_)));
    }

    #[test]
    fn wrong_shape_keeps_summary_and_appends_warning() {
        let model = StubModel {
            response: Ok(Some(json!({
                "recognizedItems": {"name": "not an array"},
                "analysisSummary": "I found some things."
            }))),
        };

        let report = analyze(&model, &request()).unwrap();
        assert!(report.outcome.is_failed());
        assert!(report.analysis_summary.starts_with("I found some things."));
        assert!(report.analysis_summary.contains("WARNING:"));
    }

    #[test]
    fn empty_response_is_the_retryable_failure() {
        let model = StubModel {
            response: Ok(None),
        };

        let report = analyze(&model, &request()).unwrap();
        assert_eq!(report.outcome.error(), Some(&AiError::EmptyOutput));
    }

    #[test]
    fn non_image_request_never_reaches_the_model() {
        struct PanicModel;
        impl RecognitionModel for PanicModel {
            fn recognize(&self, _r: &RecognitionRequest) -> Result<Option<JsonValue>, AiError> {
                panic!("model must not be called");
            }
        }

        let bad = RecognitionRequest::new("https://example.com/photo.jpg");
        let err = analyze(&PanicModel, &bad).unwrap_err();
        assert!(matches!(err, PipelineError::Ai(AiError::InvalidInput(_))));
    }

    #[test]
    fn transport_failure_surfaces_verbatim() {
        let model = StubModel {
            response: Err(AiError::transport("provider unreachable")),
        };

        let err = analyze(&model, &request()).unwrap_err();
        assert_eq!(err.to_string(), "provider unreachable");
    }
}
