//! Restock-suggestion pipeline: sales history + current levels in,
//! display-only recommendations out. No persistence merge.

use stockpilot_ai::{Normalized, RestockModel, RestockRequest, annotate_summary, normalize_items};
use stockpilot_core::DomainError;
use stockpilot_inventory::RestockRecommendation;

use super::{PipelineError, split_response};

#[derive(Debug, Clone, PartialEq)]
pub struct RestockReport {
    pub outcome: Normalized<RestockRecommendation>,
    /// Opaque model commentary, passed through unmodified except for the
    /// warning appended when normalization failed.
    pub analysis_summary: String,
}

/// Validate the request's JSON blobs, invoke the restock model, and
/// normalize its `restockRecommendations` field.
///
/// Both input blobs must be syntactically valid JSON *before* the model is
/// invoked; otherwise this short-circuits with a validation error and never
/// spends the external call.
pub fn suggest<M: RestockModel>(
    model: &M,
    request: &RestockRequest,
) -> Result<RestockReport, PipelineError> {
    ensure_json("historical sales data", &request.historical_sales_data)?;
    ensure_json("current inventory levels", &request.current_inventory_levels)?;

    let response = model.suggest_restock(request)?;
    let (raw_items, summary) = split_response(response, "restockRecommendations");

    let outcome = normalize_items::<RestockRecommendation>(raw_items);
    let analysis_summary = match outcome.error() {
        Some(error) => {
            tracing::warn!(%error, "restock output did not match its schema");
            annotate_summary(&summary, error)
        }
        None => summary,
    };

    Ok(RestockReport {
        outcome,
        analysis_summary,
    })
}

fn ensure_json(label: &str, text: &str) -> Result<(), PipelineError> {
    serde_json::from_str::<serde_json::Value>(text)
        .map(|_| ())
        .map_err(|e| DomainError::validation(format!("{label} is not valid JSON: {e}")).into())
}
