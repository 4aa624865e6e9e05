use serde::{Deserialize, Serialize};

/// One art supply identified in a photo by the recognition model.
///
/// Transient: produced by the AI boundary, consumed by the reconciler (or
/// discarded after human review). Field names follow the model's declared
/// output schema.
///
/// `count` is contractually `>= 1`, but models violate their own schema;
/// it stays signed so out-of-range values survive deserialization and can
/// be skipped explicitly during reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognizedArtSupply {
    pub name: String,
    pub count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
}

/// One restock suggestion from the restock model. Transient, display-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestockRecommendation {
    pub item_id: String,
    pub suggested_restock_quantity: f64,
}
