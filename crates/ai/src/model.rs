//! The opaque model-invocation boundary.
//!
//! Prompting, provider selection, and transport live behind these traits;
//! this crate only defines the requests it hands over and how the raw
//! responses come back.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::AiError;

/// Request for the photo-recognition model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionRequest {
    /// Photo as a data URI: `data:<mimetype>;base64,<encoded_data>`.
    pub image_data_uri: String,
    /// Optional operator instructions, e.g. "only count red items".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_instructions: Option<String>,
}

impl RecognitionRequest {
    pub fn new(image_data_uri: impl Into<String>) -> Self {
        Self {
            image_data_uri: image_data_uri.into(),
            user_instructions: None,
        }
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.user_instructions = Some(instructions.into());
        self
    }

    /// Reject anything that is not an image data URI before it reaches the
    /// model.
    pub fn validate(&self) -> Result<(), AiError> {
        if !self.image_data_uri.starts_with("data:image") {
            return Err(AiError::invalid_input("invalid image data provided"));
        }
        Ok(())
    }
}

/// Request for the restock-suggestion model. Both fields are JSON *text*;
/// callers validate them before invoking the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestockRequest {
    pub historical_sales_data: String,
    pub current_inventory_levels: String,
}

/// Recognizes and counts art supplies in a photo.
///
/// `Ok(None)` means the call completed but the model produced no output at
/// all; `Err(AiError::Transport)` means the call itself failed. The returned
/// value is the model's whole structured response, uninspected.
pub trait RecognitionModel: Send + Sync {
    fn recognize(&self, request: &RecognitionRequest) -> Result<Option<JsonValue>, AiError>;
}

/// Suggests restock quantities from sales history and current levels.
pub trait RestockModel: Send + Sync {
    fn suggest_restock(&self, request: &RestockRequest) -> Result<Option<JsonValue>, AiError>;
}
