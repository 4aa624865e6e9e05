//! Result normalization: loosely-typed model output in, typed result out.

use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::error::AiError;
use crate::payload::AiPayload;

/// Outcome of normalizing a model's item-list field.
///
/// `Recovered` means the model returned a JSON-encoded string instead of the
/// structured array its schema asked for, and parsing that string rescued
/// the batch. Callers may want to log the distinction; consumers of the
/// items usually treat `Ok` and `Recovered` alike.
///
/// On `Failed` the raw value is preserved for display, never silently
/// dropped: partial information always beats none.
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized<T> {
    Ok(Vec<T>),
    Recovered(Vec<T>),
    Failed {
        error: AiError,
        raw: Option<JsonValue>,
    },
}

impl<T> Normalized<T> {
    /// The normalized items, if normalization succeeded either way.
    pub fn items(&self) -> Option<&[T]> {
        match self {
            Normalized::Ok(items) | Normalized::Recovered(items) => Some(items),
            Normalized::Failed { .. } => None,
        }
    }

    pub fn into_items(self) -> Option<Vec<T>> {
        match self {
            Normalized::Ok(items) | Normalized::Recovered(items) => Some(items),
            Normalized::Failed { .. } => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Normalized::Failed { .. })
    }

    /// The failure, if any. `AiError::EmptyOutput` is the retryable case.
    pub fn error(&self) -> Option<&AiError> {
        match self {
            Normalized::Failed { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Normalize a raw item-list field into `Vec<T>` or an explicit failure.
///
/// Total over the four payload shapes; parse errors are converted, never
/// propagated. This function must not panic on any input.
pub fn normalize_items<T: DeserializeOwned>(raw: Option<JsonValue>) -> Normalized<T> {
    match AiPayload::classify(raw) {
        AiPayload::Empty => Normalized::Failed {
            error: AiError::EmptyOutput,
            raw: None,
        },
        AiPayload::MatchingArray(items) => {
            let raw_array = JsonValue::Array(items);
            match serde_json::from_value::<Vec<T>>(raw_array.clone()) {
                Ok(items) => Normalized::Ok(items),
                Err(e) => Normalized::Failed {
                    error: AiError::shape_mismatch(format!(
                        "array elements did not match the item schema: {e}"
                    )),
                    raw: Some(raw_array),
                },
            }
        }
        AiPayload::JsonString(s) => match serde_json::from_str::<Vec<T>>(&s) {
            Ok(items) => Normalized::Recovered(items),
            Err(e) => Normalized::Failed {
                error: AiError::shape_mismatch(format!(
                    "item list arrived as an unparsable string: {e}"
                )),
                raw: Some(JsonValue::String(s)),
            },
        },
        AiPayload::OtherShape(value) => Normalized::Failed {
            error: AiError::shape_mismatch(format!(
                "expected an array, got {}",
                shape_name(&value)
            )),
            raw: Some(value),
        },
    }
}

/// Append a diagnostic note to the model's analysis summary. The summary is
/// otherwise opaque pass-through text.
pub fn annotate_summary(summary: &str, error: &AiError) -> String {
    format!("{summary}\n\nWARNING: {error}")
}

fn shape_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
