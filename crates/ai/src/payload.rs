use serde_json::Value as JsonValue;

/// Closed classification of the raw item-list field a model returned.
///
/// Models are contractually supposed to emit a structured array here, but in
/// practice also emit JSON-encoded strings, differently-shaped values, or
/// nothing. Making the four cases a closed variant forces callers to handle
/// the fallback behavior totally instead of sniffing types ad hoc.
#[derive(Debug, Clone, PartialEq)]
pub enum AiPayload {
    /// The field was an array, as the schema asked for.
    MatchingArray(Vec<JsonValue>),
    /// The field was a string; it may still parse into the requested array.
    JsonString(String),
    /// The field was present but some other shape entirely.
    OtherShape(JsonValue),
    /// The field was absent, or the whole response was empty/null.
    Empty,
}

impl AiPayload {
    /// Classify a raw field value. `None` and JSON `null` both mean the
    /// model produced nothing usable here.
    pub fn classify(raw: Option<JsonValue>) -> Self {
        match raw {
            None | Some(JsonValue::Null) => AiPayload::Empty,
            Some(JsonValue::Array(items)) => AiPayload::MatchingArray(items),
            Some(JsonValue::String(s)) => AiPayload::JsonString(s),
            Some(other) => AiPayload::OtherShape(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn arrays_classify_as_matching() {
        let payload = AiPayload::classify(Some(json!([{"name": "Brush", "count": 1}])));
        match payload {
            AiPayload::MatchingArray(items) => assert_eq!(items.len(), 1),
            other => panic!("expected MatchingArray, got {other:?}"),
        }
    }

    #[test]
    fn strings_classify_as_json_string() {
        let payload = AiPayload::classify(Some(json!("[]")));
        assert_eq!(payload, AiPayload::JsonString("[]".to_string()));
    }

    #[test]
    fn absent_and_null_both_classify_as_empty() {
        assert_eq!(AiPayload::classify(None), AiPayload::Empty);
        assert_eq!(AiPayload::classify(Some(JsonValue::Null)), AiPayload::Empty);
    }

    #[test]
    fn objects_and_numbers_classify_as_other_shape() {
        assert!(matches!(
            AiPayload::classify(Some(json!({"foo": "bar"}))),
            AiPayload::OtherShape(_)
        ));
        assert!(matches!(
            AiPayload::classify(Some(json!(42))),
            AiPayload::OtherShape(_)
        ));
    }
}
