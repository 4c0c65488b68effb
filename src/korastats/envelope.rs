//! Envelope unwrapping for the two response shapes the upstream uses.
//!
//! `SeasonList` and `SeasonMatchList` nest everything under a `root` key
//! with the payload at `root.object`; `MatchEventList` is flat with the
//! payload at top-level `data`. The two shapes are preserved exactly as
//! observed and selected per endpoint, never auto-detected.

use crate::error::AppError;
use serde_json::{Map, Value};

/// Message used when the upstream rejects a call without saying why
pub const DEFAULT_FAILURE_MESSAGE: &str = "Korastats API returned an error.";

/// Message used when the upstream succeeds without a message field
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Success";

/// A successfully unwrapped response: the upstream message and the payload
/// subtree the per-endpoint read models parse.
#[derive(Debug, Clone)]
pub struct Envelope {
    pub message: String,
    pub payload: Value,
}

/// Per-endpoint unwrap strategy. Fixed at the call site, not inferred
/// from the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnwrapStrategy {
    /// Flag/message at `root.result` / `root.message`, payload at `root.object`
    Nested,
    /// Flag/message at the top level, payload at `data`
    Flat,
}

impl UnwrapStrategy {
    /// Extract the envelope, short-circuiting with an application error
    /// when the success flag is false or absent. The payload subtree is
    /// never inspected on the failure path.
    pub fn unwrap(self, raw: &Value) -> Result<Envelope, AppError> {
        match self {
            UnwrapStrategy::Nested => {
                let root = raw.get("root").cloned().unwrap_or_else(empty_object);
                unwrap_container(&root, "object")
            }
            UnwrapStrategy::Flat => unwrap_container(raw, "data"),
        }
    }
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

/// The upstream is inconsistent about the flag type; booleans, non-zero
/// numbers and the strings "true"/"1" all count as success.
fn flag_is_success(flag: Option<&Value>) -> bool {
    match flag {
        Some(Value::Bool(value)) => *value,
        Some(Value::Number(number)) => number.as_f64().is_some_and(|v| v != 0.0),
        Some(Value::String(text)) => text == "true" || text == "1",
        _ => false,
    }
}

fn unwrap_container(container: &Value, payload_key: &str) -> Result<Envelope, AppError> {
    let message = container.get("message").and_then(Value::as_str);

    if !flag_is_success(container.get("result")) {
        return Err(AppError::application(
            message.unwrap_or(DEFAULT_FAILURE_MESSAGE),
        ));
    }

    Ok(Envelope {
        message: message.unwrap_or(DEFAULT_SUCCESS_MESSAGE).to_string(),
        payload: container
            .get(payload_key)
            .cloned()
            .unwrap_or_else(empty_object),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_success() {
        let raw = json!({
            "root": {
                "result": true,
                "message": "OK",
                "object": { "Data": [1, 2] }
            }
        });
        let envelope = UnwrapStrategy::Nested.unwrap(&raw).unwrap();
        assert_eq!(envelope.message, "OK");
        assert_eq!(envelope.payload, json!({ "Data": [1, 2] }));
    }

    #[test]
    fn test_nested_failure_carries_upstream_message() {
        let raw = json!({
            "root": { "result": false, "message": "Season not found" }
        });
        let err = UnwrapStrategy::Nested.unwrap(&raw).unwrap_err();
        match err {
            AppError::Application { message } => assert_eq!(message, "Season not found"),
            other => panic!("Expected application error, got {other:?}"),
        }
    }

    #[test]
    fn test_nested_failure_default_message() {
        let raw = json!({ "root": { "result": false } });
        let err = UnwrapStrategy::Nested.unwrap(&raw).unwrap_err();
        assert_eq!(
            err.user_message(),
            "❌ API Error: Korastats API returned an error."
        );
    }

    #[test]
    fn test_nested_missing_root_is_failure() {
        let raw = json!({ "unexpected": 1 });
        let err = UnwrapStrategy::Nested.unwrap(&raw).unwrap_err();
        assert!(matches!(err, AppError::Application { .. }));
    }

    #[test]
    fn test_nested_absent_flag_is_failure_even_with_payload() {
        // The payload must never rescue a response without a success flag
        let raw = json!({
            "root": { "object": { "Data": [ { "id": 1 } ] } }
        });
        assert!(UnwrapStrategy::Nested.unwrap(&raw).is_err());
    }

    #[test]
    fn test_nested_missing_payload_degrades_to_empty_object() {
        let raw = json!({ "root": { "result": true } });
        let envelope = UnwrapStrategy::Nested.unwrap(&raw).unwrap();
        assert_eq!(envelope.message, DEFAULT_SUCCESS_MESSAGE);
        assert_eq!(envelope.payload, json!({}));
    }

    #[test]
    fn test_flat_success() {
        let raw = json!({
            "result": true,
            "message": "done",
            "data": { "match": { "events": [] } }
        });
        let envelope = UnwrapStrategy::Flat.unwrap(&raw).unwrap();
        assert_eq!(envelope.message, "done");
        assert_eq!(envelope.payload, json!({ "match": { "events": [] } }));
    }

    #[test]
    fn test_flat_failure() {
        let raw = json!({ "result": false, "message": "Match not found" });
        let err = UnwrapStrategy::Flat.unwrap(&raw).unwrap_err();
        assert_eq!(err.user_message(), "❌ API Error: Match not found");
    }

    #[test]
    fn test_flag_truthiness_variants() {
        for flag in [json!(true), json!(1), json!(2.5), json!("true"), json!("1")] {
            let raw = json!({ "result": flag, "data": {} });
            assert!(
                UnwrapStrategy::Flat.unwrap(&raw).is_ok(),
                "flag {flag:?} should be success"
            );
        }

        for flag in [
            json!(false),
            json!(0),
            json!(null),
            json!(""),
            json!("no"),
            json!([]),
        ] {
            let raw = json!({ "result": flag, "data": {} });
            assert!(
                UnwrapStrategy::Flat.unwrap(&raw).is_err(),
                "flag {flag:?} should be failure"
            );
        }
    }
}
