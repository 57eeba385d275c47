//! Backend error-body normalization.
//!
//! The backend reports failures in several shapes: a validation `detail`
//! list of `{msg, ...}` objects, a single `msg`, `message` or `detail` field,
//! or a bare string. Every caller turns them into one display string here.

#[cfg(test)]
#[path = "errors_test.rs"]
mod errors_test;

use serde_json::Value;

/// Shown when the backend gave no usable explanation.
pub const GENERIC_FAILURE: &str = "Request failed. Please try again.";

/// Collapse a backend error body into a single display string.
///
/// Precedence: `detail` list (messages joined with `"; "`), `msg`, bare
/// string, `message`, `detail` string, any other object as compact JSON.
/// Non-JSON text is returned trimmed; an empty body yields [`GENERIC_FAILURE`].
#[must_use]
pub fn normalize_backend_error(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return GENERIC_FAILURE.to_owned();
    }
    let Ok(value) = serde_json::from_str::<Value>(trimmed) else {
        return trimmed.to_owned();
    };
    normalize_value(&value).unwrap_or_else(|| GENERIC_FAILURE.to_owned())
}

fn normalize_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => non_empty(s),
        Value::Object(map) => {
            if let Some(Value::Array(items)) = map.get("detail") {
                let joined = items
                    .iter()
                    .filter_map(item_message)
                    .collect::<Vec<_>>()
                    .join("; ");
                if !joined.is_empty() {
                    return Some(joined);
                }
            }
            if let Some(msg) = map.get("msg").and_then(Value::as_str).and_then(non_empty) {
                return Some(msg);
            }
            if let Some(message) = map.get("message").and_then(Value::as_str).and_then(non_empty) {
                return Some(message);
            }
            if let Some(detail) = map.get("detail").and_then(Value::as_str).and_then(non_empty) {
                return Some(detail);
            }
            if map.is_empty() {
                return None;
            }
            Some(value.to_string())
        }
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

fn item_message(item: &Value) -> Option<String> {
    match item {
        Value::String(s) => non_empty(s),
        Value::Object(map) => map.get("msg").and_then(Value::as_str).and_then(non_empty),
        _ => None,
    }
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
