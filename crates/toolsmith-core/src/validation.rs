//! Text and value presence checks.

use serde_json::Value;

/// Returns whether `text` holds something other than whitespace.
pub fn is_valid_text(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Returns whether `value` is present: not `null`, and not blank when text.
pub fn is_valid_value(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(text) => is_valid_text(text),
        _ => true,
    }
}
