//! Keyed accessors for optional JSON object members.
//!
//! These treat an absent member and an explicit JSON null the same way,
//! which is what the conversion post-processing wants when poking at
//! generated documents.

use serde_json::{Map, Value};

/// Returns true when the value is absent or JSON null.
pub fn is_null(value: Option<&Value>) -> bool {
    value.is_none_or(Value::is_null)
}

/// Returns the string member under `key`, or `None` when absent, null, or
/// not a string.
pub fn value_as_str<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    object.get(key).and_then(Value::as_str)
}

/// Returns the object member under `key`, or `None` when absent, null, or
/// not an object.
pub fn value_as_object<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    object.get(key).and_then(Value::as_object)
}

/// Returns the array member under `key`, or `None` when absent, null, or
/// not an array.
pub fn value_as_array<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a Vec<Value>> {
    object.get(key).and_then(Value::as_array)
}

/// Builds a JSON array from a list of strings.
pub fn array_from_strings(values: &[String]) -> Value {
    Value::Array(values.iter().map(|value| Value::String(value.clone())).collect())
}
