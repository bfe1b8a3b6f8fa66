//! Recursive key-existence scan over JSON objects.

use serde_json::Value;

/// Returns true when any object node in the tree carries `key`, compared
/// case-insensitively. Traversal descends through object members only;
/// values nested inside arrays are not inspected. Short-circuits on the
/// first match.
///
/// # Example
/// ```rust
/// use serde_json::json;
/// use odata_openapi_util::contains_key_ignore_case;
///
/// let doc = json!({ "A": { "b": 1 } });
/// assert!(contains_key_ignore_case(&doc, "a"));
/// assert!(contains_key_ignore_case(&doc, "B"));
/// assert!(!contains_key_ignore_case(&doc, "c"));
/// ```
pub fn contains_key_ignore_case(value: &Value, key: &str) -> bool {
    match value {
        Value::Object(map) => map
            .iter()
            .any(|(member_key, member)| member_key.eq_ignore_ascii_case(key) || contains_key_ignore_case(member, key)),
        _ => false,
    }
}
