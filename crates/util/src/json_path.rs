//! Slash-delimited path resolution over JSON documents.
//!
//! Paths look like `/info/title` or `/servers/[@0]/url`. A segment of the
//! form `[@N]` selects the element at offset `N` of an array; negative `N`
//! counts from the end, so `[@-1]` is the last element. Resolution is
//! read-only and never mutates the document.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use thiserror::Error;

/// Shared sentinel returned for every soft resolution miss.
static NULL: Value = Value::Null;

/// Grammar of an array index segment, e.g. `[@2]` or `[@-1]`.
///
/// The directive must be the entire segment. A segment that merely contains
/// one, like `items[@1]`, is treated as a plain object key.
static INDEX_DIRECTIVE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[@(-?\d+)\]$").unwrap());

/// Hard failures raised by path resolution.
///
/// Missing keys and type mismatches are soft and yield the null sentinel;
/// only an index outside the declared array bounds is an error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PathError {
    /// The index directive, after negative normalization, fell outside the array.
    #[error("array index {index} is out of bounds for array of length {len}")]
    IndexOutOfBounds { index: i64, len: usize },
}

/// Resolves a slash-delimited path against a JSON document.
///
/// Returns the reachable value, or JSON null when a segment names a missing
/// key or the current node cannot be descended into. Empty segments are
/// discarded, so `/a/b`, `a/b` and `//a//b` resolve identically.
///
/// # Errors
///
/// Returns [`PathError::IndexOutOfBounds`] when an `[@N]` segment addresses
/// an offset outside the array it is applied to.
///
/// # Example
/// ```rust
/// use serde_json::json;
/// use odata_openapi_util::get_by_path;
///
/// let doc = json!({ "a": { "b": [41, 42] } });
/// assert_eq!(get_by_path(&doc, "/a/b/[@1]").unwrap(), &json!(42));
/// assert_eq!(get_by_path(&doc, "/a/missing").unwrap(), &json!(null));
/// ```
pub fn get_by_path<'a>(value: &'a Value, path: &str) -> Result<&'a Value, PathError> {
    let mut current = value;
    for segment in path.split('/').filter(|segment| !segment.is_empty()) {
        if !current.is_object() && !current.is_array() {
            return Ok(&NULL);
        }
        match (current, index_directive(segment)) {
            (Value::Array(items), Some(index)) => {
                current = array_element(items, index)?;
            }
            (Value::Object(map), _) => match map.get(segment) {
                Some(member) => current = member,
                None => return Ok(&NULL),
            },
            _ => return Ok(&NULL),
        }
    }
    Ok(current)
}

fn index_directive(segment: &str) -> Option<i64> {
    INDEX_DIRECTIVE
        .captures(segment)
        .and_then(|captures| captures[1].parse::<i64>().ok())
}

fn array_element(items: &[Value], index: i64) -> Result<&Value, PathError> {
    let len = items.len();
    // -1 addresses the last element.
    let offset = if index < 0 { len as i64 + index } else { index };
    if offset < 0 || offset >= len as i64 {
        return Err(PathError::IndexOutOfBounds { index, len });
    }
    Ok(&items[offset as usize])
}
