//! Cleanup passes applied to the generated OpenAPI text.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

const INFO: &str = "info";
const DESCRIPTION: &str = "description";

/// Literal reference fragment stripped by [`remove_search_parameter`],
/// trailing comma included.
static SEARCH_PARAMETER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r##"\{"\$ref":"#/components/parameters/search"\},"##).unwrap());

/// Deletes the `description` member of the top-level `info` object and
/// re-serializes the document. Blank input is returned unchanged; input
/// without an `info` object is re-serialized as-is.
///
/// # Errors
///
/// Fails when non-blank input is not parseable JSON.
pub fn remove_description(swagger: &str) -> Result<String> {
    if swagger.trim().is_empty() {
        return Ok(swagger.to_string());
    }
    let mut document: Value =
        serde_json::from_str(swagger).context("generated OpenAPI text is not valid JSON")?;
    if let Some(info) = document.get_mut(INFO).and_then(Value::as_object_mut) {
        // shift_remove keeps the order of the remaining members intact.
        info.shift_remove(DESCRIPTION);
    }
    Ok(document.to_string())
}

/// Removes every literal occurrence of the search parameter reference from
/// the serialized text. This is a plain textual substitution with no
/// structural JSON awareness; all other text is left byte-identical.
pub fn remove_search_parameter(swagger: &str) -> String {
    SEARCH_PARAMETER.replace_all(swagger, "").into_owned()
}
