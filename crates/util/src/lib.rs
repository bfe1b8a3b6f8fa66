//! # OData OpenAPI Utilities
//!
//! Generic helpers over `serde_json::Value` trees used by the conversion
//! pipeline and its post-processing steps:
//!
//! - **`json_path`**: slash-delimited path resolution with `[@N]` array
//!   indexing, including negative (from-the-end) indexes
//! - **`json_scan`**: recursive, case-insensitive key existence checks
//! - **`json_value`**: small keyed accessors for optional object members

pub mod json_path;
pub mod json_scan;
pub mod json_value;

pub use json_path::{PathError, get_by_path};
pub use json_scan::contains_key_ignore_case;
pub use json_value::{array_from_strings, is_null, value_as_array, value_as_object, value_as_str};
