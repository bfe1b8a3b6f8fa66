//! # OData OpenAPI Converter
//!
//! Converts OData EDMX v2 metadata documents into OpenAPI 3.0 JSON.
//! The conversion is a synchronous, in-memory pipeline:
//!
//! 1. **Annotation merge** (optional): external annotations are copied into
//!    the base document's first schema element (`merge`)
//! 2. **Stage 1**: EDMX v2 → CSDL v4, driven by the bundled
//!    `V2-to-V4-CSDL` rule asset (`xslt`)
//! 3. **Stage 2**: CSDL v4 → OpenAPI 3.0 JSON text, driven by the bundled
//!    `V4-CSDL-to-OpenAPI` rule asset
//! 4. **Post-processing**: drop `info.description` and strip the search
//!    parameter reference (`postprocess`)
//!
//! The structural mapping rules live entirely in the rule assets; the Rust
//! code only orchestrates parsing, transformation, and cleanup.

pub mod merge;
pub mod pipeline;
pub mod postprocess;
pub mod xslt;

pub use merge::merge_annotations;
pub use pipeline::{edmx_to_openapi, edmx_to_openapi_with_annotations};
pub use xslt::TransformError;
