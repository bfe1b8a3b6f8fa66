//! The two-stage conversion pipeline.
//!
//! Stage 1 turns the (possibly merged) EDMX v2 document into CSDL v4;
//! stage 2 turns that into OpenAPI 3.0 JSON text. Both stages run entirely
//! in memory on string buffers, with the fixed parameter set every
//! invocation uses.

use anyhow::{Context, Result};

use crate::merge::merge_annotations;
use crate::postprocess::{remove_description, remove_search_parameter};
use crate::xslt::{OutputMethod, Stage, StageParams, apply};

const FIXED_PARAMS: StageParams = StageParams {
    openapi_version: "3.0",
    pretty: true,
    diagram: true,
};

/// EDMX v2 to CSDL v4 rewrite rules.
const V2_TO_V4_CSDL: Stage = Stage {
    name: "V2-to-V4-CSDL",
    stylesheet: include_str!("assets/V2-to-V4-CSDL.xsl"),
    output: OutputMethod::Xml,
    params: FIXED_PARAMS,
};

/// CSDL v4 to OpenAPI JSON rules.
const V4_CSDL_TO_OPENAPI: Stage = Stage {
    name: "V4-CSDL-to-OpenAPI",
    stylesheet: include_str!("assets/V4-CSDL-to-OpenAPI.xsl"),
    output: OutputMethod::Text,
    params: FIXED_PARAMS,
};

/// Converts an EDMX v2 metadata document into OpenAPI 3.0 JSON.
///
/// Runs both transformation stages, then removes `info.description` and
/// strips the search parameter references from the result.
///
/// # Errors
///
/// Fails when either stage rejects its input or rules, or when the
/// generated text is not valid JSON. No partial output is returned.
pub fn edmx_to_openapi(edmx_xml: &str) -> Result<String> {
    let openapi = run_stages(edmx_xml)?;
    let openapi = remove_description(&openapi)?;
    Ok(remove_search_parameter(&openapi))
}

/// Converts an EDMX v2 metadata document into OpenAPI 3.0 JSON after
/// merging an external annotations document into it.
///
/// Unlike [`edmx_to_openapi`], this entry point only removes the
/// description; search parameter references are kept in the output.
///
/// # Errors
///
/// Same failure modes as [`edmx_to_openapi`]; a malformed annotations
/// document is not one of them, the merge silently degrades instead.
pub fn edmx_to_openapi_with_annotations(annotations_xml: &str, edmx_xml: &str) -> Result<String> {
    let merged = merge_annotations(annotations_xml, edmx_xml);
    let openapi = run_stages(&merged)?;
    remove_description(&openapi)
}

fn run_stages(edmx_xml: &str) -> Result<String> {
    let csdl = apply(&V2_TO_V4_CSDL, edmx_xml).context("EDMX v2 to CSDL v4 stage failed")?;
    apply(&V4_CSDL_TO_OPENAPI, &csdl).context("CSDL v4 to OpenAPI stage failed")
}
