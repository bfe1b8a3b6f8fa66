//! Thin wrapper around the xrust XSLT engine.
//!
//! A [`Stage`] pairs a bundled rule asset with the fixed parameter set and
//! the serialization mode of its result. Rule compilation runs with
//! refusing fetcher/parser callbacks so stylesheets cannot pull in external
//! documents or resources; this is a hard requirement, not a hardening
//! option.

use thiserror::Error;
use xrust::item::{Item, Node, SequenceTrait};
use xrust::parser::xml::parse as parse_xml;
use xrust::transform::context::StaticContextBuilder;
use xrust::trees::smite::RNode;
use xrust::xslt::from_document;
use xrust::{Error as XdmError, ErrorKind};

/// How a stage serializes its result sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMethod {
    /// Markup output, used by the CSDL stage.
    Xml,
    /// Plain text output, used by the OpenAPI JSON stage.
    Text,
}

/// Fixed parameters applied to every stage invocation.
///
/// The bundled rule assets declare these as `xsl:param` defaults with the
/// same values; the descriptor carries them as the documented contract of
/// the stage.
#[derive(Debug, Clone, Copy)]
pub struct StageParams {
    pub openapi_version: &'static str,
    pub pretty: bool,
    pub diagram: bool,
}

/// Descriptor for one transformation stage.
pub struct Stage {
    /// Logical rule asset name.
    pub name: &'static str,
    /// Embedded stylesheet text.
    pub stylesheet: &'static str,
    pub output: OutputMethod,
    pub params: StageParams,
}

/// Hard failures raised by a transformation stage. No partial output is
/// ever returned alongside one of these.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The stage input was not well-formed XML.
    #[error("stage '{stage}' rejected its input document: {message}")]
    InputParse { stage: &'static str, message: String },
    /// The bundled rule asset was not well-formed XML.
    #[error("rule asset '{stage}' is not well-formed: {message}")]
    RuleParse { stage: &'static str, message: String },
    /// The engine rejected the rule asset during compilation.
    #[error("rule asset '{stage}' failed to compile: {message}")]
    RuleCompile { stage: &'static str, message: String },
    /// Evaluation of the compiled rules against the input failed.
    #[error("stage '{stage}' failed to transform its input: {message}")]
    Evaluate { stage: &'static str, message: String },
    /// The rules ran but produced no output at all.
    #[error("stage '{stage}' produced no output")]
    EmptyOutput { stage: &'static str },
}

/// Applies a stage's rule asset to the input document and returns the
/// serialized result.
pub fn apply(stage: &Stage, input: &str) -> Result<String, TransformError> {
    tracing::debug!(
        stage = stage.name,
        openapi_version = stage.params.openapi_version,
        pretty = stage.params.pretty,
        diagram = stage.params.diagram,
        "applying rule asset"
    );

    let source = parse_document(input).map_err(|error| TransformError::InputParse {
        stage: stage.name,
        message: error.to_string(),
    })?;
    let style = parse_document(stage.stylesheet).map_err(|error| TransformError::RuleParse {
        stage: stage.name,
        message: error.to_string(),
    })?;

    // Secure processing: refuse every external document or resource request,
    // both while compiling the rules and while they run.
    let mut static_context = StaticContextBuilder::new()
        .message(|_| Ok(()))
        .fetcher(|_| Err(external_access_refused()))
        .parser(|_| Err(external_access_refused()))
        .build();

    let mut context = from_document(style, None, parse_document, |_| Err(external_access_refused()))
        .map_err(|error| TransformError::RuleCompile {
            stage: stage.name,
            message: error.to_string(),
        })?;
    context.context(vec![Item::Node(source)], 0);
    context.result_document(RNode::new_document());

    let sequence = context.evaluate(&mut static_context).map_err(|error| TransformError::Evaluate {
        stage: stage.name,
        message: error.to_string(),
    })?;

    let result = match stage.output {
        OutputMethod::Xml => sequence.to_xml(),
        OutputMethod::Text => sequence.to_string(),
    };
    // A stage that matched nothing serializes to nothing; surface that as a
    // failure instead of handing an empty document down the pipeline.
    if result.trim().is_empty() {
        return Err(TransformError::EmptyOutput { stage: stage.name });
    }
    Ok(result)
}

fn parse_document(input: &str) -> Result<RNode, XdmError> {
    let document = RNode::new_document();
    parse_xml(document.clone(), input, None)?;
    Ok(document)
}

fn external_access_refused() -> XdmError {
    XdmError::new(ErrorKind::Unknown, "external document resolution is disabled".to_string())
}

#[cfg(test)]
mod tests {
    use super::{OutputMethod, Stage, StageParams, TransformError, apply};

    const PARAMS: StageParams = StageParams {
        openapi_version: "3.0",
        pretty: true,
        diagram: true,
    };

    const WORD_RULES: &str = r#"<xsl:stylesheet version="1.0" xmlns:xsl="http://www.w3.org/1999/XSL/Transform">
  <xsl:output method="text"/>
  <xsl:template match="/"><xsl:value-of select="/doc/word"/></xsl:template>
</xsl:stylesheet>"#;

    #[test]
    fn applies_rules_to_input() {
        let stage = Stage {
            name: "test-rules",
            stylesheet: WORD_RULES,
            output: OutputMethod::Text,
            params: PARAMS,
        };
        let result = apply(&stage, "<doc><word>hello</word></doc>").expect("transformation succeeds");
        assert_eq!(result, "hello");
    }

    #[test]
    fn malformed_input_is_a_hard_failure() {
        let stage = Stage {
            name: "test-rules",
            stylesheet: WORD_RULES,
            output: OutputMethod::Text,
            params: PARAMS,
        };
        let error = apply(&stage, "<doc>").expect_err("input parse must fail");
        assert!(matches!(error, TransformError::InputParse { .. }));
    }

    #[test]
    fn empty_transform_output_is_a_hard_failure() {
        let stage = Stage {
            name: "test-rules",
            stylesheet: r#"<xsl:stylesheet version="1.0" xmlns:xsl="http://www.w3.org/1999/XSL/Transform">
  <xsl:template match="/"/>
</xsl:stylesheet>"#,
            output: OutputMethod::Text,
            params: PARAMS,
        };
        let error = apply(&stage, "<doc/>").expect_err("empty result must fail");
        assert!(matches!(error, TransformError::EmptyOutput { .. }));
    }

    #[test]
    fn malformed_rules_are_a_hard_failure() {
        let stage = Stage {
            name: "test-rules",
            stylesheet: "<xsl:stylesheet",
            output: OutputMethod::Text,
            params: PARAMS,
        };
        let error = apply(&stage, "<doc/>").expect_err("rule parse must fail");
        assert!(matches!(error, TransformError::RuleParse { .. }));
    }
}
