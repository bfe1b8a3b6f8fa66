//! Merging external annotation documents into a base EDMX document.
//!
//! Both documents are expected to carry the same structural path to their
//! schema: root `Edmx` element, `DataServices` child, first `Schema` child.
//! Every `Annotations` element under the annotations schema is deep-copied
//! into the base schema.

use xmltree::{Element, XMLNode};

const DATA_SERVICES: &str = "DataServices";
const SCHEMA: &str = "Schema";
const ANNOTATIONS: &str = "Annotations";

/// Merges the `Annotations` elements of an external annotations document
/// into the first schema of the base EDMX document and returns the merged
/// document as text.
///
/// When either input is not well-formed XML, or the schema location cannot
/// be found in one of the documents, the base document text is returned
/// unchanged. A parse failure is logged but deliberately not surfaced to
/// the caller; conversion proceeds on the unmerged metadata.
pub fn merge_annotations(annotations_xml: &str, edmx_xml: &str) -> String {
    let annotations_root = match Element::parse(annotations_xml.as_bytes()) {
        Ok(root) => root,
        Err(error) => {
            tracing::warn!(%error, "annotations document is not well-formed, skipping merge");
            return edmx_xml.to_string();
        }
    };
    let mut base_root = match Element::parse(edmx_xml.as_bytes()) {
        Ok(root) => root,
        Err(error) => {
            tracing::warn!(%error, "base EDMX document is not well-formed, skipping merge");
            return edmx_xml.to_string();
        }
    };

    let annotation_elements = match first_schema(&annotations_root) {
        Some(schema) => annotations_of(schema),
        None => {
            tracing::warn!("annotations document has no schema element, skipping merge");
            return edmx_xml.to_string();
        }
    };
    let Some(base_schema) = first_schema_mut(&mut base_root) else {
        tracing::warn!("base EDMX document has no schema element, skipping merge");
        return edmx_xml.to_string();
    };

    tracing::debug!(count = annotation_elements.len(), "merging annotation elements into base schema");
    for annotation in annotation_elements {
        base_schema.children.push(XMLNode::Element(annotation));
    }

    serialize(&base_root).unwrap_or_else(|| edmx_xml.to_string())
}

/// First `Schema` element under the document's `DataServices` node.
fn first_schema(root: &Element) -> Option<&Element> {
    root.get_child(DATA_SERVICES)?
        .children
        .iter()
        .find_map(|node| match node {
            XMLNode::Element(element) if element.name == SCHEMA => Some(element),
            _ => None,
        })
}

fn first_schema_mut(root: &mut Element) -> Option<&mut Element> {
    root.get_mut_child(DATA_SERVICES)?
        .children
        .iter_mut()
        .find_map(|node| match node {
            XMLNode::Element(element) if element.name == SCHEMA => Some(element),
            _ => None,
        })
}

/// Deep copies of every `Annotations` child of the given schema.
fn annotations_of(schema: &Element) -> Vec<Element> {
    schema
        .children
        .iter()
        .filter_map(|node| match node {
            XMLNode::Element(element) if element.name == ANNOTATIONS => Some(element.clone()),
            _ => None,
        })
        .collect()
}

fn serialize(root: &Element) -> Option<String> {
    let mut buffer = Vec::new();
    if let Err(error) = root.write(&mut buffer) {
        tracing::warn!(%error, "failed to serialize merged document, falling back to unmerged base");
        return None;
    }
    String::from_utf8(buffer).ok()
}
