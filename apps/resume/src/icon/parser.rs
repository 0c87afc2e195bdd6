//! SVG markup → [`IconNode`] tree.
//!
//! Only elements and non-blank text survive; comments, processing
//! instructions and the indentation between elements are discarded.

use roxmltree::{Document, Node};

use crate::errors::IconError;
use crate::icon::node::{IconNode, Props};

/// Parses markup and returns its root element.
pub fn parse_markup(markup: &str) -> Result<IconNode, IconError> {
    let doc = Document::parse(markup)?;
    Ok(element(doc.root_element()))
}

fn element(node: Node<'_, '_>) -> IconNode {
    let properties: Props = node
        .attributes()
        .map(|attr| (attr.name().to_string(), attr.value().to_string()))
        .collect();
    IconNode::Element {
        tag_name: node.tag_name().name().to_string(),
        properties,
        children: node.children().filter_map(convert).collect(),
    }
}

fn convert(node: Node<'_, '_>) -> Option<IconNode> {
    if node.is_element() {
        return Some(element(node));
    }

    if node.is_text() {
        let value = node.text()?;
        if value.trim().is_empty() {
            return None;
        }
        return Some(IconNode::text(value));
    }

    None
}
