use std::collections::BTreeMap;

/// Attribute bag shared by parsed nodes and render nodes.
pub type Props = BTreeMap<String, String>;

/// One node of parsed SVG markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconNode {
    Text {
        value: String,
    },
    Element {
        tag_name: String,
        properties: Props,
        children: Vec<IconNode>,
    },
}

impl IconNode {
    pub fn text(value: impl Into<String>) -> Self {
        IconNode::Text {
            value: value.into(),
        }
    }

    pub fn element<K, V>(
        tag_name: impl Into<String>,
        properties: impl IntoIterator<Item = (K, V)>,
        children: Vec<IconNode>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        IconNode::Element {
            tag_name: tag_name.into(),
            properties: properties
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            children,
        }
    }

    /// Tag used when building child keys; text nodes report `text`.
    pub fn tag_name(&self) -> &str {
        match self {
            IconNode::Text { .. } => "text",
            IconNode::Element { tag_name, .. } => tag_name,
        }
    }
}
