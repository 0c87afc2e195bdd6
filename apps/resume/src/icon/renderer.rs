//! Recursive [`IconNode`] → [`RenderNode`] mapping.
//!
//! # Rules
//! - Text nodes become text leaves carrying the literal value.
//! - Elements are looked up (case-insensitively) in a fixed whitelist of
//!   renderer kinds. Unknown tags render nothing, along with their subtree.
//! - Every child gets the key `{parent}:{child_tag}_{index}`, so keys are
//!   unique across the whole tree.
//! - Props merge with increasing precedence: node attributes, then forwarded
//!   context props (size, color, …), then caller overrides. Forwarded props
//!   and overrides are passed to every descendant.
//!
//! Rendering never fails. Unsupported markup degrades to partial or empty output.

use serde::{Deserialize, Serialize};

use crate::icon::node::{IconNode, Props};

/// Key given to the root of every rendered icon.
pub const ROOT_KEY: &str = "svg";

// ────────────────────────────────────────────────────────────────────────────
// Renderer whitelist
// ────────────────────────────────────────────────────────────────────────────

/// Presentation primitives a drawing surface must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RendererKind {
    Svg,
    Line,
    Polyline,
    Polygon,
    Path,
    Rect,
    Circle,
    Ellipse,
    TextSpan,
    Group,
    Stop,
    Defs,
    ClipPath,
    LinearGradient,
    RadialGradient,
}

static RENDERERS: &[(&str, RendererKind)] = &[
    ("svg", RendererKind::Svg),
    ("line", RendererKind::Line),
    ("polyline", RendererKind::Polyline),
    ("polygon", RendererKind::Polygon),
    ("path", RendererKind::Path),
    ("rect", RendererKind::Rect),
    ("circle", RendererKind::Circle),
    ("ellipse", RendererKind::Ellipse),
    ("span", RendererKind::TextSpan),
    ("g", RendererKind::Group),
    ("stop", RendererKind::Stop),
    ("defs", RendererKind::Defs),
    ("clippath", RendererKind::ClipPath),
    ("lineargradient", RendererKind::LinearGradient),
    ("radialgradient", RendererKind::RadialGradient),
];

impl RendererKind {
    /// Resolves a markup tag name; `None` for anything outside the whitelist.
    pub fn for_tag(tag: &str) -> Option<Self> {
        RENDERERS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(tag))
            .map(|(_, kind)| *kind)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Render tree
// ────────────────────────────────────────────────────────────────────────────

/// Output tree, isomorphic to the input minus dropped nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderNode {
    Text {
        value: String,
    },
    Element {
        kind: RendererKind,
        key: String,
        props: Props,
        children: Vec<RenderNode>,
    },
}

impl RenderNode {
    pub fn text(value: impl Into<String>) -> Self {
        RenderNode::Text {
            value: value.into(),
        }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            RenderNode::Text { .. } => None,
            RenderNode::Element { key, .. } => Some(key),
        }
    }
}

/// Presentation properties forwarded down the whole tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    pub size: Option<String>,
    pub color: Option<String>,
    /// Any further props to forward (width, height, …).
    pub forwarded: Props,
    /// Caller-supplied props that beat everything else.
    pub overrides: Props,
}

impl RenderContext {
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Forwarded props and overrides flattened in precedence order.
    fn inherited_props(&self) -> Props {
        let mut props = Props::new();
        if let Some(size) = &self.size {
            props.insert("size".to_string(), size.clone());
        }
        if let Some(color) = &self.color {
            props.insert("color".to_string(), color.clone());
        }
        props.extend(self.forwarded.iter().map(|(k, v)| (k.clone(), v.clone())));
        props.extend(self.overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        props
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rendering
// ────────────────────────────────────────────────────────────────────────────

/// Renders a tree rooted at `node` with the root key [`ROOT_KEY`].
pub fn render(node: &IconNode, ctx: &RenderContext) -> Option<RenderNode> {
    render_keyed(node, ROOT_KEY, ctx)
}

/// Renders a tree whose root carries `key`.
pub fn render_keyed(node: &IconNode, key: &str, ctx: &RenderContext) -> Option<RenderNode> {
    let inherited = ctx.inherited_props();
    render_node(node, key, &inherited)
}

fn render_node(node: &IconNode, key: &str, inherited: &Props) -> Option<RenderNode> {
    match node {
        IconNode::Text { value } => Some(RenderNode::text(value.clone())),
        IconNode::Element {
            tag_name,
            properties,
            children,
        } => {
            let kind = RendererKind::for_tag(tag_name)?;

            let mut props = properties.clone();
            props.extend(inherited.iter().map(|(k, v)| (k.clone(), v.clone())));

            let children = children
                .iter()
                .enumerate()
                .filter_map(|(index, child)| {
                    let child_key = format!("{key}:{}_{index}", child.tag_name());
                    render_node(child, &child_key, inherited)
                })
                .collect();

            Some(RenderNode::Element {
                kind,
                key: key.to_string(),
                props,
                children,
            })
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
