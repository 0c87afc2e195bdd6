// Inline SVG icons.
// Raw markup is colour-substituted, parsed, then mapped onto the renderer
// whitelist. Markup is parsed again on every render; nothing is cached.

pub mod node;
pub mod parser;
pub mod renderer;

pub use node::{IconNode, Props};
pub use parser::parse_markup;
pub use renderer::{render, render_keyed, RenderContext, RenderNode, RendererKind, ROOT_KEY};

use crate::theme::Theme;

/// Placeholder token authored in icon markup.
pub const CURRENT_COLOR: &str = "currentColor";

/// Width and height used when neither `size` nor an explicit dimension is given.
pub const DEFAULT_ICON_SIZE: &str = "12";

/// Caller-facing icon options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconProps {
    pub size: Option<String>,
    pub color: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    /// Extra props applied on top of everything else.
    pub extra: Props,
}

impl IconProps {
    pub fn sized(size: impl Into<String>) -> Self {
        Self {
            size: Some(size.into()),
            ..Self::default()
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Replaces every `currentColor` in the raw markup.
///
/// Runs once on the whole string before parsing, so attribute values and
/// inline styles are reached alike.
pub fn substitute_current_color(markup: &str, color: &str) -> String {
    markup.replace(CURRENT_COLOR, color)
}

/// Renders raw icon markup.
///
/// `currentColor` becomes `props.color`, or the theme foreground when no
/// colour is given. `width`/`height` resolve from `size`, falling back to
/// [`DEFAULT_ICON_SIZE`]; an explicit `width`/`height` is applied on top as
/// a caller prop, followed by `extra`. Markup that does not parse renders
/// nothing.
pub fn render_icon(markup: &str, props: &IconProps, theme: &Theme) -> Option<RenderNode> {
    let color = props
        .color
        .as_deref()
        .unwrap_or(theme.colors.foreground);
    let root = parse_markup(&substitute_current_color(markup, color)).ok()?;

    let resolved = props.size.as_deref().unwrap_or(DEFAULT_ICON_SIZE);
    let mut forwarded = Props::new();
    forwarded.insert("width".to_string(), resolved.to_string());
    forwarded.insert("height".to_string(), resolved.to_string());

    let mut overrides = Props::new();
    if let Some(width) = &props.width {
        overrides.insert("width".to_string(), width.clone());
    }
    if let Some(height) = &props.height {
        overrides.insert("height".to_string(), height.clone());
    }
    overrides.extend(props.extra.iter().map(|(k, v)| (k.clone(), v.clone())));

    let mut ctx = RenderContext {
        forwarded,
        overrides,
        ..RenderContext::default()
    };
    if let Some(size) = &props.size {
        ctx = ctx.with_size(size.clone());
    }
    if let Some(color) = &props.color {
        ctx = ctx.with_color(color.clone());
    }
    render(&root, &ctx)
}
