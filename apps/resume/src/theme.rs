//! Light/dark palettes and the font faces a drawing surface must register.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Font family used for all body text.
pub const BODY_FONT: &str = "Inter";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Light,
    Dark,
}

impl ThemeName {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "light" => Some(ThemeName::Light),
            "dark" => Some(ThemeName::Dark),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
        }
    }

    /// The theme a toggle link switches to.
    pub fn toggled(&self) -> Self {
        match self {
            ThemeName::Light => ThemeName::Dark,
            ThemeName::Dark => ThemeName::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub background: &'static str,
    pub foreground: &'static str,
    pub border: &'static str,
}

const LIGHT: Palette = Palette {
    background: "hsl(0, 0%, 100%)",
    foreground: "hsl(222.2, 84%, 4.9%)",
    border: "hsl(214.3, 31.8%, 91.4%)",
};

const DARK: Palette = Palette {
    background: "hsl(222.2, 84%, 4.9%)",
    foreground: "hsl(210, 40%, 98%)",
    border: "hsl(217.2, 32.6%, 17.5%)",
};

/// Resolved theme, passed explicitly to everything that needs colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub name: ThemeName,
    pub colors: Palette,
}

impl Theme {
    pub fn new(name: ThemeName) -> Self {
        let colors = match name {
            ThemeName::Light => LIGHT,
            ThemeName::Dark => DARK,
        };
        Self { name, colors }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font registration
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Regular,
    Medium,
    Bold,
}

impl FontWeight {
    fn file_suffix(&self) -> &'static str {
        match self {
            FontWeight::Regular => "Regular",
            FontWeight::Medium => "Medium",
            FontWeight::Bold => "Bold",
        }
    }
}

/// One font file to register with the drawing surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontFace {
    pub family: String,
    pub weight: FontWeight,
    pub src: PathBuf,
}

/// Faces for `family`, laid out as `<dir>/<family>/<family>-<Weight>.ttf`.
pub fn font_faces(family: &str, fonts_dir: &Path) -> Vec<FontFace> {
    [FontWeight::Regular, FontWeight::Medium, FontWeight::Bold]
        .into_iter()
        .map(|weight| FontFace {
            family: family.to_string(),
            weight,
            src: fonts_dir
                .join(family)
                .join(format!("{family}-{}.ttf", weight.file_suffix())),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_name_parse() {
        assert_eq!(ThemeName::parse("dark"), Some(ThemeName::Dark));
        assert_eq!(ThemeName::parse(" Light "), Some(ThemeName::Light));
        assert_eq!(ThemeName::parse("sepia"), None);
    }

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(ThemeName::Light.toggled(), ThemeName::Dark);
        assert_eq!(ThemeName::Dark.toggled().toggled(), ThemeName::Dark);
    }

    #[test]
    fn test_palettes_invert_background_and_foreground() {
        let light = Theme::new(ThemeName::Light);
        let dark = Theme::new(ThemeName::Dark);
        assert_eq!(light.colors.foreground, dark.colors.background);
        assert_ne!(light.colors.foreground, dark.colors.foreground);
    }

    #[test]
    fn test_font_faces_layout() {
        let faces = font_faces(BODY_FONT, Path::new("fonts"));
        assert_eq!(faces.len(), 3);
        assert_eq!(faces[0].src, PathBuf::from("fonts/Inter/Inter-Regular.ttf"));
        assert_eq!(faces[2].weight, FontWeight::Bold);
        assert_eq!(faces[2].src, PathBuf::from("fonts/Inter/Inter-Bold.ttf"));
    }
}
