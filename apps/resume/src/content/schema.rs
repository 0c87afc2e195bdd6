//! Typed résumé collections.
//!
//! `*File` structs mirror what authors write on disk; the resolved types are
//! what the rest of the crate consumes (stack references replaced by entries,
//! icon file names replaced by markup, ids attached).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dates::{DateRange, HasRange};
use crate::errors::ContentError;

// ────────────────────────────────────────────────────────────────────────────
// Validated values
// ────────────────────────────────────────────────────────────────────────────

/// `#rrggbb`, case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    pub fn parse(raw: &str) -> Result<Self, ContentError> {
        let valid = raw.len() == 7
            && raw.starts_with('#')
            && raw[1..].chars().all(|c| c.is_ascii_hexdigit());
        if valid {
            Ok(Self(raw.to_string()))
        } else {
            Err(ContentError::InvalidColor(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        HexColor::parse(&raw).map_err(serde::de::Error::custom)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// On-disk shapes
// ────────────────────────────────────────────────────────────────────────────

/// `experience/<locale>/<id>.json`
#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceFile {
    pub title: String,
    pub company: Option<String>,
    pub icon: String,
    pub range: DateRange,
    /// Ids of `stack/<id>.json` entries.
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default)]
    pub body: String,
}

/// `education/<locale>/<id>.json`
#[derive(Debug, Clone, Deserialize)]
pub struct EducationFile {
    pub title: String,
    pub institution: String,
    pub range: DateRange,
    #[serde(default)]
    pub body: String,
}

/// `stack/<id>.json`; `icon` names a file under `icons/`.
#[derive(Debug, Clone, Deserialize)]
pub struct StackFile {
    pub title: String,
    pub icon: String,
    pub color: HexColor,
}

// ────────────────────────────────────────────────────────────────────────────
// Resolved entries
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct StackEntry {
    pub id: String,
    pub title: String,
    /// Raw SVG markup, read from the icon file.
    pub icon: String,
    pub color: HexColor,
}

#[derive(Debug, Clone, Serialize)]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: Option<String>,
    pub icon: String,
    pub range: DateRange,
    /// Sorted by title.
    pub stack: Vec<StackEntry>,
    pub body: String,
}

impl HasRange for Experience {
    fn range(&self) -> &DateRange {
        &self.range
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Education {
    pub id: String,
    pub title: String,
    pub institution: String,
    pub range: DateRange,
    pub body: String,
}

impl HasRange for Education {
    fn range(&self) -> &DateRange {
        &self.range
    }
}

/// `courses/<id>.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub url: String,
}

/// One element of `skills/<locale>.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub title: String,
}

/// `profile.json`: header details shared by every locale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
    /// ISO 3166 region code, shown as a localized name.
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Everything needed to assemble one localized résumé.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeContent {
    pub profile: Profile,
    pub summary: String,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub courses: Vec<Course>,
    pub skills: Vec<Skill>,
}
