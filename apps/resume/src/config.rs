use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::dates::ElapsedFormat;
use crate::theme::ThemeName;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub content_dir: PathBuf,
    pub fonts_dir: PathBuf,
    /// Preferred locales, most preferred first (e.g. `nl-NL,en`).
    pub locales: Vec<String>,
    pub theme: ThemeName,
    pub elapsed: ElapsedFormat,
    pub site_url: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key → value source.
    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let content_dir = PathBuf::from(require_var(&var, "CONTENT_DIR")?);
        let fonts_dir = var("FONTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| content_dir.join("fonts"));

        let theme_raw = var("RESUME_THEME").unwrap_or_else(|| "light".to_string());
        let theme = ThemeName::parse(&theme_raw)
            .ok_or_else(|| anyhow!("RESUME_THEME must be 'light' or 'dark', got '{theme_raw}'"))?;

        let elapsed = match var("RESUME_ELAPSED").as_deref() {
            Some("months") => ElapsedFormat::TotalMonths,
            Some("years") | None => ElapsedFormat::YearsAndMonths,
            Some(other) => {
                return Err(anyhow!("RESUME_ELAPSED must be 'years' or 'months', got '{other}'"))
            }
        };

        Ok(Config {
            content_dir,
            fonts_dir,
            locales: parse_locales(&var("RESUME_LOCALE").unwrap_or_else(|| "en".to_string())),
            theme,
            elapsed,
            site_url: var("SITE_URL").unwrap_or_else(|| "http://localhost:4321".to_string()),
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn require_var(var: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String> {
    var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_locales(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[("CONTENT_DIR", "/srv/content")]).unwrap();
        assert_eq!(config.content_dir, PathBuf::from("/srv/content"));
        assert_eq!(config.fonts_dir, PathBuf::from("/srv/content/fonts"));
        assert_eq!(config.locales, vec!["en"]);
        assert_eq!(config.theme, ThemeName::Light);
        assert_eq!(config.elapsed, ElapsedFormat::YearsAndMonths);
        assert_eq!(config.site_url, "http://localhost:4321");
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_content_dir_is_required() {
        let err = config(&[]).unwrap_err();
        assert!(err.to_string().contains("CONTENT_DIR"), "got {err}");
    }

    #[test]
    fn test_overrides_are_read() {
        let config = config(&[
            ("CONTENT_DIR", "content"),
            ("FONTS_DIR", "assets/fonts"),
            ("RESUME_LOCALE", "nl-NL,en"),
            ("RESUME_THEME", "dark"),
            ("RESUME_ELAPSED", "months"),
            ("SITE_URL", "https://cv.example.org"),
        ])
        .unwrap();
        assert_eq!(config.fonts_dir, PathBuf::from("assets/fonts"));
        assert_eq!(config.locales, vec!["nl-NL", "en"]);
        assert_eq!(config.theme, ThemeName::Dark);
        assert_eq!(config.elapsed, ElapsedFormat::TotalMonths);
        assert_eq!(config.site_url, "https://cv.example.org");
    }

    #[test]
    fn test_invalid_theme_and_elapsed_are_rejected() {
        let theme = config(&[("CONTENT_DIR", "c"), ("RESUME_THEME", "sepia")]).unwrap_err();
        assert!(theme.to_string().contains("RESUME_THEME"), "got {theme}");

        let elapsed = config(&[("CONTENT_DIR", "c"), ("RESUME_ELAPSED", "days")]).unwrap_err();
        assert!(elapsed.to_string().contains("RESUME_ELAPSED"), "got {elapsed}");
    }

    #[test]
    fn test_parse_locales_splits_and_trims() {
        assert_eq!(parse_locales("nl-NL, en ,"), vec!["nl-NL", "en"]);
        assert!(parse_locales("").is_empty());
    }
}
