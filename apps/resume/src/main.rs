use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume::config::Config;
use resume::content::ContentDir;
use resume::dates::SystemClock;
use resume::document::{build_document, DocumentOptions};
use resume::intl::{Intl, Locale};
use resume::theme::{font_faces, Theme, BODY_FONT};

fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Logs go to stderr; stdout carries the document
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting resume v{}", env!("CARGO_PKG_VERSION"));

    let locale = Locale::negotiate(config.locales.iter().map(String::as_str));
    let theme = Theme::new(config.theme);
    info!("Rendering {} résumé with {} theme", locale.code(), theme.name.as_str());

    let content_dir = ContentDir::new(&config.content_dir);
    info!("Loading content from {}", content_dir.root().display());
    let content = content_dir
        .load(locale)
        .with_context(|| format!("Failed to load content from {}", content_dir.root().display()))?;
    let intl = Intl::new(locale, content_dir.messages(locale)?);

    let options = DocumentOptions {
        site_url: config.site_url.clone(),
        fonts: font_faces(BODY_FONT, &config.fonts_dir),
        elapsed: config.elapsed,
    };
    let document = build_document(&content, &intl, &theme, &SystemClock, &options)
        .context("Failed to assemble résumé document")?;

    serde_json::to_writer_pretty(std::io::stdout().lock(), &document)?;
    println!();

    Ok(())
}
