use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading and validating résumé content.
///
/// The icon renderer and the date calculator never fail; everything that can
/// go wrong happens while turning raw files into typed entries.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid color \"{0}\": expected #rrggbb")]
    InvalidColor(String),

    #[error("Icon \"{0}\" not found")]
    IconNotFound(String),

    #[error("Stack entry \"{id}\" referenced by {referenced_by} does not exist")]
    UnknownStackEntry { id: String, referenced_by: String },

    #[error("No summary found for locale '{0}'")]
    MissingSummary(String),

    #[error("Failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to load messages from {path}: {source}")]
    Messages {
        path: PathBuf,
        #[source]
        source: IntlError,
    },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by the strict SVG markup parser.
#[derive(Debug, Error)]
pub enum IconError {
    #[error("Invalid SVG markup: {0}")]
    Markup(#[from] roxmltree::Error),
}

/// Errors raised while formatting localized messages.
#[derive(Debug, Error)]
pub enum IntlError {
    #[error("Missing message: {0}")]
    MissingMessage(String),

    #[error("Malformed message '{id}': {reason}")]
    MalformedMessage { id: String, reason: String },

    #[error("Invalid message resource for '{locale}': {reason}")]
    Resource { locale: String, reason: String },
}
