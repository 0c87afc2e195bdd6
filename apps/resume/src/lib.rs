//! Locale-aware résumé content.
//!
//! The core is two pure components:
//! - [`dates`]: ordering of date ranges (ongoing first, then by end date) and
//!   whole-month elapsed durations.
//! - [`icon`]: SVG markup parsed into a node tree and mapped onto a fixed
//!   whitelist of presentation primitives.
//!
//! Around it sit content loading and validation, message formatting for `en`
//! and `nl`, light/dark themes, and assembly of a serializable document that
//! a PDF or web binding can draw.

pub mod config;
pub mod content;
pub mod dates;
pub mod document;
pub mod errors;
pub mod icon;
pub mod intl;
pub mod theme;
