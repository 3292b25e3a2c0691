//! Material color theming for design tokens.
//!
//! A single source color flows one way through the pipeline:
//! palettes ([`palette`]) → light and dark schemes ([`scheme`]) → token
//! exports ([`export`]).
//!
//! # Usage
//!
//! ```
//! use tonekit::{
//!     export::{DEFAULT_SCHEME_PREFIX, to_legacy_tokens, to_stylesheet},
//!     scheme::ColorRole,
//!     theme::Theme,
//! };
//!
//! let theme = Theme::from_source("#6750A4").unwrap();
//!
//! let css = to_stylesheet(&theme, DEFAULT_SCHEME_PREFIX);
//! assert!(css.starts_with(":root,\n[data-theme=\"light\"] {\n"));
//!
//! let legacy = to_legacy_tokens(&theme.schemes.light);
//! assert_eq!(
//!     legacy.get("--color-primary-default"),
//!     Some(theme.schemes.light.get(ColorRole::Primary).to_hex().as_str())
//! );
//! ```
//!
//! Writing tokens to a live surface goes through [`apply::TokenSink`].
#![deny(missing_docs, clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod error;

pub mod apply;
pub mod color;
pub mod config;
pub mod custom;
pub mod export;
pub mod image_source;
pub mod palette;
pub mod scheme;
pub mod science;
pub mod theme;

pub use crate::{
    color::Argb,
    error::{Error, Result},
    scheme::{ColorRole, Mode},
    theme::{Theme, ThemeOptions},
};
