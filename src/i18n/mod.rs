//! Internationalization (i18n) module for Kheti Guru.
//!
//! This module provides the locale catalog, translation lookup, and the
//! active-language state.
//!
//! # Overview
//!
//! - **Catalog**: one flattened translation map per [`Language`], built once from
//!   the YAML files in `config/locales/` (embedded at compile time)
//! - **Fallback Chain**: active language -> English -> the key itself
//! - **Interpolation**: `{name}` placeholders replaced from named parameters
//! - **Persistence**: the chosen language is saved under
//!   [`LANGUAGE_STORAGE_KEY`] in a [`crate::storage::KeyValueStore`]
//!
//! # Locale Files
//!
//! Each file has a single top-level key naming the language, and nested maps
//! that are flattened into dot-notation keys:
//!
//! ```yaml
//! hi:
//!   dashboard:
//!     welcome: "नमस्कार, {name}!"
//! ```
//!
//! This becomes accessible as `dashboard.welcome`.
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use kheti_guru::i18n::{Catalog, Language, Localizer};
//!
//! let catalog = Arc::new(Catalog::embedded().expect("built-in locales parse"));
//! let mut loc = Localizer::in_memory(catalog);
//! assert_eq!(loc.t_with("dashboard.welcome", &[("name", "Asha")]), "Hello, Asha!");
//!
//! loc.set_active_language(Language::Hi);
//! assert_eq!(loc.t_with("dashboard.welcome", &[("name", "Asha")]), "नमस्कार, Asha!");
//! ```
//!
//! # Error Handling
//!
//! - Missing keys fall back to English, then to the key itself
//! - Unrecognized language codes are ignored
//! - Storage failures are logged and never reach the caller

mod catalog;
mod language;
mod loader;
mod resolver;
pub mod translations;

pub use catalog::Catalog;
pub use language::{Language, UnknownLanguage};
pub use loader::{CatalogError, load_locale_file};
pub use resolver::{LANGUAGE_STORAGE_KEY, Localizer};
pub use translations::{
    Params, TranslationMap, interpolate, lookup_with_fallback, translate, translate_with_fallback,
};
