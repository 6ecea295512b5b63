//! Locale file loading and parsing.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde_norway::Value;

use crate::i18n::language::Language;
use crate::i18n::translations::TranslationMap;

/// Errors raised while reading or parsing a locale file.
#[derive(Debug)]
pub enum CatalogError {
    /// The locale file could not be read.
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The locale file is empty.
    Empty {
        /// File that was empty.
        path: PathBuf,
    },
    /// The YAML content could not be parsed.
    Parse {
        /// Where the YAML came from (file path or "built-in <code>").
        origin: String,
        /// Parser message.
        message: String,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read locale file {}: {source}", path.display())
            }
            Self::Empty { path } => write!(f, "Locale file is empty: {}", path.display()),
            Self::Parse { origin, message } => write!(
                f,
                "Failed to parse locale {origin}: {message}. Please check YAML syntax."
            ),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Empty { .. } | Self::Parse { .. } => None,
        }
    }
}

/// What: Load `<locales_dir>/<code>.yml` for a language.
///
/// Inputs:
/// - `lang`: Language whose file to load
/// - `locales_dir`: Directory holding locale files
///
/// Output:
/// - `Ok(Some(map))` with flattened translations
/// - `Ok(None)` when the file does not exist
///
/// # Errors
/// - `CatalogError::Io` when the file exists but cannot be read
/// - `CatalogError::Empty` when the file has no content
/// - `CatalogError::Parse` when the YAML is invalid
pub fn load_locale_file(
    lang: Language,
    locales_dir: &Path,
) -> Result<Option<TranslationMap>, CatalogError> {
    let file_path = locales_dir.join(format!("{}.yml", lang.code()));

    if !file_path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(&file_path).map_err(|source| CatalogError::Io {
        path: file_path.clone(),
        source,
    })?;

    if contents.trim().is_empty() {
        return Err(CatalogError::Empty { path: file_path });
    }

    parse_locale_yaml(&contents)
        .map(Some)
        .map_err(|message| CatalogError::Parse {
            origin: file_path.display().to_string(),
            message,
        })
}

/// What: Turn one locale document into a flat key map.
///
/// Inputs:
/// - `source`: Locale YAML text
///
/// Output:
/// - Dotted keys mapped to templates, or the parser message on failure
///
/// Details:
/// - The document's single top-level entry names the language and is not
///   part of the keys
/// - Strings, numbers and booleans become templates; lists and nulls are
///   skipped with a debug log
pub(crate) fn parse_locale_yaml(source: &str) -> Result<TranslationMap, String> {
    let doc: Value = serde_norway::from_str(source).map_err(|e| e.to_string())?;
    let mut out = TranslationMap::new();
    let Some(root) = doc.as_mapping() else {
        return Ok(out);
    };

    // Depth-first walk; each pending entry carries its dotted prefix.
    let mut pending: Vec<(String, &Value)> = root.iter().map(|(_, v)| (String::new(), v)).collect();
    while let Some((prefix, node)) = pending.pop() {
        match node {
            Value::Mapping(children) => {
                for (name, child) in children {
                    let Some(name) = name.as_str() else { continue };
                    pending.push((join_key(&prefix, name), child));
                }
            }
            Value::String(text) => {
                out.insert(prefix, text.clone());
            }
            Value::Number(n) => {
                out.insert(prefix, n.to_string());
            }
            Value::Bool(b) => {
                out.insert(prefix, b.to_string());
            }
            _ => tracing::debug!(key = %prefix, "Locale entry is not text; skipped"),
        }
    }
    Ok(out)
}

fn join_key(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_owned()
    } else {
        format!("{prefix}.{name}")
    }
}
