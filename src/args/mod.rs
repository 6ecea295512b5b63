//! Command-line argument parsing and handling.

pub mod assistant;
pub mod coverage;
pub mod definition;
pub mod language;
pub mod translate;
pub mod utils;

use std::fmt;
use std::path::Path;

use kheti_guru::config::Settings;
use kheti_guru::i18n::{CatalogError, UnknownLanguage};

// Re-export commonly used items
pub use definition::{Args, Command, LanguageAction};
pub use utils::determine_log_level;

/// Failure of a CLI command.
#[derive(Debug)]
pub enum CliError {
    /// The locale catalog could not be built.
    Catalog(CatalogError),
    /// A language code on the command line is not supported.
    Language(UnknownLanguage),
    /// A `--param` value is not `name=value`.
    InvalidParam(String),
    /// Structured output could not be produced.
    Output(serde_json::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Catalog(e) => write!(f, "failed to load translations: {e}"),
            Self::Language(e) => write!(f, "{e}"),
            Self::InvalidParam(p) => write!(f, "invalid parameter '{p}' (expected name=value)"),
            Self::Output(e) => write!(f, "failed to write output: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Catalog(e) => Some(e),
            Self::Language(e) => Some(e),
            Self::Output(e) => Some(e),
            Self::InvalidParam(_) => None,
        }
    }
}

impl From<CatalogError> for CliError {
    fn from(e: CatalogError) -> Self {
        Self::Catalog(e)
    }
}

impl From<UnknownLanguage> for CliError {
    fn from(e: UnknownLanguage) -> Self {
        Self::Language(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Output(e)
    }
}

/// What: Run the parsed command.
///
/// Inputs:
/// - `command`: Subcommand and its arguments.
/// - `settings`: Loaded settings.
/// - `config_dir`: Directory holding the default preference store.
///
/// Output:
/// - `Ok(())` on success, `CliError` otherwise.
///
/// Details:
/// - Output goes to stdout; diagnostics go through `tracing`.
pub fn run(command: &Command, settings: &Settings, config_dir: &Path) -> Result<(), CliError> {
    match command {
        Command::Translate { key, params } => {
            translate::handle_translate(settings, config_dir, key, params)
        }
        Command::Language { action } => language::handle_language(settings, config_dir, action),
        Command::Classify { text, profile } => {
            assistant::handle_classify(settings, text, *profile);
            Ok(())
        }
        Command::Ask {
            text,
            profile,
            json,
        } => assistant::handle_ask(settings, config_dir, text, *profile, *json),
        Command::Coverage { code } => coverage::handle_coverage(settings, code.as_deref()),
    }
}
