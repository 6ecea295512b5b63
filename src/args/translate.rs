//! `kheti-guru translate`.

use std::path::Path;

use kheti_guru::config::Settings;

use super::CliError;
use super::utils::parse_params;

/// What: Resolve a key in the persisted language and print it.
///
/// Inputs:
/// - `settings`: Loaded settings.
/// - `config_dir`: Directory holding the default preference store.
/// - `key`: Dot-namespaced catalog key.
/// - `raw_params`: `name=value` pairs from `--param`.
///
/// Output:
/// - Prints the resolved string; a missing key prints the key itself.
///
/// # Errors
/// - `CliError::InvalidParam` for a malformed pair.
/// - `CliError::Catalog` if the catalog cannot be built.
pub fn handle_translate(
    settings: &Settings,
    config_dir: &Path,
    key: &str,
    raw_params: &[String],
) -> Result<(), CliError> {
    let params = parse_params(raw_params)?;
    let loc = settings.localizer(config_dir)?;
    tracing::info!(key, language = %loc.active_language(), "Translate requested from CLI");
    let text = if params.is_empty() {
        loc.t(key)
    } else {
        loc.resolve(key, Some(&params))
    };
    println!("{text}");
    Ok(())
}
