//! `kheti-guru coverage`.

use kheti_guru::config::Settings;
use kheti_guru::i18n::{Catalog, Language};

use super::CliError;

/// What: Report translation coverage against English.
///
/// Inputs:
/// - `settings`: Loaded settings (overlay directory).
/// - `code`: Single language to report in detail, or `None` for a summary.
///
/// Output:
/// - Summary: one `code translated/total` line per language.
/// - Detail: the summary line, then each missing key.
///
/// Details:
/// - Keys a language has but English lacks are logged at warn.
///
/// # Errors
/// - `CliError::Language` for an unknown code.
/// - `CliError::Catalog` if the catalog cannot be built.
pub fn handle_coverage(settings: &Settings, code: Option<&str>) -> Result<(), CliError> {
    let catalog = settings.catalog()?;
    match code {
        Some(code) => {
            let lang: Language = code.parse()?;
            println!("{}", summary_line(&catalog, lang));
            for key in catalog.missing_keys(lang) {
                println!("  {key}");
            }
        }
        None => {
            for lang in Language::ALL {
                println!("{}", summary_line(&catalog, lang));
            }
        }
    }
    Ok(())
}

fn summary_line(catalog: &Catalog, lang: Language) -> String {
    let orphans = catalog.orphan_keys(lang);
    if !orphans.is_empty() {
        tracing::warn!(language = %lang, keys = ?orphans, "Keys missing from English");
    }
    let total = catalog.map(Language::En).len();
    let translated = total - catalog.missing_keys(lang).len();
    format!("{} {translated}/{total}", lang.code())
}
