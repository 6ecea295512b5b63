//! `kheti-guru language show|set|list`.

use std::path::Path;

use kheti_guru::config::Settings;
use kheti_guru::i18n::Language;

use super::{CliError, LanguageAction};

/// What: Handle the `language` subcommands.
///
/// Inputs:
/// - `settings`: Loaded settings.
/// - `config_dir`: Directory holding the default preference store.
/// - `action`: Show, set or list.
///
/// Output:
/// - Prints to stdout.
///
/// Details:
/// - `set` rejects unknown codes with an error instead of silently ignoring
///   them, so the user learns the code was wrong.
/// - `list` marks the active language with `*`.
///
/// # Errors
/// - `CliError::Language` for an unknown code.
/// - `CliError::Catalog` if the catalog cannot be built.
pub fn handle_language(
    settings: &Settings,
    config_dir: &Path,
    action: &LanguageAction,
) -> Result<(), CliError> {
    let mut loc = settings.localizer(config_dir)?;
    match action {
        LanguageAction::Show => println!("{}", describe(loc.active_language())),
        LanguageAction::Set { code } => {
            let lang: Language = code.parse()?;
            loc.set_active_language(lang);
            println!("{}: {}", loc.t("language.title"), describe(lang));
        }
        LanguageAction::List => {
            let active = loc.active_language();
            for lang in Language::ALL {
                let marker = if lang == active { '*' } else { ' ' };
                println!("{marker} {}", describe(lang));
            }
        }
    }
    Ok(())
}

fn describe(lang: Language) -> String {
    format!(
        "{} {} ({})",
        lang.code(),
        lang.native_name(),
        lang.english_name()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        assert_eq!(describe(Language::Hi), "hi हिंदी (Hindi)");
    }

    #[test]
    fn test_set_persists_and_rejects_unknown() {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp directory for test");
        let settings = Settings::default();

        handle_language(
            &settings,
            temp_dir.path(),
            &LanguageAction::Set {
                code: "MR".to_string(),
            },
        )
        .expect("known code should be accepted");
        let loc = settings
            .localizer(temp_dir.path())
            .expect("catalog should build");
        assert_eq!(loc.active_language(), Language::Mr);

        let err = handle_language(
            &settings,
            temp_dir.path(),
            &LanguageAction::Set {
                code: "xx".to_string(),
            },
        );
        assert!(matches!(err, Err(CliError::Language(_))));
        let loc = settings
            .localizer(temp_dir.path())
            .expect("catalog should build");
        assert_eq!(loc.active_language(), Language::Mr);
    }
}
