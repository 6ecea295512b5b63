//! Resolution against the built-in catalog.

use std::sync::Arc;

use kheti_guru::i18n::{Catalog, Language, Localizer, Params};

fn catalog() -> Arc<Catalog> {
    Arc::new(Catalog::embedded().expect("built-in locales should parse"))
}

/// What: Welcome template interpolates the user name in English and Hindi
///
/// - Input: `dashboard.welcome` with `name = Asha`
/// - Output: "Hello, Asha!" then "नमस्कार, Asha!"
#[test]
fn welcome_is_interpolated_in_active_language() {
    let mut loc = Localizer::in_memory(catalog());
    assert_eq!(
        loc.t_with("dashboard.welcome", &[("name", "Asha")]),
        "Hello, Asha!"
    );

    loc.set_active_language(Language::Hi);
    assert_eq!(
        loc.t_with("dashboard.welcome", &[("name", "Asha")]),
        "नमस्कार, Asha!"
    );
}

/// What: Every English key resolves to a non-empty string in every language
///
/// - Input: All keys of the `en` map, all languages
/// - Output: Language-specific text when present, English text otherwise
#[test]
fn every_english_key_resolves_in_every_language() {
    let catalog = catalog();
    let mut loc = Localizer::in_memory(Arc::clone(&catalog));
    for lang in Language::ALL {
        loc.set_active_language(lang);
        for (key, en_text) in catalog.map(Language::En) {
            let resolved = loc.t(key);
            let expected = catalog.lookup(lang, key).unwrap_or(en_text);
            assert_eq!(resolved, expected, "{key} in {}", lang.code());
        }
    }
}

/// What: Keys unknown to every language come back unchanged
#[test]
fn unknown_key_is_returned_verbatim() {
    let mut loc = Localizer::in_memory(catalog());
    for lang in Language::ALL {
        loc.set_active_language(lang);
        assert_eq!(loc.t("nonexistent.key.path"), "nonexistent.key.path");
        assert_eq!(
            loc.t_with("greeting.{name}", &[("name", "Asha")]),
            "greeting.{name}"
        );
    }
}

/// What: No translation introduces a key the English reference lacks
#[test]
fn non_english_locales_are_subsets_of_english() {
    let catalog = catalog();
    for lang in Language::ALL {
        assert!(
            catalog.orphan_keys(lang).is_empty(),
            "{} has keys missing from en: {:?}",
            lang.code(),
            catalog.orphan_keys(lang)
        );
    }
}

/// What: Resolving twice without a language change yields the same text
#[test]
fn resolve_is_idempotent() {
    let mut loc = Localizer::in_memory(catalog());
    loc.set_active_language(Language::Mr);
    let params: Params = [("name".to_string(), "Ravi".to_string())]
        .into_iter()
        .collect();
    let first = loc.resolve("dashboard.welcome", Some(&params));
    let second = loc.resolve("dashboard.welcome", Some(&params));
    assert_eq!(first, second);
    assert_eq!(first, "नमस्कार, Ravi!");
}

/// What: Missing parameters leave placeholders intact
#[test]
fn missing_param_keeps_placeholder() {
    let loc = Localizer::in_memory(catalog());
    assert_eq!(loc.t("dashboard.welcome"), "Hello, {name}!");
    assert_eq!(
        loc.t_with("dashboard.welcome", &[("other", "x")]),
        "Hello, {name}!"
    );
}

/// What: An overlay directory replaces and adds keys for one language
#[test]
fn overlay_directory_extends_catalog() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp directory for test");
    std::fs::write(
        temp_dir.path().join("ta.yml"),
        "ta:\n  nav:\n    home: \"முகப்பு\"\n",
    )
    .expect("Failed to write overlay");

    let mut catalog = Catalog::embedded().expect("built-in locales should parse");
    assert_eq!(catalog.overlay_dir(temp_dir.path()), 1);

    let mut loc = Localizer::in_memory(Arc::new(catalog));
    loc.set_active_language(Language::Ta);
    assert_eq!(loc.t("nav.home"), "முகப்பு");
}
