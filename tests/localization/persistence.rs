//! Persisted language across sessions.

use std::sync::Arc;

use kheti_guru::i18n::{Catalog, LANGUAGE_STORAGE_KEY, Language, Localizer};
use kheti_guru::storage::{JsonFileStore, KeyValueStore};
use tempfile::TempDir;

fn session(store_path: &std::path::Path) -> Localizer {
    let catalog = Arc::new(Catalog::embedded().expect("built-in locales should parse"));
    let mut loc = Localizer::new(catalog, Box::new(JsonFileStore::new(store_path)));
    loc.load_persisted_language();
    loc
}

/// What: A language chosen in one session is active in the next
///
/// - Input: `set_active_language(Hi)`, then a fresh localizer on the same file
/// - Output: Hindi is restored and the file holds the fixed key
#[test]
fn language_survives_restart() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory for test");
    let path = temp_dir.path().join("preferences.json");

    let mut first = session(&path);
    assert_eq!(first.active_language(), Language::En);
    first.set_active_language(Language::Hi);
    drop(first);

    let second = session(&path);
    assert_eq!(second.active_language(), Language::Hi);

    let stored = JsonFileStore::new(&path)
        .get(LANGUAGE_STORAGE_KEY)
        .expect("store should be readable");
    assert_eq!(stored.as_deref(), Some("hi"));
}

/// What: Unrecognized codes change nothing in memory or on disk
#[test]
fn unknown_code_is_ignored() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory for test");
    let path = temp_dir.path().join("preferences.json");

    let mut loc = session(&path);
    loc.set_active_language(Language::Gu);
    assert!(!loc.set_active_language_code("xx"));
    assert_eq!(loc.active_language(), Language::Gu);

    let restarted = session(&path);
    assert_eq!(restarted.active_language(), Language::Gu);
}

/// What: A garbage stored value or a corrupt file starts in English
#[test]
fn bad_persisted_state_defaults_to_english() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory for test");
    let path = temp_dir.path().join("preferences.json");

    std::fs::write(&path, r#"{"khetiGuru-language": "klingon"}"#).expect("write prefs");
    assert_eq!(session(&path).active_language(), Language::En);

    std::fs::write(&path, r#"{"khetiGuru-language": " HI "}"#).expect("write prefs");
    assert_eq!(session(&path).active_language(), Language::En);

    std::fs::write(&path, "{not json").expect("write prefs");
    assert_eq!(session(&path).active_language(), Language::En);
}

/// What: An unwritable store does not block switching languages
#[test]
fn unwritable_store_still_switches_language() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory for test");
    let blocker = temp_dir.path().join("not-a-dir");
    std::fs::write(&blocker, "").expect("create blocker file");

    let mut loc = session(&blocker.join("preferences.json"));
    loc.set_active_language(Language::Bn);
    assert_eq!(loc.active_language(), Language::Bn);
    assert_eq!(loc.t("nonexistent"), "nonexistent");
}
