//! Active-language state and key resolution.

use std::fmt;
use std::sync::Arc;

use crate::i18n::catalog::Catalog;
use crate::i18n::language::Language;
use crate::i18n::translations::{Params, interpolate, lookup_with_fallback, params_from_pairs};
use crate::storage::{KeyValueStore, MemoryStore};

/// Storage key under which the selected language code is persisted.
pub const LANGUAGE_STORAGE_KEY: &str = "khetiGuru-language";

/// Resolves translation keys in the currently active language.
///
/// Owns the single active-language value and persists every change to the
/// attached store on a best-effort basis. Pass it (or a reference to it) to
/// whatever renders text; there is no process-wide global.
pub struct Localizer {
    catalog: Arc<Catalog>,
    active: Language,
    store: Box<dyn KeyValueStore>,
}

impl fmt::Debug for Localizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Localizer")
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}

impl Localizer {
    /// What: Create a localizer with English active.
    ///
    /// Inputs:
    /// - `catalog`: Shared immutable catalog
    /// - `store`: Durable storage for the language preference
    ///
    /// Details:
    /// - Does not read the store; call `load_persisted_language` at startup
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, store: Box<dyn KeyValueStore>) -> Self {
        Self {
            catalog,
            active: Language::En,
            store,
        }
    }

    /// Localizer with an in-memory store; preferences do not survive the process.
    #[must_use]
    pub fn in_memory(catalog: Arc<Catalog>) -> Self {
        Self::new(catalog, Box::new(MemoryStore::new()))
    }

    /// Currently active language.
    #[must_use]
    pub const fn active_language(&self) -> Language {
        self.active
    }

    /// Shared catalog backing this localizer.
    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// What: Resolve a key to display text.
    ///
    /// Inputs:
    /// - `key`: Dot-notation key (e.g., "dashboard.welcome")
    /// - `params`: Optional `{name}` substitutions
    ///
    /// Output:
    /// - Active-language template, else English, with supplied placeholders
    ///   substituted
    /// - `key` itself, untouched, when no catalog has it
    ///
    /// Details:
    /// - Never fails and has no side effects
    #[must_use]
    pub fn resolve(&self, key: &str, params: Option<&Params>) -> String {
        let Some(template) = lookup_with_fallback(
            key,
            self.catalog.map(self.active),
            self.catalog.map(Language::En),
        ) else {
            return key.to_string();
        };
        match params {
            Some(p) => interpolate(template, p),
            None => template.to_string(),
        }
    }

    /// Resolve a key without parameters.
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        self.resolve(key, None)
    }

    /// What: Resolve a key with borrowed `(name, value)` parameters.
    ///
    /// Example: `loc.t_with("dashboard.welcome", &[("name", "Asha")])`
    #[must_use]
    pub fn t_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        self.resolve(key, Some(&params_from_pairs(params)))
    }

    /// What: Switch the active language and persist the choice.
    ///
    /// Inputs:
    /// - `lang`: New active language
    ///
    /// Details:
    /// - The in-memory change always happens
    /// - Storage failures are logged and otherwise ignored
    pub fn set_active_language(&mut self, lang: Language) {
        if self.active != lang {
            tracing::info!(from = %self.active, to = %lang, "Active language changed");
        }
        self.active = lang;
        if let Err(e) = self.store.set(LANGUAGE_STORAGE_KEY, lang.code()) {
            tracing::warn!(
                error = %e,
                language = %lang,
                "Could not persist language preference; keeping it for this session only"
            );
        }
    }

    /// What: Switch language by code, ignoring unrecognized codes.
    ///
    /// Inputs:
    /// - `code`: Candidate language code
    ///
    /// Output:
    /// - `true` if the code was recognized and applied, `false` if ignored
    pub fn set_active_language_code(&mut self, code: &str) -> bool {
        match Language::from_code(code) {
            Some(lang) => {
                self.set_active_language(lang);
                true
            }
            None => {
                tracing::debug!(code, "Ignoring unrecognized language code");
                false
            }
        }
    }

    /// What: Restore the persisted language at startup.
    ///
    /// Output:
    /// - The language now active
    ///
    /// Details:
    /// - A stored value equal to a language code becomes active; no trimming
    ///   or case folding is applied
    /// - Absent, unrecognized, or unreadable values make English active
    pub fn load_persisted_language(&mut self) -> Language {
        let stored = match self.store.get(LANGUAGE_STORAGE_KEY) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read language preference; using default");
                None
            }
        };

        self.active = match stored.as_deref().and_then(Language::from_stored_code) {
            Some(lang) => {
                tracing::debug!(language = %lang, "Restored persisted language");
                lang
            }
            None => {
                if let Some(raw) = stored {
                    tracing::debug!(value = %raw, "Ignoring unrecognized persisted language");
                }
                Language::En
            }
        };
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::translations::TranslationMap;
    use crate::storage::StoreError;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn map(pairs: &[(&str, &str)]) -> TranslationMap {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn small_catalog() -> Arc<Catalog> {
        Arc::new(Catalog::from_maps([
            (
                Language::En,
                map(&[
                    ("dashboard.welcome", "Hello, {name}!"),
                    ("nav.home", "Home"),
                    ("nav.weather", "Weather"),
                ]),
            ),
            (
                Language::Hi,
                map(&[("dashboard.welcome", "नमस्कार, {name}!"), ("nav.home", "होम")]),
            ),
        ]))
    }

    /// Store whose contents stay observable after being boxed into a localizer.
    #[derive(Clone, Default)]
    struct SharedStore(Rc<RefCell<MemoryStore>>);

    impl KeyValueStore for SharedStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.0.borrow().get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
            self.0.borrow_mut().set(key, value)
        }
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable("access denied".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_resolve_fallback_chain() {
        let mut loc = Localizer::in_memory(small_catalog());
        loc.set_active_language(Language::Hi);

        assert_eq!(loc.t("nav.home"), "होम");
        assert_eq!(loc.t("nav.weather"), "Weather");
        assert_eq!(loc.t("nav.nowhere"), "nav.nowhere");
    }

    #[test]
    fn test_resolve_with_params() {
        let mut loc = Localizer::in_memory(small_catalog());
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

    #[test]
    fn test_missing_key_is_returned_without_interpolation() {
        let mut loc = Localizer::in_memory(small_catalog());
        assert_eq!(
            loc.t_with("greeting.{name}", &[("name", "Asha")]),
            "greeting.{name}"
        );
        loc.set_active_language(Language::Hi);
        assert_eq!(loc.t_with("x.{name}", &[("name", "y")]), "x.{name}");
    }

    #[test]
    fn test_set_active_language_persists() {
        let shared = SharedStore::default();
        let mut loc = Localizer::new(small_catalog(), Box::new(shared.clone()));
        loc.set_active_language(Language::Ta);

        assert_eq!(
            shared.get(LANGUAGE_STORAGE_KEY).expect("memory get never fails"),
            Some("ta".to_string())
        );
    }

    #[test]
    fn test_unrecognized_code_is_ignored() {
        let shared = SharedStore::default();
        let mut loc = Localizer::new(small_catalog(), Box::new(shared.clone()));
        loc.set_active_language(Language::Hi);

        assert!(!loc.set_active_language_code("xx"));
        assert_eq!(loc.active_language(), Language::Hi);
        assert_eq!(
            shared.get(LANGUAGE_STORAGE_KEY).expect("memory get never fails"),
            Some("hi".to_string())
        );

        assert!(loc.set_active_language_code("MR"));
        assert_eq!(loc.active_language(), Language::Mr);
    }

    #[test]
    fn test_load_persisted_language() {
        let store: MemoryStore = [(LANGUAGE_STORAGE_KEY, "bn")].into_iter().collect();
        let mut loc = Localizer::new(small_catalog(), Box::new(store));
        assert_eq!(loc.load_persisted_language(), Language::Bn);
        assert_eq!(loc.active_language(), Language::Bn);
    }

    #[test]
    fn test_load_persisted_language_rejects_garbage() {
        let store: MemoryStore = [(LANGUAGE_STORAGE_KEY, "klingon")].into_iter().collect();
        let mut loc = Localizer::new(small_catalog(), Box::new(store));
        loc.active = Language::Hi;
        assert_eq!(loc.load_persisted_language(), Language::En);
    }

    #[test]
    fn test_load_persisted_language_requires_exact_code() {
        for raw in [" HI ", "Hi", "hi\n"] {
            let store: MemoryStore = [(LANGUAGE_STORAGE_KEY, raw)].into_iter().collect();
            let mut loc = Localizer::new(small_catalog(), Box::new(store));
            assert_eq!(loc.load_persisted_language(), Language::En, "stored {raw:?}");
        }
    }

    #[test]
    fn test_load_persisted_language_absent_defaults_to_english() {
        let mut loc = Localizer::in_memory(small_catalog());
        assert_eq!(loc.load_persisted_language(), Language::En);
    }

    #[test]
    fn test_broken_store_degrades_to_memory_only() {
        let mut loc = Localizer::new(small_catalog(), Box::new(BrokenStore));
        assert_eq!(loc.load_persisted_language(), Language::En);

        loc.set_active_language(Language::Hi);
        assert_eq!(loc.active_language(), Language::Hi);
        assert_eq!(loc.t("nav.home"), "होम");
    }

    #[test]
    fn test_debug_shows_active_language() {
        let loc = Localizer::in_memory(small_catalog());
        assert!(format!("{loc:?}").contains("En"));
    }
}
