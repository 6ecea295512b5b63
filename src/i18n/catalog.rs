//! The locale catalog: every language's translation map.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use crate::i18n::language::Language;
use crate::i18n::loader::{CatalogError, load_locale_file, parse_locale_yaml};
use crate::i18n::translations::TranslationMap;

/// Locale files compiled into the binary, one per supported language.
const EMBEDDED_LOCALES: [(Language, &str); 8] = [
    (Language::En, include_str!("../../config/locales/en.yml")),
    (Language::Hi, include_str!("../../config/locales/hi.yml")),
    (Language::Mr, include_str!("../../config/locales/mr.yml")),
    (Language::Pa, include_str!("../../config/locales/pa.yml")),
    (Language::Ta, include_str!("../../config/locales/ta.yml")),
    (Language::Te, include_str!("../../config/locales/te.yml")),
    (Language::Gu, include_str!("../../config/locales/gu.yml")),
    (Language::Bn, include_str!("../../config/locales/bn.yml")),
];

/// Per-language translation maps. English is the complete reference locale.
///
/// Built once at startup and then shared read-only.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locales: HashMap<Language, TranslationMap>,
    /// Returned for languages with no entries at all.
    empty: TranslationMap,
}

impl Catalog {
    /// What: Build the catalog from the locale files embedded at compile time.
    ///
    /// # Errors
    /// - `CatalogError::Parse` if an embedded locale is malformed
    pub fn embedded() -> Result<Self, CatalogError> {
        let mut catalog = Self::default();
        for (lang, source) in EMBEDDED_LOCALES {
            let map = parse_locale_yaml(source).map_err(|message| CatalogError::Parse {
                origin: format!("built-in {}", lang.code()),
                message,
            })?;
            tracing::debug!(
                locale = lang.code(),
                keys = map.len(),
                "Loaded built-in locale"
            );
            catalog.locales.insert(lang, map);
        }
        Ok(catalog)
    }

    /// What: Build a catalog from explicit maps (tests and custom front-ends).
    #[must_use]
    pub fn from_maps(maps: impl IntoIterator<Item = (Language, TranslationMap)>) -> Self {
        Self {
            locales: maps.into_iter().collect(),
            empty: TranslationMap::new(),
        }
    }

    /// What: Overlay locale files from a directory on top of this catalog.
    ///
    /// Inputs:
    /// - `locales_dir`: Directory containing `<code>.yml` files
    ///
    /// Output:
    /// - Number of locale files applied
    ///
    /// Details:
    /// - Keys in an overlay replace or extend that language's map
    /// - Missing files are skipped silently; broken files are logged and skipped
    pub fn overlay_dir(&mut self, locales_dir: &Path) -> usize {
        let mut applied = 0;
        for lang in Language::ALL {
            match load_locale_file(lang, locales_dir) {
                Ok(Some(map)) => {
                    tracing::debug!(
                        locale = lang.code(),
                        keys = map.len(),
                        dir = %locales_dir.display(),
                        "Applying locale overlay"
                    );
                    self.locales.entry(lang).or_default().extend(map);
                    applied += 1;
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(locale = lang.code(), error = %e, "Skipping locale overlay");
                }
            }
        }
        applied
    }

    /// Translation map for a language; empty if the language has no entries.
    #[must_use]
    pub fn map(&self, lang: Language) -> &TranslationMap {
        self.locales.get(&lang).unwrap_or(&self.empty)
    }

    /// Template for `key` in exactly `lang`, without fallback.
    #[must_use]
    pub fn lookup(&self, lang: Language, key: &str) -> Option<&str> {
        self.map(lang).get(key).map(String::as_str)
    }

    /// What: List reference keys a language does not translate.
    ///
    /// Output:
    /// - Sorted keys present in English but absent from `lang`
    #[must_use]
    pub fn missing_keys(&self, lang: Language) -> Vec<&str> {
        let target = self.map(lang);
        let missing: BTreeSet<&str> = self
            .map(Language::En)
            .keys()
            .filter(|k| !target.contains_key(k.as_str()))
            .map(String::as_str)
            .collect();
        missing.into_iter().collect()
    }

    /// What: List keys a language defines that English lacks.
    ///
    /// Details:
    /// - Such keys break the "English is complete" invariant
    #[must_use]
    pub fn orphan_keys(&self, lang: Language) -> Vec<&str> {
        let reference = self.map(Language::En);
        let orphans: BTreeSet<&str> = self
            .map(lang)
            .keys()
            .filter(|k| !reference.contains_key(k.as_str()))
            .map(String::as_str)
            .collect();
        orphans.into_iter().collect()
    }
}
