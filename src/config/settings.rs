//! `settings.conf` model and the wiring it drives.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::assistant::{Assistant, ExpertContact, MatcherProfile, TopicMatcher};
use crate::config::parsing::{parse_bool, parse_key_value, skip_comment_or_empty};
use crate::config::paths::preferences_path;
use crate::i18n::{Catalog, CatalogError, Localizer};
use crate::storage::{JsonFileStore, KeyValueStore, MemoryStore};

/// User settings. Every field has a working default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Preference store file; `None` means `<config_dir>/preferences.json`.
    pub store_path: Option<PathBuf>,
    /// Whether the language choice is written to durable storage.
    pub persist_language: bool,
    /// Directory of `<code>.yml` files overlaid on the built-in catalog.
    pub locales_dir: Option<PathBuf>,
    /// YAML matcher definition replacing the built-in rules.
    pub matcher_file: Option<PathBuf>,
    /// Built-in matcher used when no `matcher_file` is given.
    pub assistant_profile: MatcherProfile,
    /// Helpline details for the escalation offer.
    pub expert: ExpertContact,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_path: None,
            persist_language: true,
            locales_dir: None,
            matcher_file: None,
            assistant_profile: MatcherProfile::Chat,
            expert: ExpertContact::default(),
        }
    }
}

impl Settings {
    /// What: Parse settings from `settings.conf` content.
    ///
    /// Inputs:
    /// - `content`: File content
    ///
    /// Output:
    /// - Settings with recognized keys applied over defaults
    ///
    /// Details:
    /// - Unknown keys are logged at debug and ignored
    /// - Invalid values are logged at warn and leave the default in place
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut settings = Self::default();
        for line in content.lines() {
            if skip_comment_or_empty(line) {
                continue;
            }
            let Some((key, val)) = parse_key_value(line) else {
                continue;
            };
            match key.as_str() {
                "store_path" | "preferences_path" => {
                    settings.store_path = non_empty_path(&val);
                }
                "persist_language" => match parse_bool(&val) {
                    Some(b) => settings.persist_language = b,
                    None => tracing::warn!(value = %val, "Invalid persist_language; keeping default"),
                },
                "locales_dir" => settings.locales_dir = non_empty_path(&val),
                "matcher_file" | "intents_file" => settings.matcher_file = non_empty_path(&val),
                "assistant_profile" | "profile" => match val.parse::<MatcherProfile>() {
                    Ok(p) => settings.assistant_profile = p,
                    Err(e) => tracing::warn!(error = %e, "Invalid assistant_profile; keeping default"),
                },
                "expert_phone" => {
                    if !val.is_empty() {
                        settings.expert.phone = val;
                    }
                }
                "expert_whatsapp" => {
                    if val.chars().any(|c| c.is_ascii_digit()) {
                        settings.expert.whatsapp = val;
                    } else {
                        tracing::warn!(value = %val, "Invalid expert_whatsapp; keeping default");
                    }
                }
                other => tracing::debug!(key = other, "Ignoring unknown setting"),
            }
        }
        settings
    }

    /// What: Load settings from a file.
    ///
    /// Output:
    /// - Parsed settings, or defaults when the file is missing or unreadable
    #[must_use]
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => {
                tracing::debug!(path = %path.display(), "Loaded settings");
                Self::parse(&content)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No settings file; using defaults");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Could not read settings; using defaults");
                Self::default()
            }
        }
    }

    /// Effective preference store location.
    #[must_use]
    pub fn effective_store_path(&self, config_dir: &Path) -> PathBuf {
        self.store_path
            .clone()
            .unwrap_or_else(|| preferences_path(config_dir))
    }

    /// Storage backend selected by these settings.
    #[must_use]
    pub fn store(&self, config_dir: &Path) -> Box<dyn KeyValueStore> {
        if self.persist_language {
            let store = JsonFileStore::new(self.effective_store_path(config_dir));
            tracing::debug!(path = %store.path().display(), "Using preference file");
            Box::new(store)
        } else {
            Box::new(MemoryStore::new())
        }
    }

    /// What: Build the catalog, applying the overlay directory if configured.
    ///
    /// # Errors
    /// - `CatalogError` if a built-in locale fails to parse
    pub fn catalog(&self) -> Result<Catalog, CatalogError> {
        let mut catalog = Catalog::embedded()?;
        if let Some(dir) = &self.locales_dir {
            let applied = catalog.overlay_dir(dir);
            tracing::info!(dir = %dir.display(), applied, "Locale overlays applied");
        }
        Ok(catalog)
    }

    /// What: Build a localizer with the persisted language restored.
    ///
    /// # Errors
    /// - `CatalogError` if the catalog cannot be built
    pub fn localizer(&self, config_dir: &Path) -> Result<Localizer, CatalogError> {
        let catalog = Arc::new(self.catalog()?);
        let mut loc = Localizer::new(catalog, self.store(config_dir));
        loc.load_persisted_language();
        Ok(loc)
    }

    /// What: Build the keyword matcher.
    ///
    /// Inputs:
    /// - `profile_override`: Profile chosen on the command line, if any
    ///
    /// Details:
    /// - A broken `matcher_file` is logged and the built-in profile is used
    #[must_use]
    pub fn matcher(&self, profile_override: Option<MatcherProfile>) -> TopicMatcher {
        if profile_override.is_none()
            && let Some(path) = &self.matcher_file
        {
            let loaded = fs::read_to_string(path)
                .map_err(|e| e.to_string())
                .and_then(|yaml| TopicMatcher::from_yaml(&yaml).map_err(|e| e.to_string()));
            match loaded {
                Ok(m) => return m,
                Err(e) => tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Could not load matcher definition; using built-in profile"
                ),
            }
        }
        TopicMatcher::for_profile(profile_override.unwrap_or(self.assistant_profile))
    }

    /// Assistant wired with the configured matcher and expert contact.
    #[must_use]
    pub fn assistant(&self, profile_override: Option<MatcherProfile>) -> Assistant {
        Assistant::new(self.matcher(profile_override), self.expert.clone())
    }
}

fn non_empty_path(val: &str) -> Option<PathBuf> {
    (!val.is_empty()).then(|| PathBuf::from(val))
}
