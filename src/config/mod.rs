//! Configuration: file locations and `settings.conf`.
//!
//! Settings live in `$XDG_CONFIG_HOME/kheti-guru/settings.conf` (or
//! `$HOME/.config/kheti-guru/settings.conf`) as `key = value` lines:
//!
//! ```text
//! # Where the language preference is stored
//! store_path = /home/asha/.config/kheti-guru/preferences.json
//! persist_language = true
//! # Extra or corrected translations, one <code>.yml per language
//! locales_dir = /home/asha/.config/kheti-guru/locales
//! # chat | voice
//! assistant_profile = chat
//! matcher_file = /home/asha/.config/kheti-guru/intents.yml
//! expert_phone = +911800123456
//! expert_whatsapp = 911800123456
//! ```

mod parsing;
mod paths;
mod settings;

pub use parsing::{parse_bool, parse_key_value, skip_comment_or_empty};
pub use paths::{config_dir, config_dir_from, logs_dir, preferences_path, settings_path};
pub use settings::Settings;
