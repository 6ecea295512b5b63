//! Locations of the config directory and the files under it.

use std::env;
use std::path::{Path, PathBuf};

/// Directory name under the XDG config base.
const APP_DIR: &str = "kheti-guru";

/// What: Compute the config directory from explicit environment values.
///
/// Inputs:
/// - `xdg_config_home`: Value of `XDG_CONFIG_HOME`, if set
/// - `home`: Value of `HOME`, if set
///
/// Output:
/// - `$XDG_CONFIG_HOME/kheti-guru` when that variable is non-empty,
///   else `$HOME/.config/kheti-guru`, else `None`
#[must_use]
pub fn config_dir_from(xdg_config_home: Option<&str>, home: Option<&str>) -> Option<PathBuf> {
    if let Some(xdg) = xdg_config_home
        && !xdg.trim().is_empty()
    {
        return Some(Path::new(xdg).join(APP_DIR));
    }
    home.filter(|h| !h.trim().is_empty())
        .map(|h| Path::new(h).join(".config").join(APP_DIR))
}

/// Config directory for Kheti Guru. Falls back to `./.kheti-guru` without HOME.
#[must_use]
pub fn config_dir() -> PathBuf {
    let xdg = env::var("XDG_CONFIG_HOME").ok();
    let home = env::var("HOME").ok();
    config_dir_from(xdg.as_deref(), home.as_deref())
        .unwrap_or_else(|| PathBuf::from(".").join(format!(".{APP_DIR}")))
}

/// Default settings file: `<config_dir>/settings.conf`.
#[must_use]
pub fn settings_path(config_dir: &Path) -> PathBuf {
    config_dir.join("settings.conf")
}

/// Default preference store: `<config_dir>/preferences.json`.
#[must_use]
pub fn preferences_path(config_dir: &Path) -> PathBuf {
    config_dir.join("preferences.json")
}

/// Logs directory under config: `<config_dir>/logs` (ensured to exist).
#[must_use]
pub fn logs_dir(config_dir: &Path) -> PathBuf {
    let dir = config_dir.join("logs");
    if let Err(e) = std::fs::create_dir_all(&dir) {
        tracing::debug!(error = %e, dir = %dir.display(), "Could not create logs directory");
    }
    dir
}
