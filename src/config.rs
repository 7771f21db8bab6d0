//! On-disk application configuration.
//!
//! Separate from the user's settings in NSUserDefaults: this file carries
//! administrative policy read once at startup, at
//! `~/Library/Application Support/Hotzone/config.json`. A missing or
//! malformed file falls back to the defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// When false the "Record Shortcut" menu entry is hidden and the
    /// shipped default shortcut stays fixed.
    pub allow_custom_shortcut: bool,
}

impl Default for AppConfig {
    fn default() -> AppConfig {
        AppConfig {
            allow_custom_shortcut: true,
        }
    }
}

/// Location of the config file, if a home directory is known.
pub fn config_path() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    Some(PathBuf::from(home).join("Library/Application Support/Hotzone/config.json"))
}

/// Load the config from its default location.
pub fn load() -> AppConfig {
    match config_path() {
        Some(path) => load_from(&path),
        None => AppConfig::default(),
    }
}

/// Load from an explicit path. Unreadable or malformed files yield the
/// defaults so a broken config can never keep the app from starting.
pub fn load_from(path: &Path) -> AppConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
            log::warn!("ignoring malformed config at {}: {err}", path.display());
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}
