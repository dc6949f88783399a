//! Settings persistence
//!
//! Saves and loads [`GameSettings`] to/from a JSON file.
//!
//! # File Location
//!
//! `settings.json` in the platform configuration directory (via
//! [`ProjectDirs`]), unless a path is given on the command line.
//!
//! # Error Handling
//!
//! Loading never fails: a missing or malformed file falls back to defaults
//! and is logged. Saving reports its error to the caller.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{ShellError, ShellResult};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// User preferences for the terminal shell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Draw the board from Black's side
    pub flipped: bool,

    /// Mark the held piece's legal destinations
    pub show_hints: bool,

    /// Whether to highlight the last move
    pub highlight_last_move: bool,

    /// `tracing` filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            flipped: false,
            show_hints: true,
            highlight_last_move: true,
            log_filter: "warn".to_string(),
        }
    }
}

/// Path to `settings.json` in the user's configuration directory
pub fn default_settings_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "trilltino", "HotseatChess")
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILENAME))
}

/// Load settings from `path`, falling back to defaults
pub fn load_settings(path: &Path) -> GameSettings {
    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return GameSettings::default();
    }

    match fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str::<GameSettings>(&contents) {
            Ok(settings) => {
                info!("[SETTINGS] Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!(
                    "[SETTINGS] Failed to parse settings file at {:?}: {}. Using defaults.",
                    path, e
                );
                GameSettings::default()
            }
        },
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to read settings file at {:?}: {}. Using defaults.",
                path, e
            );
            GameSettings::default()
        }
    }
}

/// Write `settings` to `path`, creating the directory if needed
pub fn save_settings(settings: &GameSettings, path: &Path) -> ShellResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}

/// Resolve the settings path: an explicit one wins over the platform default
pub fn resolve_settings_path(explicit: Option<&Path>) -> ShellResult<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => default_settings_path().ok_or(ShellError::NoConfigDir),
    }
}
