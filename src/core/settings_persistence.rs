//! Settings persistence
//!
//! Saves and loads [`CoachSettings`] to/from a JSON file so preferences survive
//! between runs.
//!
//! # File Location
//!
//! Settings are stored as `settings.json` in the platform configuration directory,
//! e.g. `~/.config/chesscoach/settings.json` on Linux. If no such directory can be
//! determined, `settings.json` in the working directory is used instead.
//!
//! # Error Handling
//!
//! [`load_settings`] never fails: a missing, unreadable or unparseable file is
//! logged and replaced by defaults. [`save_settings`] reports failures to the caller,
//! who decides whether they matter. The path-based helpers propagate every error.

use super::error::CoreResult;
use super::settings::CoachSettings;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Resolve the settings file path
///
/// Falls back to a local `settings.json` if the system config dir cannot be found.
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "chesscoach", "ChessCoach") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Load settings from the default location, falling back to defaults
pub fn load_settings() -> CoachSettings {
    let path = settings_path();

    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return CoachSettings::default();
    }

    match load_from_path(&path) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, e
            );
            CoachSettings::default()
        }
    }
}

/// Save settings to the default location, returning the path written
pub fn save_settings(settings: &CoachSettings) -> CoreResult<PathBuf> {
    let path = settings_path();
    save_to_path(settings, &path)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(path)
}

/// Read settings from `path`
pub fn load_from_path(path: &Path) -> CoreResult<CoachSettings> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Write settings to `path` as pretty JSON, creating parent directories
pub fn save_to_path(settings: &CoachSettings, path: &Path) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}
