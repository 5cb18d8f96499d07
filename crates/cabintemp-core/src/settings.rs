//! TOML-backed user preferences.
//!
//! Stores the comfort temperature and the advisory enable flag at
//! `~/.config/cabintemp/settings.toml`:
//!
//! ```toml
//! [settings]
//! enabled = true
//! comfort_temp = 21
//! ```
//!
//! Absence of the file is not an error; a malformed file logs a warning
//! and falls back to defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{SettingsError, ValidationError};

/// Default comfort target, degrees C.
pub const DEFAULT_COMFORT_TEMP: i32 = 21;
/// Accepted comfort-temperature range, degrees C.
pub const COMFORT_TEMP_MIN: i32 = 5;
pub const COMFORT_TEMP_MAX: i32 = 40;

/// User-adjustable preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComfortSettings {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_comfort_temp")]
    pub comfort_temp: i32,
}

fn default_enabled() -> bool {
    true
}

fn default_comfort_temp() -> i32 {
    DEFAULT_COMFORT_TEMP
}

impl Default for ComfortSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            comfort_temp: DEFAULT_COMFORT_TEMP,
        }
    }
}

/// On-disk layout: one top-level `settings` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
struct SettingsFile {
    #[serde(default)]
    settings: ComfortSettings,
}

/// Parse and range-check a comfort temperature typed by the user.
///
/// Invalid input surfaces as a [`ValidationError`]; the caller keeps the
/// prior value.
pub fn parse_comfort_temp(input: &str) -> Result<i32, ValidationError> {
    let value: i32 = input
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidValue {
            field: "comfort_temp".to_string(),
            message: format!("'{input}' is not an integer"),
        })?;
    validate_comfort_temp(value)?;
    Ok(value)
}

/// Range-check a comfort temperature.
pub fn validate_comfort_temp(value: i32) -> Result<(), ValidationError> {
    if (COMFORT_TEMP_MIN..=COMFORT_TEMP_MAX).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field: "comfort_temp".to_string(),
            value,
            min: COMFORT_TEMP_MIN,
            max: COMFORT_TEMP_MAX,
        })
    }
}

/// Returns `~/.config/cabintemp[-dev]/` based on CABINTEMP_ENV.
///
/// Set CABINTEMP_ENV=dev to keep development preferences separate.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, SettingsError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("CABINTEMP_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("cabintemp-dev")
    } else {
        base_dir.join("cabintemp")
    };

    std::fs::create_dir_all(&dir).map_err(|e| SettingsError::DirUnavailable(e.to_string()))?;
    Ok(dir)
}

/// Loads and saves [`ComfortSettings`] at a fixed path.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store at the per-user preferences location.
    pub fn open_default() -> Result<Self, SettingsError> {
        Ok(Self {
            path: data_dir()?.join("settings.toml"),
        })
    }

    /// Store at an explicit path (tests, portable installs).
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, falling back to defaults on a missing or malformed
    /// file. Never fails.
    pub fn load(&self) -> ComfortSettings {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => match toml::from_str::<SettingsFile>(&content) {
                Ok(file) => file.settings,
                Err(e) => {
                    log::warn!(
                        "malformed settings file {}, using defaults: {e}",
                        self.path.display()
                    );
                    ComfortSettings::default()
                }
            },
            Err(_) => ComfortSettings::default(),
        }
    }

    /// Persist settings to disk.
    ///
    /// # Errors
    /// Returns an error if the record cannot be serialized or written.
    pub fn save(&self, settings: ComfortSettings) -> Result<(), SettingsError> {
        let content = toml::to_string_pretty(&SettingsFile { settings })
            .map_err(|e| SettingsError::SerializeFailed(e.to_string()))?;
        std::fs::write(&self.path, content).map_err(|e| SettingsError::SaveFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = ComfortSettings::default();
        assert!(settings.enabled);
        assert_eq!(settings.comfort_temp, 21);
    }

    #[test]
    fn save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::at_path(dir.path().join("settings.toml"));
        let settings = ComfortSettings {
            enabled: false,
            comfort_temp: 24,
        };
        store.save(settings).unwrap();
        assert_eq!(store.load(), settings);
        // saving what we loaded changes nothing
        store.save(store.load()).unwrap();
        assert_eq!(store.load(), settings);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::at_path(dir.path().join("nope.toml"));
        assert_eq!(store.load(), ComfortSettings::default());
    }

    #[test]
    fn malformed_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "settings = \"not a table\"").unwrap();
        let store = SettingsStore::at_path(path);
        assert_eq!(store.load(), ComfortSettings::default());
    }

    #[test]
    fn file_layout_uses_settings_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let store = SettingsStore::at_path(&path);
        store.save(ComfortSettings::default()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("[settings]"));
        assert!(content.contains("enabled = true"));
        assert!(content.contains("comfort_temp = 21"));
    }

    #[test]
    fn parse_comfort_temp_accepts_sane_integers() {
        assert_eq!(parse_comfort_temp("21").unwrap(), 21);
        assert_eq!(parse_comfort_temp(" 18 ").unwrap(), 18);
    }

    #[test]
    fn parse_comfort_temp_rejects_garbage_and_out_of_range() {
        assert!(parse_comfort_temp("warm").is_err());
        assert!(parse_comfort_temp("").is_err());
        assert!(parse_comfort_temp("21.5").is_err());
        assert!(parse_comfort_temp("4").is_err());
        assert!(parse_comfort_temp("41").is_err());
    }
}
