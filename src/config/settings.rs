//! User preference management with XDG Base Directory compliance.
//!
//! This module loads and persists the songbook settings as JSON under the
//! user's config directory.

use std::{
    env::var,
    fs::{create_dir_all, read_to_string, write},
    io::Error as StdError,
    path::{Path, PathBuf},
};

use {
    parking_lot::{RwLock, RwLockReadGuard},
    serde::{Deserialize, Serialize},
    serde_json::{Error as SerdeJsonError, from_str, to_string_pretty},
    thiserror::Error,
    tracing::debug,
};

/// Error type for settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Failed to read or write settings file.
    #[error("IO error: {0}")]
    IoError(#[from] StdError),
    /// Failed to serialize or deserialize settings.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] SerdeJsonError),
    /// Invalid settings value.
    #[error("Invalid settings value: {reason}")]
    InvalidValue { reason: String },
}

/// Serializable settings structure with default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SongbookSettings {
    /// First id handed out by a fresh song id generator.
    pub first_id: u64,
    /// Whether validation diagnostics are echoed to standard output.
    pub echo_diagnostics: bool,
    /// `tracing` filter directive for the log output on stderr.
    pub log_filter: String,
}

impl Default for SongbookSettings {
    fn default() -> Self {
        Self {
            first_id: 1,
            echo_diagnostics: true,
            log_filter: "info".to_string(),
        }
    }
}

impl SongbookSettings {
    /// Checks the settings for values the application cannot work with.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidValue` for a `first_id` outside
    /// `1..u64::MAX` or a blank `log_filter`.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(1..u64::MAX).contains(&self.first_id) {
            return Err(SettingsError::InvalidValue {
                reason: format!("first_id must be between 1 and {}", u64::MAX - 1),
            });
        }
        if self.log_filter.trim().is_empty() {
            return Err(SettingsError::InvalidValue {
                reason: "log_filter must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Handles loading, saving, and validation of settings.
#[derive(Debug)]
pub struct SettingsManager {
    /// Thread-safe settings storage.
    settings: RwLock<SongbookSettings>,
    /// Path to the configuration file on disk.
    config_path: PathBuf,
}

impl SettingsManager {
    /// Creates a new settings manager with the default config path.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if settings cannot be loaded from disk.
    pub fn new() -> Result<Self, SettingsError> {
        Self::with_config_path(get_config_path())
    }

    /// Creates a new settings manager with a custom config path.
    ///
    /// Missing files yield the default settings; nothing is written until
    /// [`SettingsManager::update_settings`] is called.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the file exists but cannot be read, parsed,
    /// or holds invalid values.
    pub fn with_config_path(config_path: PathBuf) -> Result<Self, SettingsError> {
        if let Some(parent) = config_path.parent() {
            create_dir_all(parent)?;
        }

        let settings = if config_path.exists() {
            debug!("Loading settings from existing file: {:?}", config_path);
            let contents = read_to_string(&config_path)?;
            let settings: SongbookSettings = from_str(&contents)?;
            settings.validate()?;
            settings
        } else {
            debug!("Using default settings, no file at {:?}", config_path);
            SongbookSettings::default()
        };

        Ok(SettingsManager {
            settings: RwLock::new(settings),
            config_path,
        })
    }

    /// Gets the current settings.
    pub fn get_settings(&self) -> RwLockReadGuard<'_, SongbookSettings> {
        self.settings.read()
    }

    /// Gets the configuration file path.
    #[must_use]
    pub fn get_config_path(&self) -> &Path {
        &self.config_path
    }

    /// Validates `new_settings`, applies them, and saves them to disk.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the settings are invalid or cannot be saved.
    /// Invalid settings are not applied.
    pub fn update_settings(&self, new_settings: SongbookSettings) -> Result<(), SettingsError> {
        new_settings.validate()?;
        *self.settings.write() = new_settings;
        self.save_settings()
    }

    fn save_settings(&self) -> Result<(), SettingsError> {
        debug!("Saving settings to file: {:?}", self.config_path);
        let contents = to_string_pretty(&*self.settings.read())?;
        write(&self.config_path, contents)?;
        Ok(())
    }
}

/// Ensures proper XDG directory usage for the config file.
#[must_use]
pub fn get_config_path() -> PathBuf {
    let mut config_dir = get_xdg_config_home();
    config_dir.push("songbook");
    config_dir.push("settings.json");
    config_dir
}

/// Gets the XDG config home directory following XDG Base Directory specification.
///
/// Uses `XDG_CONFIG_HOME` environment variable if set, otherwise defaults to $HOME/.config
fn get_xdg_config_home() -> PathBuf {
    if let Ok(config_home) = var("XDG_CONFIG_HOME")
        && !config_home.is_empty()
    {
        return PathBuf::from(config_home);
    }

    if let Ok(home) = var("HOME") {
        let mut path = PathBuf::from(home);
        path.push(".config");
        return path;
    }

    PathBuf::from(".")
}
