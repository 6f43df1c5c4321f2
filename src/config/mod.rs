//! User preferences and persistent settings.
//!
//! This module provides settings management with XDG Base Directory
//! compliance.

pub mod settings;

pub use settings::{SettingsError, SettingsManager, SongbookSettings, get_config_path};
