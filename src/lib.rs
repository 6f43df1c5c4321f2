//! Songbook - song records for a small music library
//!
//! Provides the validated `Song` record used by the library tool: checked
//! construction and updates, case-insensitive tag management, keyword
//! search, one-line rendering, and the ordering used to sort song lists.
//! Validation failures come back as `SongError` values and are also
//! emitted as human-readable diagnostics through `tracing`.

pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;

// Re-export key types for convenience
pub use {
    catalog::{Rating, Song, SongId, SongIdGenerator, filter_by_keyword, sort_songs},
    config::{SettingsManager, SongbookSettings},
    error::{Diagnostic, SongError, SongField, Stage},
};
