//! Operational error context propagation with `anyhow`.
//!
//! This module provides extension traits and utilities for enhancing
//! error context and centralized error reporting.

use std::{error::Error as StdError, fmt::Display};

use {
    anyhow::{Context, Error, Result as AnyhowResult},
    tracing::{debug, error, warn},
};

use crate::error::{
    diagnostic::{Diagnostic, Severity, Stage},
    domain::SongError,
};

/// `tracing` target carrying user-facing validation diagnostics.
///
/// [`crate::logging`] routes events on this target to standard output.
pub const DIAGNOSTIC_TARGET: &str = "songbook::diagnostic";

/// Extension trait for enhanced error context.
///
/// This trait provides methods to add contextual information to errors,
/// making debugging and user feedback more informative.
pub trait ResultExt<T, E> {
    /// Adds context to an error with a static string.
    fn add_context(self, context: &'static str) -> AnyhowResult<T>
    where
        E: StdError + Send + Sync + 'static;

    /// Adds context to an error with a formatted string.
    fn add_contextf(self, format: impl Display) -> AnyhowResult<T>
    where
        E: StdError + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn add_context(self, context: &'static str) -> AnyhowResult<T>
    where
        E: StdError + Send + Sync + 'static,
    {
        self.context(context)
    }

    fn add_contextf(self, format: impl Display) -> AnyhowResult<T>
    where
        E: StdError + Send + Sync + 'static,
    {
        self.context(format.to_string())
    }
}

/// Centralized error reporting and logging.
///
/// Song operations report their validation failures here; glue code uses
/// the severity helpers for everything else.
pub struct ErrorReporter;

impl ErrorReporter {
    /// Emits the diagnostic for a failed song operation and returns it.
    ///
    /// Construction failures are logged at error level, update failures at
    /// warn level, both on [`DIAGNOSTIC_TARGET`].
    pub fn diagnostic(song_error: &SongError, stage: Stage) -> Diagnostic {
        let diagnostic = song_error.diagnostic(stage);
        match diagnostic.severity {
            Severity::Error => error!(target: DIAGNOSTIC_TARGET, "{diagnostic}"),
            Severity::Notice => warn!(target: DIAGNOSTIC_TARGET, "{diagnostic}"),
        }
        debug!(error = %song_error, ?stage, "Song validation failed");
        diagnostic
    }

    /// Reports a warning-level error (recoverable issues).
    pub fn warn(error: &Error, context: &str) {
        warn!(context = context, error = %error, "Warning error");
    }

    /// Reports an error-level error (non-recoverable issues).
    pub fn error(error: &Error, context: &str) {
        error!(context = context, error = %error, "Error error");
    }

    /// Converts an error to a user-friendly message.
    ///
    /// Song validation errors anywhere in the chain are shown as their
    /// update diagnostic; anything else falls back to the top-level message.
    pub fn to_user_message(error: &Error) -> String {
        error
            .chain()
            .find_map(|cause| cause.downcast_ref::<SongError>())
            .map_or_else(
                || error.to_string(),
                |song_error| song_error.diagnostic(Stage::Update).to_string(),
            )
    }
}
