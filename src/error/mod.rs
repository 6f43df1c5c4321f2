//! Comprehensive error handling system using `thiserror` and `anyhow`.
//!
//! This module provides the song validation error type, its human-readable
//! diagnostics, and operational error context propagation for glue code.

pub mod diagnostic;
pub mod domain;
pub mod operational;

pub use {
    diagnostic::{Diagnostic, Severity, Stage},
    domain::{Result, SongError, SongField},
    operational::{DIAGNOSTIC_TARGET, ErrorReporter, ResultExt},
};
