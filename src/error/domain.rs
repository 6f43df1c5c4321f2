//! Domain-specific error types using `thiserror`.
//!
//! This module defines the validation failures a [`Song`](crate::catalog::Song)
//! operation can report. None of them are fatal: the failing operation leaves
//! the song unchanged and hands the error back to the caller.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    result::Result as StdResult,
};

use {anyhow::Error, thiserror::Error};

/// Text field of a song that must not be blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SongField {
    /// Song title.
    Title,
    /// Performing artist.
    Artist,
    /// A single free-form tag.
    Tag,
}

impl Display for SongField {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::Title => "title",
            Self::Artist => "artist",
            Self::Tag => "tag",
        };
        f.write_str(name)
    }
}

/// Song validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SongError {
    /// A text field is empty after trimming.
    #[error("Empty field: {field} must not be blank")]
    EmptyField { field: SongField },
    /// Duration is zero or negative.
    #[error("Invalid duration: {value}s is not a positive number of seconds")]
    InvalidDuration { value: i64 },
    /// Rating lies outside `[1, 5]`.
    #[error("Invalid rating: {value} is outside 1..=5")]
    InvalidRating { value: i64 },
    /// A tag equal to `tag` (ignoring case) is already present.
    #[error("Duplicate tag: {tag}")]
    DuplicateTag { tag: String },
    /// No tag equal to `tag` (ignoring case) is present.
    #[error("Tag not found: {tag}")]
    TagNotFound { tag: String },
    /// The id generator has no ids left to issue.
    #[error("Song ids exhausted")]
    IdsExhausted,
}

impl SongError {
    /// Creates a new `EmptyField` error.
    #[must_use]
    pub fn empty(field: SongField) -> Self {
        Self::EmptyField { field }
    }

    /// Creates a new `DuplicateTag` error.
    pub fn duplicate_tag(tag: impl Into<String>) -> Self {
        Self::DuplicateTag { tag: tag.into() }
    }

    /// Creates a new `TagNotFound` error.
    pub fn tag_not_found(tag: impl Into<String>) -> Self {
        Self::TagNotFound { tag: tag.into() }
    }
}

/// Operational error context propagation with `anyhow`.
///
/// Used by the binary and other glue code that only needs to report
/// failures, not branch on them.
pub type Result<T> = StdResult<T, Error>;

#[cfg(test)]
mod tests {
    use crate::error::domain::{SongError, SongField};

    #[test]
    fn test_song_error_display() {
        assert_eq!(
            SongError::empty(SongField::Title).to_string(),
            "Empty field: title must not be blank"
        );
        assert_eq!(
            SongError::InvalidDuration { value: -3 }.to_string(),
            "Invalid duration: -3s is not a positive number of seconds"
        );
        assert_eq!(
            SongError::InvalidRating { value: 6 }.to_string(),
            "Invalid rating: 6 is outside 1..=5"
        );
        assert_eq!(
            SongError::duplicate_tag("rock").to_string(),
            "Duplicate tag: rock"
        );
        assert_eq!(
            SongError::tag_not_found("jazz").to_string(),
            "Tag not found: jazz"
        );
        assert_eq!(SongError::IdsExhausted.to_string(), "Song ids exhausted");
    }
}
