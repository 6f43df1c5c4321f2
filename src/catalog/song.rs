//! The `Song` record: one catalogued track.
//!
//! A song is built through [`Song::new`], which validates every field and
//! draws an id from a [`SongIdGenerator`] only once validation passed. All
//! later changes go through the setters and tag operations below; each one
//! validates its input, reports a diagnostic on failure, and leaves the song
//! untouched when it rejects a value.

use std::{
    cmp::Ordering,
    fmt::{Display, Formatter, Result as FmtResult},
    io::{Result as IoResult, Write, stdout},
};

use {serde::Serialize, tracing::debug};

use crate::{
    catalog::{
        ids::{SongId, SongIdGenerator},
        rating::Rating,
        text::{contains_folded, eq_ignore_case, fold_case, trim},
    },
    error::{ErrorReporter, SongError, SongField, Stage},
};

/// One music track with identity, descriptive fields, and free-form tags.
///
/// Renders through [`Display`] as
/// `[#<id>] <artist> - <title> (<seconds>s) <stars>`, followed by
/// `  [tags: a, b]` when the song carries tags.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Song {
    /// Identifier issued at construction, `0` for invalid songs.
    id: SongId,
    /// Trimmed, non-empty title.
    title: String,
    /// Trimmed, non-empty artist name.
    artist: String,
    /// Length in seconds, always positive.
    duration_sec: i64,
    /// Rating between one and five stars.
    rating: Rating,
    /// Tags in insertion order, unique ignoring ASCII case.
    tags: Vec<String>,
    /// Whether construction validation succeeded.
    valid: bool,
}

impl Song {
    /// Creates a new song after validating its fields.
    ///
    /// Title and artist are trimmed. Validation stops at the first failure,
    /// checking title, artist, duration, then rating. On failure the
    /// construction diagnostic is emitted and no id is consumed.
    ///
    /// # Arguments
    ///
    /// * `title` - Song title.
    /// * `artist` - Performing artist.
    /// * `duration_sec` - Length in seconds, must be positive.
    /// * `rating` - Rating from 1 to 5.
    /// * `ids` - Generator the song's id is drawn from.
    ///
    /// # Errors
    ///
    /// Returns the [`SongError`] of the first field that failed validation,
    /// or `SongError::IdsExhausted` when `ids` has no id left.
    pub fn new(
        title: &str,
        artist: &str,
        duration_sec: i64,
        rating: i64,
        ids: &SongIdGenerator,
    ) -> Result<Self, SongError> {
        let checked = validate_text(title, SongField::Title).and_then(|title| {
            let artist = validate_text(artist, SongField::Artist)?;
            let duration_sec = validate_duration(duration_sec)?;
            let rating = Rating::try_from(rating)?;
            Ok((title, artist, duration_sec, rating))
        });

        let (title, artist, duration_sec, rating, id) = checked
            .and_then(|(title, artist, duration_sec, rating)| {
                Ok((title, artist, duration_sec, rating, ids.next_id()?))
            })
            .inspect_err(|error| {
                ErrorReporter::diagnostic(error, Stage::Construction);
            })?;

        let song = Self {
            id,
            title: title.to_owned(),
            artist: artist.to_owned(),
            duration_sec,
            rating,
            tags: Vec::new(),
            valid: true,
        };
        debug!(id = %song.id, title = %song.title, "Created song");
        Ok(song)
    }

    /// Creates a new song, falling back to an invalid placeholder.
    ///
    /// Behaves like [`Song::new`], but a failed validation yields the default
    /// song with [`Song::is_valid`] returning `false` instead of an error.
    /// Callers must check the flag before using the result: the placeholder
    /// still carries the one-star default rating and renders as
    /// `[#0]  -  (0s) *`.
    #[must_use]
    pub fn new_or_invalid(
        title: &str,
        artist: &str,
        duration_sec: i64,
        rating: i64,
        ids: &SongIdGenerator,
    ) -> Self {
        Self::new(title, artist, duration_sec, rating, ids).unwrap_or_default()
    }

    #[must_use]
    pub fn id(&self) -> SongId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn artist(&self) -> &str {
        &self.artist
    }

    #[must_use]
    pub fn duration_sec(&self) -> i64 {
        self.duration_sec
    }

    #[must_use]
    pub fn rating(&self) -> Rating {
        self.rating
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns `true` when construction validation succeeded.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Replaces the title with the trimmed `title`.
    ///
    /// # Errors
    ///
    /// Returns `SongError::EmptyField` if `title` is blank.
    pub fn set_title(&mut self, title: &str) -> Result<(), SongError> {
        let title = reported(validate_text(title, SongField::Title))?;
        self.title = title.to_owned();
        Ok(())
    }

    /// Replaces the artist with the trimmed `artist`.
    ///
    /// # Errors
    ///
    /// Returns `SongError::EmptyField` if `artist` is blank.
    pub fn set_artist(&mut self, artist: &str) -> Result<(), SongError> {
        let artist = reported(validate_text(artist, SongField::Artist))?;
        self.artist = artist.to_owned();
        Ok(())
    }

    /// Replaces the duration.
    ///
    /// # Errors
    ///
    /// Returns `SongError::InvalidDuration` unless `duration_sec` is positive.
    pub fn set_duration(&mut self, duration_sec: i64) -> Result<(), SongError> {
        self.duration_sec = reported(validate_duration(duration_sec))?;
        Ok(())
    }

    /// Replaces the rating.
    ///
    /// # Errors
    ///
    /// Returns `SongError::InvalidRating` unless `rating` is within 1..=5.
    pub fn set_rating(&mut self, rating: i64) -> Result<(), SongError> {
        self.rating = reported(Rating::try_from(rating))?;
        Ok(())
    }

    /// Appends the trimmed `tag`, keeping its original case.
    ///
    /// # Errors
    ///
    /// Returns `SongError::EmptyField` for a blank tag and
    /// `SongError::DuplicateTag` when an existing tag matches ignoring case.
    pub fn add_tag(&mut self, tag: &str) -> Result<(), SongError> {
        let checked = validate_text(tag, SongField::Tag).and_then(|tag| {
            if self.tags.iter().any(|existing| eq_ignore_case(existing, tag)) {
                Err(SongError::duplicate_tag(tag))
            } else {
                Ok(tag)
            }
        });
        let tag = reported(checked)?;

        self.tags.push(tag.to_owned());
        Ok(())
    }

    /// Removes the first tag equal to the trimmed `tag`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns `SongError::TagNotFound` when no tag matches.
    pub fn remove_tag(&mut self, tag: &str) -> Result<(), SongError> {
        let needle = trim(tag);
        let Some(index) = self
            .tags
            .iter()
            .position(|existing| eq_ignore_case(existing, needle))
        else {
            return reported(Err(SongError::tag_not_found(needle)));
        };

        let removed = self.tags.remove(index);
        debug!(id = %self.id, tag = %removed, "Removed tag");
        Ok(())
    }

    /// Checks whether the title, the artist, or any tag contains `keyword`.
    ///
    /// The keyword is trimmed and compared ignoring ASCII case. A blank
    /// keyword matches nothing.
    #[must_use]
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let keyword = fold_case(trim(keyword));
        if keyword.is_empty() {
            return false;
        }

        [&self.title, &self.artist]
            .into_iter()
            .chain(&self.tags)
            .any(|field| contains_folded(field, &keyword))
    }

    /// Orders songs by rating (highest first), then title, then id.
    ///
    /// Titles compare byte-wise. Two distinct songs from one generator never
    /// compare equal.
    #[must_use]
    pub fn sort_order(&self, other: &Self) -> Ordering {
        other
            .rating
            .cmp(&self.rating)
            .then_with(|| self.title.cmp(&other.title))
            .then_with(|| self.id.cmp(&other.id))
    }

    /// Strict "less than" form of [`Song::sort_order`].
    #[must_use]
    pub fn sorts_before(&self, other: &Self) -> bool {
        self.sort_order(other).is_lt()
    }

    /// Writes the rendered song followed by a newline.
    ///
    /// # Errors
    ///
    /// Propagates write failures from `writer`.
    pub fn render_to<W: Write>(&self, writer: &mut W) -> IoResult<()> {
        writeln!(writer, "{self}")
    }

    /// Writes the rendered song to standard output.
    ///
    /// # Errors
    ///
    /// Propagates write failures on standard output.
    pub fn print(&self) -> IoResult<()> {
        self.render_to(&mut stdout().lock())
    }
}

impl Display for Song {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "[#{}] {} - {} ({}s) {}",
            self.id, self.artist, self.title, self.duration_sec, self.rating
        )?;
        if !self.tags.is_empty() {
            write!(f, "  [tags: {}]", self.tags.join(", "))?;
        }
        Ok(())
    }
}

/// Trims `value` and rejects it when nothing is left.
fn validate_text(value: &str, field: SongField) -> Result<&str, SongError> {
    match trim(value) {
        "" => Err(SongError::empty(field)),
        trimmed => Ok(trimmed),
    }
}

fn validate_duration(duration_sec: i64) -> Result<i64, SongError> {
    if duration_sec > 0 {
        Ok(duration_sec)
    } else {
        Err(SongError::InvalidDuration {
            value: duration_sec,
        })
    }
}

/// Emits the update diagnostic for a failed check.
fn reported<T>(result: Result<T, SongError>) -> Result<T, SongError> {
    result.inspect_err(|error| {
        ErrorReporter::diagnostic(error, Stage::Update);
    })
}
