//! Sorting and filtering helpers for slices of songs.

use crate::catalog::song::Song;

/// Sorts `songs` by rating (highest first), then title, then id.
///
/// The sort is stable, so songs that compare equal (only possible for
/// copies of the same song) keep their relative order.
pub fn sort_songs(songs: &mut [Song]) {
    songs.sort_by(Song::sort_order);
}

/// Returns the songs matching `keyword`, in their original order.
///
/// See [`Song::matches_keyword`] for the matching rules; a blank keyword
/// yields an empty result.
#[must_use]
pub fn filter_by_keyword<'a>(songs: &'a [Song], keyword: &str) -> Vec<&'a Song> {
    songs
        .iter()
        .filter(|song| song.matches_keyword(keyword))
        .collect()
}
