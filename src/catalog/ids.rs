//! Song identifiers and the counter that issues them.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    sync::atomic::{AtomicU64, Ordering::Relaxed},
};

use serde::{Deserialize, Serialize};

use crate::error::SongError;

/// Process-local identifier of a [`Song`](crate::catalog::Song).
///
/// `SongId(0)` is never issued by a generator and marks an invalid song.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SongId(u64);

impl SongId {
    /// Returns the raw numeric value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<SongId> for u64 {
    fn from(id: SongId) -> Self {
        id.0
    }
}

impl Display for SongId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

/// Issues strictly increasing, never reused [`SongId`]s.
///
/// The generator is owned by whatever builds songs and passed explicitly to
/// [`Song::new`](crate::catalog::Song::new). Ids are only drawn once a song
/// has passed validation, so failed constructions leave no gaps. Once
/// `u64::MAX` is reached the generator is exhausted and refuses to issue
/// more ids rather than wrapping around.
#[derive(Debug)]
pub struct SongIdGenerator {
    next: AtomicU64,
}

impl SongIdGenerator {
    /// Creates a generator whose first id is `1`.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates a generator whose first id is `first`.
    ///
    /// A `first` of `0` is bumped to `1`.
    #[must_use]
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first.max(1)),
        }
    }

    /// Returns the id the next call to [`Self::next_id`] will issue.
    #[must_use]
    pub fn peek(&self) -> SongId {
        SongId(self.next.load(Relaxed))
    }

    /// Issues the next id.
    ///
    /// # Errors
    ///
    /// Returns `SongError::IdsExhausted` once every id up to `u64::MAX - 1`
    /// has been issued.
    pub fn next_id(&self) -> Result<SongId, SongError> {
        self.next
            .fetch_update(Relaxed, Relaxed, |next| next.checked_add(1))
            .map(SongId)
            .map_err(|_| SongError::IdsExhausted)
    }
}

impl Default for SongIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, sync::Arc, thread};

    use crate::{
        catalog::ids::{SongId, SongIdGenerator},
        error::SongError,
    };

    #[test]
    fn test_generator_starts_at_one() {
        let ids = SongIdGenerator::new();
        assert_eq!(ids.peek().value(), 1);
        assert_eq!(ids.next_id().unwrap().value(), 1);
        assert_eq!(ids.next_id().unwrap().value(), 2);
        assert_eq!(ids.peek().value(), 3);
    }

    #[test]
    fn test_generator_starting_at() {
        let ids = SongIdGenerator::starting_at(40);
        assert_eq!(ids.next_id().unwrap().value(), 40);

        let ids = SongIdGenerator::starting_at(0);
        assert_eq!(ids.next_id().unwrap().value(), 1);
    }

    #[test]
    fn test_generator_never_wraps() {
        let ids = SongIdGenerator::starting_at(u64::MAX - 2);
        let first = ids.next_id().unwrap();
        let second = ids.next_id().unwrap();
        assert!(second > first);
        assert_eq!(second.value(), u64::MAX - 1);

        assert_eq!(ids.next_id(), Err(SongError::IdsExhausted));
        assert_eq!(ids.next_id(), Err(SongError::IdsExhausted));
        assert_eq!(ids.peek().value(), u64::MAX);
    }

    #[test]
    fn test_concurrent_ids_are_unique() {
        let ids = Arc::new(SongIdGenerator::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let ids = Arc::clone(&ids);
                thread::spawn(move || (0..250).map(|_| ids.next_id().unwrap()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id));
            }
        }
        assert_eq!(seen.len(), 1000);
        assert_eq!(ids.peek().value(), 1001);
    }

    #[test]
    fn test_song_id_display() {
        assert_eq!(SongId::default().to_string(), "0");
        assert_eq!(SongIdGenerator::starting_at(7).next_id().unwrap().to_string(), "7");
    }
}
