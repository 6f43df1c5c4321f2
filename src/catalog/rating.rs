//! Song rating on a whole-star scale from 1 to 5.

use std::fmt::{Display, Formatter, Result as FmtResult, Write};

use serde::{Deserialize, Serialize};

use crate::error::SongError;

/// A validated rating in the closed range `[1, 5]`.
///
/// Displays as one `*` per star with no separators, e.g. `****` for 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Lowest accepted rating.
    pub const MIN: Self = Self(1);
    /// Highest accepted rating.
    pub const MAX: Self = Self(5);

    /// Returns the number of stars.
    #[must_use]
    pub fn stars(self) -> u8 {
        self.0
    }
}

/// One star, the lowest rating a value can hold.
///
/// There is no zero rating, so the invalid placeholder returned by
/// [`Song::new_or_invalid`](crate::Song::new_or_invalid) renders a single
/// `*` even though nobody rated it.
impl Default for Rating {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<i64> for Rating {
    type Error = SongError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match u8::try_from(value) {
            Ok(stars) if (Self::MIN.0..=Self::MAX.0).contains(&stars) => Ok(Self(stars)),
            _ => Err(SongError::InvalidRating { value }),
        }
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for _ in 0..self.0 {
            f.write_char('*')?;
        }
        Ok(())
    }
}
