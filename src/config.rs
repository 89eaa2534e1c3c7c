use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::ops::RangeInclusive;

/// Default board width
pub const DEFAULT_WIDTH: usize = 4;
/// Default board height
pub const DEFAULT_HEIGHT: usize = 4;
/// Default minimum word length
pub const DEFAULT_MIN_WORD_LEN: usize = 3;
/// Default maximum word length
pub const DEFAULT_MAX_WORD_LEN: usize = 6;

/// The word lengths (in characters) taken into account by a search.
///
/// Both bounds are inclusive, and `1 <= min <= max` always holds:
/// the only way to create `Limits` is through [`Limits::new`] or [`Limits::default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "(usize, usize)", into = "(usize, usize)")
)]
pub struct Limits {
    min: usize,
    max: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            min: DEFAULT_MIN_WORD_LEN,
            max: DEFAULT_MAX_WORD_LEN,
        }
    }
}

impl TryFrom<(usize, usize)> for Limits {
    type Error = Error;

    fn try_from((min, max): (usize, usize)) -> Result<Self, Self::Error> {
        Limits::new(min, max)
    }
}

impl From<Limits> for (usize, usize) {
    fn from(limits: Limits) -> Self {
        (limits.min, limits.max)
    }
}

impl fmt::Display for Limits {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

impl Limits {
    /// Create word length limits.
    /// ## Errors
    /// [`InvalidConfiguration`](Error::InvalidConfiguration) if `min` is 0 or larger than `max`.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{Limits, Error};
    /// let limits = Limits::new(3, 8)?;
    /// assert!(limits.contains(5));
    /// assert!(Limits::new(4, 3).is_err());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn new(min: usize, max: usize) -> Result<Limits, Error> {
        if min == 0 || min > max {
            return Err(Error::InvalidConfiguration { min, max });
        }
        Ok(Limits { min, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// Returns true if a word of `len` characters is within the limits
    pub fn contains(&self, len: usize) -> bool {
        self.range().contains(&len)
    }

    pub fn range(&self) -> RangeInclusive<usize> {
        self.min..=self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let limits = Limits::default();
        assert_eq!(limits.range(), 3..=6);
        assert_eq!(limits.to_string(), "3..=6");
    }

    #[test]
    fn test_single_length() -> Result<(), Error> {
        let limits = Limits::new(4, 4)?;
        assert!(!limits.contains(3));
        assert!(limits.contains(4));
        assert!(!limits.contains(5));
        Ok(())
    }

    #[test]
    #[should_panic(expected = "InvalidConfiguration { min: 5, max: 4 }")]
    fn test_min_above_max() {
        Limits::new(5, 4).unwrap();
    }

    #[test]
    #[should_panic(expected = "InvalidConfiguration { min: 0, max: 4 }")]
    fn test_zero_min() {
        Limits::new(0, 4).unwrap();
    }

    #[test]
    fn test_try_from_tuple() {
        assert_eq!(Limits::try_from((3, 6)).ok(), Some(Limits::default()));
        assert!(Limits::try_from((5, 2)).is_err());
        assert_eq!(<(usize, usize)>::from(Limits::default()), (3, 6));
    }

    #[cfg(feature = "bincode")]
    #[test]
    fn test_deserialize_validates() {
        let bytes = bincode::serialize(&Limits::new(2, 5).unwrap()).unwrap();
        let limits: Limits = bincode::deserialize(&bytes).unwrap();
        assert_eq!(limits.range(), 2..=5);
        for &(min, max) in &[(5usize, 2usize), (0, 4)] {
            let bytes = bincode::serialize(&(min, max)).unwrap();
            assert!(bincode::deserialize::<Limits>(&bytes).is_err());
        }
    }
}
