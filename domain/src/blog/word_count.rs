//! Target word count for a drafted post

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

pub const MIN_WORD_COUNT: u32 = 100;
pub const MAX_WORD_COUNT: u32 = 2000;
pub const WORD_COUNT_STEP: u32 = 50;

/// Target length of a post, in words (Value Object)
///
/// Always one of `100, 150, 200, ..., 2000`, the positions of the form
/// slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct WordCount(u32);

impl WordCount {
    pub fn new(value: u32) -> Result<Self, DomainError> {
        let in_range = (MIN_WORD_COUNT..=MAX_WORD_COUNT).contains(&value);
        if !in_range || (value - MIN_WORD_COUNT) % WORD_COUNT_STEP != 0 {
            return Err(DomainError::InvalidWordCount {
                value,
                min: MIN_WORD_COUNT,
                max: MAX_WORD_COUNT,
                step: WORD_COUNT_STEP,
            });
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Every accepted value, ascending.
    pub fn all() -> impl Iterator<Item = WordCount> {
        (MIN_WORD_COUNT..=MAX_WORD_COUNT)
            .step_by(WORD_COUNT_STEP as usize)
            .map(WordCount)
    }
}

impl Default for WordCount {
    fn default() -> Self {
        WordCount(MIN_WORD_COUNT)
    }
}

impl TryFrom<u32> for WordCount {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        WordCount::new(value)
    }
}

impl From<WordCount> for u32 {
    fn from(count: WordCount) -> Self {
        count.0
    }
}

impl std::fmt::Display for WordCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_accepted() {
        assert_eq!(WordCount::new(100).unwrap().get(), 100);
        assert_eq!(WordCount::new(2000).unwrap().get(), 2000);
        assert_eq!(WordCount::new(550).unwrap().get(), 550);
    }

    #[test]
    fn test_off_step_rejected() {
        assert!(WordCount::new(125).is_err());
        assert!(WordCount::new(1999).is_err());
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(WordCount::new(0).is_err());
        assert!(WordCount::new(50).is_err());
        assert!(WordCount::new(2050).is_err());
    }

    #[test]
    fn test_all_values_on_step_grid() {
        let all: Vec<u32> = WordCount::all().map(WordCount::get).collect();
        assert_eq!(all.len(), 39);
        assert_eq!(all.first(), Some(&100));
        assert_eq!(all.last(), Some(&2000));
        assert!(all.iter().all(|v| (v - 100) % 50 == 0));
    }

    #[test]
    fn test_default_is_minimum() {
        assert_eq!(WordCount::default().get(), MIN_WORD_COUNT);
    }
}
