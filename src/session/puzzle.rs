//! Puzzle numbering

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Days from 1970-01-01 to 2021-06-19, the day puzzle 0 was published
const FIRST_PUZZLE_DAY: u64 = 18_797;

const SECONDS_PER_DAY: u64 = 86_400;

/// Number of a daily puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PuzzleId(u32);

impl PuzzleId {
    #[must_use]
    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    #[must_use]
    pub const fn number(self) -> u32 {
        self.0
    }

    /// Puzzle published on the given day (days since the Unix epoch, UTC)
    ///
    /// Returns `None` for days before the first puzzle.
    #[must_use]
    pub fn for_unix_day(day: u64) -> Option<Self> {
        let offset = day.checked_sub(FIRST_PUZZLE_DAY)?;
        u32::try_from(offset).ok().map(Self)
    }

    /// Today's puzzle according to the system clock
    #[must_use]
    pub fn today() -> Option<Self> {
        let now = SystemTime::now().duration_since(UNIX_EPOCH).ok()?;
        Self::for_unix_day(now.as_secs() / SECONDS_PER_DAY)
    }

    /// Title posted alongside shared results, e.g. `Wordle 210`
    #[must_use]
    pub fn title(self) -> String {
        format!("Wordle {}", self.0)
    }

    /// Search query for shared results of this puzzle
    #[must_use]
    pub fn query(self) -> String {
        format!("wordle {} 6", self.0)
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_puzzle_day() {
        assert_eq!(PuzzleId::for_unix_day(FIRST_PUZZLE_DAY), Some(PuzzleId::new(0)));
        assert_eq!(PuzzleId::for_unix_day(FIRST_PUZZLE_DAY - 1), None);
    }

    #[test]
    fn known_puzzle_date() {
        // 2022-01-15 is day 19_007 since the epoch
        assert_eq!(PuzzleId::for_unix_day(19_007), Some(PuzzleId::new(210)));
    }

    #[test]
    fn today_is_after_launch() {
        assert!(PuzzleId::today().is_some_and(|p| p.number() > 200));
    }

    #[test]
    fn title_and_query() {
        let puzzle = PuzzleId::new(210);
        assert_eq!(puzzle.title(), "Wordle 210");
        assert_eq!(puzzle.query(), "wordle 210 6");
        assert_eq!(puzzle.to_string(), "210");
    }
}
