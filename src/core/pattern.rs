//! Feedback pattern calculation and representation
//!
//! A pattern encodes the per-letter feedback of a guess using base-3 digits:
//! - 0 = Absent (letter not in the answer)
//! - 1 = Present (letter in the answer, wrong position)
//! - 2 = Exact (letter in the correct position)
//!
//! Position i contributes digit × 3^i. The length is stored alongside the
//! code so patterns of different word lengths never compare equal.
//!
//! The canonical text form uses `X` for Exact, `O` for Present and `.` for
//! Absent, e.g. `X.OO.`.

use super::word::{MAX_WORD_LEN, Word};
use crate::error::{Error, Result};
use std::fmt;

/// Feedback for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Absent,
    Present,
    Exact,
}

impl Feedback {
    #[inline]
    const fn digit(self) -> u32 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Exact => 2,
        }
    }

    #[inline]
    const fn from_digit(digit: u32) -> Self {
        match digit {
            2 => Self::Exact,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Canonical single-character symbol
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Absent => '.',
            Self::Present => 'O',
            Self::Exact => 'X',
        }
    }

    /// Parse a single symbol (`X`/`G`, `O`/`Y`, `.`/`-`/`_`)
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'X' | 'x' | 'G' | 'g' => Some(Self::Exact),
            'O' | 'o' | 'Y' | 'y' => Some(Self::Present),
            '.' | '-' | '_' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback pattern for one guess against one answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern {
    code: u32,
    len: u8,
}

impl Pattern {
    /// Build a pattern from per-position feedback
    ///
    /// # Errors
    /// Returns `Error::InvalidPattern` if `marks` is empty or longer than
    /// [`MAX_WORD_LEN`].
    pub fn from_marks(marks: &[Feedback]) -> Result<Self> {
        if marks.is_empty() || marks.len() > MAX_WORD_LEN {
            let text: String = marks.iter().map(|m| m.symbol()).collect();
            return Err(Error::InvalidPattern(text));
        }
        Ok(Self::encode(marks))
    }

    fn encode(marks: &[Feedback]) -> Self {
        let mut code = 0u32;
        let mut multiplier = 1u32;
        for mark in marks {
            code += mark.digit() * multiplier;
            multiplier = multiplier.saturating_mul(3);
        }
        Self {
            code,
            len: marks.len() as u8,
        }
    }

    /// The all-Exact pattern of the given length
    ///
    /// # Panics
    /// Panics if `len` is zero or exceeds [`MAX_WORD_LEN`].
    #[must_use]
    pub fn all_exact(len: usize) -> Self {
        assert!(
            (1..=MAX_WORD_LEN).contains(&len),
            "pattern length must be 1..={MAX_WORD_LEN}"
        );
        Self::encode(&[Feedback::Exact; MAX_WORD_LEN][..len])
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    /// Always false for a constructed pattern
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Raw base-3 code
    #[inline]
    #[must_use]
    pub const fn code(self) -> u32 {
        self.code
    }

    /// Iterate feedback from the first position to the last
    pub fn marks(self) -> impl Iterator<Item = Feedback> {
        let mut val = self.code;
        (0..self.len).map(move |_| {
            let mark = Feedback::from_digit(val % 3);
            val /= 3;
            mark
        })
    }

    #[must_use]
    pub fn is_all_exact(self) -> bool {
        self.marks().all(|m| m == Feedback::Exact)
    }

    /// Count the number of Exact positions
    #[must_use]
    pub fn count_exact(self) -> usize {
        self.marks().filter(|&m| m == Feedback::Exact).count()
    }

    /// Count the number of Present positions
    #[must_use]
    pub fn count_present(self) -> usize {
        self.marks().filter(|&m| m == Feedback::Present).count()
    }

    /// Calculate the pattern shown when `guess` is played against `answer`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches; every other answer letter stays
    ///    available
    /// 2. Second pass: for each non-exact position, consume one available
    ///    copy of the guessed letter if any remains (Present), else Absent
    ///
    /// A letter already consumed by an exact match or an earlier Present
    /// match is never reused, which is what makes repeated letters work.
    ///
    /// # Panics
    /// Panics if the words differ in length. Use [`Pattern::try_calculate`]
    /// when the lengths are not already known to agree.
    ///
    /// # Examples
    /// ```
    /// use wordle_deducer::core::{Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// assert_eq!(Pattern::calculate(&guess, &answer).to_string(), "..X.X");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        assert_eq!(
            guess.len(),
            answer.len(),
            "cannot score '{guess}' against '{answer}'"
        );

        let guess = guess.letters();
        let answer = answer.letters();
        let mut marks = [Feedback::Absent; MAX_WORD_LEN];
        let mut available = [0u8; 26];

        for (i, (&g, &a)) in guess.iter().zip(answer).enumerate() {
            if g == a {
                marks[i] = Feedback::Exact;
            } else {
                available[usize::from(a - b'a')] += 1;
            }
        }

        for (i, &g) in guess.iter().enumerate() {
            if marks[i] == Feedback::Exact {
                continue;
            }
            let count = &mut available[usize::from(g - b'a')];
            if *count > 0 {
                marks[i] = Feedback::Present;
                *count -= 1;
            }
        }

        Self::encode(&marks[..guess.len()])
    }

    /// Checked form of [`Pattern::calculate`]
    ///
    /// # Errors
    /// Returns `Error::LengthMismatch` if the words differ in length.
    pub fn try_calculate(guess: &Word, answer: &Word) -> Result<Self> {
        if guess.len() != answer.len() {
            return Err(Error::LengthMismatch {
                expected: answer.len(),
                actual: guess.len(),
            });
        }
        Ok(Self::calculate(guess, answer))
    }

    /// Render as colored squares
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.marks()
            .map(|m| match m {
                Feedback::Exact => '🟩',
                Feedback::Present => '🟨',
                Feedback::Absent => '⬜',
            })
            .collect()
    }
}

impl std::str::FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let marks = s
            .chars()
            .map(Feedback::from_symbol)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| Error::InvalidPattern(s.to_string()))?;
        Self::from_marks(&marks).map_err(|_| Error::InvalidPattern(s.to_string()))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self.marks().map(Feedback::symbol).collect();
        f.write_str(&text)
    }
}
