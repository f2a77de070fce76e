//! Word representation
//!
//! A Word is an immutable, validated sequence of lowercase ASCII letters.
//! Both answers and allowed guesses use this type.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest word a pattern can describe (3^20 still fits in a `u32`)
pub const MAX_WORD_LEN: usize = 20;

/// A validated puzzle word
///
/// Ordering is lexicographic and is only used to make output deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word {
    text: String,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `Error::InvalidWord` if the word is empty, longer than
    /// [`MAX_WORD_LEN`], or contains anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_deducer::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text: String = text.into().to_lowercase();

        let reason = if text.is_empty() {
            Some("word is empty")
        } else if !text.is_ascii() {
            Some("word must contain only ASCII letters")
        } else if text.len() > MAX_WORD_LEN {
            Some("word is too long")
        } else if !text.bytes().all(|c| c.is_ascii_lowercase()) {
            Some("word contains invalid characters")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(Error::InvalidWord { word: text, reason }),
            None => Ok(Self { text }),
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters as bytes (`b'a'..=b'z'`)
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a validated word; present for API symmetry
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl TryFrom<String> for Word {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.text
    }
}

impl std::str::FromStr for Word {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
