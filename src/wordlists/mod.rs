//! Answer and guess corpora
//!
//! A [`WordList`] is an ordered, de-duplicated set of equal-length words.

pub mod loader;

use crate::core::Word;
use crate::error::{Error, Result};
use rustc_hash::FxHashSet;

/// Ordered set of equal-length words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
    word_len: usize,
}

impl WordList {
    /// Create a word list, dropping later duplicates
    ///
    /// # Errors
    /// Returns `Error::EmptyCorpus` for no words and `Error::LengthMismatch`
    /// if the words differ in length.
    pub fn new(words: Vec<Word>) -> Result<Self> {
        let word_len = words.first().ok_or(Error::EmptyCorpus)?.len();

        let mut seen = FxHashSet::default();
        let mut unique = Vec::with_capacity(words.len());
        for word in words {
            if word.len() != word_len {
                return Err(Error::LengthMismatch {
                    expected: word_len,
                    actual: word.len(),
                });
            }
            if seen.insert(word.clone()) {
                unique.push(word);
            }
        }

        Ok(Self {
            words: unique,
            word_len,
        })
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Length shared by every word
    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
