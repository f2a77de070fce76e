//! Working set of still-possible answers

use crate::core::Word;
use crate::wordlists::WordList;
use rustc_hash::FxHashSet;

/// Answers not yet ruled out by evidence
///
/// Only ever shrinks: the sole way to derive a new set is intersection
/// with an index bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    words: FxHashSet<Word>,
}

impl CandidateSet {
    /// Every answer in the corpus
    #[must_use]
    pub fn full(answers: &WordList) -> Self {
        answers.iter().cloned().collect()
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

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// Members in alphabetical order
    #[must_use]
    pub fn sorted(&self) -> Vec<&Word> {
        let mut words: Vec<&Word> = self.words.iter().collect();
        words.sort_unstable();
        words
    }

    /// The remaining word, if exactly one is left
    #[must_use]
    pub fn single(&self) -> Option<&Word> {
        if self.words.len() == 1 {
            self.words.iter().next()
        } else {
            None
        }
    }

    /// Members that are also in `bucket`
    #[must_use]
    pub fn intersect(&self, bucket: &FxHashSet<Word>) -> Self {
        let words = if self.words.len() <= bucket.len() {
            self.words
                .iter()
                .filter(|w| bucket.contains(*w))
                .cloned()
                .collect()
        } else {
            bucket
                .iter()
                .filter(|w| self.words.contains(*w))
                .cloned()
                .collect()
        };
        Self { words }
    }
}

impl FromIterator<Word> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}
