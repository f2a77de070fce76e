//! Pattern index
//!
//! Maps every observable feedback pattern to the set of answers that some
//! allowed guess (other than the answer itself) scores to that pattern.
//! Which guess produced a pattern is deliberately not recorded: shared
//! results only ever show the colors.
//!
//! A pattern missing from the index means no (answer, guess) pair produces
//! it. Built buckets are never empty.

mod builder;
mod store;

pub use builder::{IndexBuilder, build_sequential};
pub use store::{load_index, save_index};

use crate::core::{Pattern, Word};
use crate::error::{Error, Result};
use crate::solver::CandidateSet;
use rustc_hash::{FxHashMap, FxHashSet};

/// Immutable pattern → answers mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternIndex {
    word_len: usize,
    buckets: FxHashMap<Pattern, FxHashSet<Word>>,
}

impl PatternIndex {
    /// An index with no patterns
    #[must_use]
    pub fn empty(word_len: usize) -> Self {
        Self {
            word_len,
            buckets: FxHashMap::default(),
        }
    }

    /// Assemble an index from explicit buckets
    ///
    /// Buckets for the same pattern are unioned.
    ///
    /// # Errors
    /// Returns `Error::CorruptIndex` if a pattern or word does not have
    /// length `word_len`.
    pub fn from_buckets<I, W>(word_len: usize, buckets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Pattern, W)>,
        W: IntoIterator<Item = Word>,
    {
        let mut index = Self::empty(word_len);
        for (pattern, words) in buckets {
            if pattern.len() != word_len {
                return Err(Error::CorruptIndex(format!(
                    "pattern {pattern} does not have {word_len} positions"
                )));
            }
            let bucket = index.buckets.entry(pattern).or_default();
            for word in words {
                if word.len() != word_len {
                    return Err(Error::CorruptIndex(format!(
                        "word '{word}' in bucket {pattern} does not have {word_len} letters"
                    )));
                }
                bucket.insert(word);
            }
        }
        Ok(index)
    }

    pub(crate) fn insert(&mut self, pattern: Pattern, word: Word) {
        self.buckets.entry(pattern).or_default().insert(word);
    }

    /// Union two partial indices key by key
    ///
    /// Associative and commutative, so partial builds can be combined in
    /// any order.
    #[must_use]
    pub fn merge(mut self, mut other: Self) -> Self {
        if other.buckets.len() > self.buckets.len() {
            std::mem::swap(&mut self, &mut other);
        }
        for (pattern, words) in other.buckets {
            self.buckets.entry(pattern).or_default().extend(words);
        }
        self
    }

    /// Answers capable of producing `pattern`, or `None` if it never occurs
    #[inline]
    #[must_use]
    pub fn get(&self, pattern: &Pattern) -> Option<&FxHashSet<Word>> {
        self.buckets.get(pattern)
    }

    #[inline]
    #[must_use]
    pub fn contains_pattern(&self, pattern: &Pattern) -> bool {
        self.buckets.contains_key(pattern)
    }

    /// Length of every word and pattern in the index
    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    /// Number of distinct patterns
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Pattern, &FxHashSet<Word>)> {
        self.buckets.iter()
    }

    /// Every answer that appears in some bucket
    #[must_use]
    pub fn answers(&self) -> CandidateSet {
        self.buckets
            .values()
            .flat_map(|words| words.iter().cloned())
            .collect()
    }

    /// Patterns in a stable order
    #[must_use]
    pub fn patterns(&self) -> Vec<Pattern> {
        let mut patterns: Vec<Pattern> = self.buckets.keys().copied().collect();
        patterns.sort_unstable();
        patterns
    }

    /// Bucket size per pattern, largest first (ties by pattern)
    #[must_use]
    pub fn bucket_sizes(&self) -> Vec<(Pattern, usize)> {
        let mut sizes: Vec<(Pattern, usize)> = self
            .buckets
            .iter()
            .map(|(&pattern, words)| (pattern, words.len()))
            .collect();
        sizes.sort_unstable_by(|(p1, n1), (p2, n2)| n2.cmp(n1).then_with(|| p1.cmp(p2)));
        sizes
    }
}
