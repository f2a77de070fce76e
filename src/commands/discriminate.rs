//! Word discrimination command

use crate::core::{Pattern, Word};
use crate::error::{Error, Result};
use crate::index::PatternIndex;
use crate::solver::discriminate;

/// Patterns separating two words
pub struct DiscriminateResult {
    pub first: Word,
    pub second: Word,
    /// Patterns produced for `first` but not `second`
    pub first_only: Vec<Pattern>,
    /// Patterns produced for `second` but not `first`
    pub second_only: Vec<Pattern>,
}

impl DiscriminateResult {
    /// No observable pattern tells the words apart
    #[must_use]
    pub fn indistinguishable(&self) -> bool {
        self.first_only.is_empty() && self.second_only.is_empty()
    }
}

/// Find every pattern whose bucket holds exactly one of the two words
///
/// # Errors
///
/// Returns an error if either word is invalid or does not match the
/// index's word length.
pub fn discriminate_words(index: &PatternIndex, first: &str, second: &str) -> Result<DiscriminateResult> {
    let first = checked_word(index, first)?;
    let second = checked_word(index, second)?;

    let (first_only, second_only) = discriminate(index, &first, &second)
        .into_iter()
        .partition(|pattern| index.get(pattern).is_some_and(|words| words.contains(&first)));

    Ok(DiscriminateResult {
        first,
        second,
        first_only,
        second_only,
    })
}

fn checked_word(index: &PatternIndex, text: &str) -> Result<Word> {
    let word = Word::new(text)?;
    if word.len() == index.word_len() {
        Ok(word)
    } else {
        Err(Error::LengthMismatch {
            expected: index.word_len(),
            actual: word.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn pattern(text: &str) -> Pattern {
        text.parse().unwrap()
    }

    fn index() -> PatternIndex {
        PatternIndex::from_buckets(
            3,
            [
                (pattern("X.."), vec![word("abc"), word("xyz")]),
                (pattern("..X"), vec![word("abc")]),
                (pattern("..."), vec![word("xyz")]),
                (pattern("XXO"), vec![word("abc"), word("abd")]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn splits_patterns_by_owner() {
        let result = discriminate_words(&index(), "ABC", "xyz").unwrap();

        assert_eq!(result.first, word("abc"));
        let mut expected = vec![pattern("..X"), pattern("XXO")];
        expected.sort_unstable();
        assert_eq!(result.first_only, expected);
        assert_eq!(result.second_only, [pattern("...")]);
        assert!(!result.indistinguishable());
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(matches!(
            discriminate_words(&index(), "abcd", "xyz"),
            Err(Error::LengthMismatch { .. })
        ));
        assert!(discriminate_words(&index(), "a1c", "xyz").is_err());
    }
}
