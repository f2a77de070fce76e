//! Pattern narrowing command
//!
//! Applies a list of patterns to every answer in the index and shows how
//! the candidates shrink. When two candidates survive, it also lists the
//! patterns that would separate them.

use crate::core::{Pattern, Word};
use crate::error::Result;
use crate::index::PatternIndex;
use crate::solver::{ReductionStep, discriminate, reduce_all_traced};

/// Result of narrowing
pub struct NarrowResult {
    pub initial: usize,
    pub steps: Vec<ReductionStep>,
    pub remaining: Vec<Word>,
    /// Separating patterns when exactly two candidates remain
    pub separators: Option<Vec<Pattern>>,
}

/// Narrow the index's answers with `patterns`
///
/// # Errors
///
/// Returns `Error::UnknownPattern` if the first pattern is not indexed.
pub fn narrow(index: &PatternIndex, patterns: &[Pattern]) -> Result<NarrowResult> {
    let initial = index.answers();
    let (candidates, steps) = reduce_all_traced(index, &initial, patterns)?;

    let remaining: Vec<Word> = candidates.sorted().into_iter().cloned().collect();
    let separators = match remaining.as_slice() {
        [a, b] => Some(discriminate(index, a, b).into_iter().collect()),
        _ => None,
    };

    Ok(NarrowResult {
        initial: initial.len(),
        steps,
        remaining,
        separators,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

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
                (pattern("X.."), vec![word("abc"), word("abd"), word("xyz")]),
                (pattern("XO."), vec![word("abc"), word("abd")]),
                (pattern("..X"), vec![word("abc")]),
                (pattern("..."), vec![word("xyz")]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn two_survivors_get_separators() {
        let result = narrow(&index(), &[pattern("X.."), pattern("XO.")]).unwrap();

        assert_eq!(result.initial, 3);
        assert_eq!(result.remaining, [word("abc"), word("abd")]);
        assert_eq!(result.separators, Some(vec![pattern("..X")]));
        assert_eq!(result.steps.len(), 2);
    }

    #[test]
    fn single_survivor_has_no_separators() {
        let result = narrow(&index(), &[pattern("..X")]).unwrap();
        assert_eq!(result.remaining, [word("abc")]);
        assert!(result.separators.is_none());
    }

    #[test]
    fn unknown_first_pattern_fails() {
        assert!(matches!(
            narrow(&index(), &[pattern("XXX")]),
            Err(Error::UnknownPattern(_))
        ));
    }
}
