//! Index analysis command
//!
//! Reports how many patterns the index holds and which buckets are largest.
//! Large buckets are patterns that say little about the answer.

use crate::core::Pattern;
use crate::index::PatternIndex;

/// Result of analyzing an index
pub struct AnalysisResult {
    pub pattern_count: usize,
    pub answer_count: usize,
    pub word_len: usize,
    /// The largest buckets, biggest first
    pub largest: Vec<(Pattern, usize)>,
}

/// Summarize `index`, keeping the `top` largest buckets
#[must_use]
pub fn analyze_index(index: &PatternIndex, top: usize) -> AnalysisResult {
    let mut largest = index.bucket_sizes();
    largest.truncate(top);

    AnalysisResult {
        pattern_count: index.len(),
        answer_count: index.answers().len(),
        word_len: index.word_len(),
        largest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn reports_counts_and_largest_buckets() {
        let word = |t: &str| Word::new(t).unwrap();
        let pattern = |t: &str| t.parse::<Pattern>().unwrap();
        let index = PatternIndex::from_buckets(
            3,
            [
                (pattern("..."), vec![word("abc"), word("abd"), word("xyz")]),
                (pattern("X.."), vec![word("abc")]),
                (pattern("XO."), vec![word("abc"), word("abd")]),
            ],
        )
        .unwrap();

        let result = analyze_index(&index, 2);
        assert_eq!(result.pattern_count, 3);
        assert_eq!(result.answer_count, 3);
        assert_eq!(result.word_len, 3);
        assert_eq!(result.largest, [(pattern("..."), 3), (pattern("XO."), 2)]);
    }
}
