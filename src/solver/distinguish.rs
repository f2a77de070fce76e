//! Indistinguishable answer pairs
//!
//! Two answers can never be told apart when every bucket in the index holds
//! both or neither of them. Each answer gets a row of bits over the pattern
//! universe; a pair is indistinguishable exactly when its rows are equal.
//! Rows live in one contiguous arena and pairs are compared in parallel.

use crate::core::Word;
use crate::index::PatternIndex;
use crate::wordlists::WordList;
use indicatif::ProgressBar;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Bucket membership of each answer, one bit per pattern
struct MembershipArena {
    bits: Vec<u64>,
    blocks: usize,
}

impl MembershipArena {
    fn new(index: &PatternIndex, answers: &[Word]) -> Self {
        let patterns = index.patterns();
        let blocks = patterns.len().div_ceil(64);
        let mut bits = vec![0u64; answers.len() * blocks];

        let rows: FxHashMap<&Word, usize> = answers
            .iter()
            .enumerate()
            .map(|(row, word)| (word, row))
            .collect();

        for (column, pattern) in patterns.iter().enumerate() {
            let Some(bucket) = index.get(pattern) else {
                continue;
            };
            for word in bucket {
                if let Some(&row) = rows.get(word) {
                    bits[row * blocks + column / 64] |= 1 << (column % 64);
                }
            }
        }

        Self { bits, blocks }
    }

    #[inline]
    fn row(&self, row: usize) -> &[u64] {
        &self.bits[row * self.blocks..(row + 1) * self.blocks]
    }
}

/// Every unordered pair of distinct answers no pattern can separate
///
/// Pairs come back in corpus order: `(answers[i], answers[j])` with `i < j`.
#[must_use]
pub fn find_indistinguishable_pairs(index: &PatternIndex, answers: &WordList) -> Vec<(Word, Word)> {
    scan_pairs(index, answers, &ProgressBar::hidden())
}

/// [`find_indistinguishable_pairs`], advancing `pb` once per answer
#[must_use]
pub fn scan_pairs(index: &PatternIndex, answers: &WordList, pb: &ProgressBar) -> Vec<(Word, Word)> {
    let words = answers.words();
    let arena = MembershipArena::new(index, words);
    let n = words.len();

    let pairs: Vec<(usize, usize)> = (0..n)
        .into_par_iter()
        .flat_map_iter(|i| {
            let row = arena.row(i);
            let matches: Vec<(usize, usize)> = ((i + 1)..n)
                .filter(|&j| arena.row(j) == row)
                .map(|j| (i, j))
                .collect();
            pb.inc(1);
            matches
        })
        .collect();

    log::info!("{} indistinguishable pairs among {n} answers", pairs.len());
    pairs
        .into_iter()
        .map(|(i, j)| (words[i].clone(), words[j].clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pattern;
    use crate::index::IndexBuilder;
    use crate::solver::discriminate;
    use crate::wordlists::loader::words_from_slice;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn pattern(text: &str) -> Pattern {
        text.parse().unwrap()
    }

    #[test]
    fn finds_pairs_with_identical_membership() {
        let index = PatternIndex::from_buckets(
            3,
            [
                (pattern("X.."), vec![word("abc"), word("abd"), word("xyz")]),
                (pattern("XO."), vec![word("abc"), word("abd")]),
                (pattern("..."), vec![word("xyz")]),
            ],
        )
        .unwrap();
        let answers = words_from_slice(&["abc", "xyz", "abd"]).unwrap();

        let pairs = find_indistinguishable_pairs(&index, &answers);
        assert_eq!(pairs, [(word("abc"), word("abd"))]);
    }

    #[test]
    fn answers_missing_from_index_are_alike() {
        let index = PatternIndex::from_buckets(3, [(pattern("X.."), vec![word("abc")])]).unwrap();
        let answers = words_from_slice(&["abc", "qqq", "rrr"]).unwrap();

        let pairs = find_indistinguishable_pairs(&index, &answers);
        assert_eq!(pairs, [(word("qqq"), word("rrr"))]);
    }

    #[test]
    fn empty_index_makes_every_pair_indistinguishable() {
        let index = PatternIndex::empty(3);
        let answers = words_from_slice(&["abc", "abd", "abe"]).unwrap();
        assert_eq!(find_indistinguishable_pairs(&index, &answers).len(), 3);
    }

    #[test]
    fn agrees_with_discriminate_on_built_index() {
        let answers = words_from_slice(&[
            "wound", "mound", "pound", "found", "sound", "round", "bound", "hound",
        ])
        .unwrap();
        let guesses = words_from_slice(&[
            "wound", "mound", "pound", "found", "sound", "round", "bound", "hound", "mpfsh",
            "wrbxz",
        ])
        .unwrap();
        let index = IndexBuilder::new().build(&answers, &guesses).unwrap();

        let pairs = find_indistinguishable_pairs(&index, &answers);
        for (i, a) in answers.iter().enumerate() {
            for b in answers.words().iter().skip(i + 1) {
                let reported = pairs.contains(&(a.clone(), b.clone()));
                assert_eq!(reported, discriminate(&index, a, b).is_empty(), "{a} / {b}");
            }
        }
    }

    #[test]
    fn more_than_64_patterns() {
        // Force multiple bit blocks per row
        let mut buckets = Vec::new();
        let mut code = 0;
        for a in ['.', 'O', 'X'] {
            for b in ['.', 'O', 'X'] {
                for c in ['.', 'O', 'X'] {
                    for d in ['.', 'O', 'X'] {
                        let p = pattern(&format!("{a}{b}{c}{d}"));
                        // Only the last pattern separates the two words
                        let words = if code == 80 {
                            vec![word("abcd")]
                        } else {
                            vec![word("abcd"), word("abce")]
                        };
                        buckets.push((p, words));
                        code += 1;
                    }
                }
            }
        }
        let index = PatternIndex::from_buckets(4, buckets).unwrap();
        let answers = words_from_slice(&["abcd", "abce", "zzzz"]).unwrap();

        assert!(find_indistinguishable_pairs(&index, &answers).is_empty());
    }
}
