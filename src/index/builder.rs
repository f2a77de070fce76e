//! Offline index construction
//!
//! Scores every allowed guess against every answer. This is the dominant
//! cost of the whole system (|answers| × |guesses| scoring calls), so the
//! answers are split into chunks that build partial indices in parallel;
//! partial indices are then merged by per-pattern set union.

use super::PatternIndex;
use crate::core::{Pattern, Word};
use crate::error::{Error, Result};
use crate::output::formatters::styled_progress_bar;
use crate::wordlists::WordList;
use indicatif::ProgressBar;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Configuration for building a [`PatternIndex`]
#[derive(Debug, Clone, Copy)]
pub struct IndexBuilder {
    chunk_size: usize,
    progress: bool,
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            chunk_size: 64,
            progress: false,
        }
    }

    /// Answers per parallel work unit (at least 1)
    #[must_use]
    pub const fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = if chunk_size == 0 { 1 } else { chunk_size };
        self
    }

    /// Show a progress bar on stderr while building
    #[must_use]
    pub const fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Build the index for the given corpora
    ///
    /// A guess equal to the answer is skipped; otherwise every answer would
    /// land in the all-Exact bucket and that pattern would say nothing.
    ///
    /// # Errors
    /// Returns `Error::LengthMismatch` if the corpora have different word
    /// lengths.
    pub fn build(&self, answers: &WordList, guesses: &WordList) -> Result<PatternIndex> {
        check_lengths(answers, guesses)?;
        let word_len = answers.word_len();

        let pb = self.progress_bar(answers.len());
        log::info!(
            "Scoring {} answers against {} guesses",
            answers.len(),
            guesses.len()
        );

        let index = answers
            .words()
            .par_chunks(self.chunk_size)
            .map(|chunk| {
                let mut partial = PatternIndex::empty(word_len);
                for answer in chunk {
                    for pattern in producible_patterns(answer, guesses) {
                        partial.insert(pattern, answer.clone());
                    }
                    pb.inc(1);
                }
                partial
            })
            .reduce(|| PatternIndex::empty(word_len), PatternIndex::merge);

        pb.finish_with_message("Complete!");
        log::info!("Index holds {} distinct patterns", index.len());
        Ok(index)
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.progress {
            return ProgressBar::hidden();
        }

        styled_progress_bar(len as u64, "Scoring")
    }
}

/// Single-threaded build; always equal to [`IndexBuilder::build`]
///
/// # Errors
/// Returns `Error::LengthMismatch` if the corpora have different word
/// lengths.
pub fn build_sequential(answers: &WordList, guesses: &WordList) -> Result<PatternIndex> {
    check_lengths(answers, guesses)?;

    let mut index = PatternIndex::empty(answers.word_len());
    for answer in answers {
        for guess in guesses {
            if guess != answer {
                index.insert(Pattern::calculate(guess, answer), answer.clone());
            }
        }
    }
    Ok(index)
}

fn check_lengths(answers: &WordList, guesses: &WordList) -> Result<()> {
    if answers.word_len() == guesses.word_len() {
        Ok(())
    } else {
        Err(Error::LengthMismatch {
            expected: answers.word_len(),
            actual: guesses.word_len(),
        })
    }
}

/// Every pattern some other guess produces against `answer`
fn producible_patterns(answer: &Word, guesses: &WordList) -> FxHashSet<Pattern> {
    guesses
        .iter()
        .filter(|&guess| guess != answer)
        .map(|guess| Pattern::calculate(guess, answer))
        .collect()
}
