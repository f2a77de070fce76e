//! Indistinguishable pairs command
//!
//! Lists answer pairs that no shared result could ever tell apart.

use crate::core::Word;
use crate::index::PatternIndex;
use crate::output::formatters::styled_progress_bar;
use crate::solver::scan_pairs;
use crate::wordlists::WordList;
use indicatif::ProgressBar;
use std::time::{Duration, Instant};

/// Result of scanning all answer pairs
pub struct ImpossibleResult {
    pub answers: usize,
    pub pairs: Vec<(Word, Word)>,
    pub duration: Duration,
}

/// Scan every pair of `answers` against `index`
#[must_use]
pub fn find_impossible(index: &PatternIndex, answers: &WordList, progress: bool) -> ImpossibleResult {
    let start = Instant::now();
    let pb = if progress {
        styled_progress_bar(answers.len() as u64, "Comparing")
    } else {
        ProgressBar::hidden()
    };

    let pairs = scan_pairs(index, answers, &pb);
    pb.finish_with_message("Complete!");

    ImpossibleResult {
        answers: answers.len(),
        pairs,
        duration: start.elapsed(),
    }
}
