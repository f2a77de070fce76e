//! Streaming deduction command
//!
//! Looks up the puzzle in the solution store, and otherwise runs a session
//! against the feed. A resolved answer is stored unless this is a dry run.

use crate::config::DeductionConfig;
use crate::core::Word;
use crate::error::Result;
use crate::index::PatternIndex;
use crate::session::{
    CancelToken, DeductionSession, EvidenceFeed, EvidenceUnit, ExhaustReason, PuzzleId,
    SessionState, Solution, SolutionStore,
};
use crate::wordlists::WordList;
use std::time::{Duration, Instant};

/// How a deduction ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeduceOutcome {
    /// The store already had an answer; the feed was not consulted
    AlreadySolved(Solution),
    Resolved(Solution),
    /// No unique answer; `remaining` lists what was left
    Exhausted {
        reason: ExhaustReason,
        remaining: Vec<Word>,
    },
}

/// Result of a deduction run
pub struct DeduceReport {
    pub puzzle: PuzzleId,
    pub outcome: DeduceOutcome,
    pub useful: Vec<EvidenceUnit>,
    pub announcement: Option<String>,
    pub stored: bool,
    pub duration: Duration,
}

/// Deduce the answer to `puzzle`
///
/// # Errors
///
/// Returns an error if the store cannot be read or written.
pub fn run_deduce<F, S>(
    index: &PatternIndex,
    answers: &WordList,
    puzzle: PuzzleId,
    feed: &mut F,
    store: &mut S,
    config: &DeductionConfig,
    dry_run: bool,
) -> Result<DeduceReport>
where
    F: EvidenceFeed + ?Sized,
    S: SolutionStore + ?Sized,
{
    let start = Instant::now();

    if let Some(solution) = store.get(puzzle)? {
        log::info!("Puzzle {puzzle} already solved: {}", solution.word);
        return Ok(DeduceReport {
            puzzle,
            announcement: Some(solution.announcement(config.announcement_limit)),
            outcome: DeduceOutcome::AlreadySolved(solution),
            useful: Vec::new(),
            stored: false,
            duration: start.elapsed(),
        });
    }

    let mut session = DeductionSession::new(index, answers, puzzle);
    let cancel = CancelToken::new();
    let solution = session.run(feed, config, &cancel);
    let useful = session.useful_evidence().to_vec();

    let (outcome, announcement, stored) = match solution {
        Some(solution) => {
            let announcement = solution.announcement(config.announcement_limit);
            let stored = !dry_run;
            if stored {
                store.put(solution.clone())?;
            }
            (DeduceOutcome::Resolved(solution), Some(announcement), stored)
        }
        None => {
            let reason = match session.state() {
                SessionState::Exhausted(reason) => reason,
                _ => ExhaustReason::PageBudget,
            };
            let remaining = session.candidates().sorted().into_iter().cloned().collect();
            (DeduceOutcome::Exhausted { reason, remaining }, None, false)
        }
    };

    Ok(DeduceReport {
        puzzle,
        outcome,
        useful,
        announcement,
        stored,
        duration: start.elapsed(),
    })
}
