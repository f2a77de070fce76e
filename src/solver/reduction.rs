//! Narrowing candidates with observed patterns
//!
//! There are two entry points with different trust assumptions:
//! - [`reduce`] is for single patterns arriving from untrusted sources.
//!   A pattern missing from the index is ignored.
//! - [`reduce_all`] is for sequences the caller assembled from patterns it
//!   believes are indexed. A missing first pattern is reported as
//!   `Error::UnknownPattern`.

use super::CandidateSet;
use crate::core::{Pattern, Word};
use crate::error::{Error, Result};
use crate::index::PatternIndex;
use std::collections::BTreeSet;

/// Outcome of one pattern in [`reduce_all_traced`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReductionStep {
    pub pattern: Pattern,
    /// Whether the index has a bucket for the pattern
    pub indexed: bool,
    /// Candidates left after applying it
    pub remaining: usize,
}

/// Intersect `candidates` with the bucket for `pattern`
///
/// An unindexed pattern never narrows the set. The input is not modified.
#[must_use]
pub fn reduce(index: &PatternIndex, candidates: &CandidateSet, pattern: Pattern) -> CandidateSet {
    match index.get(&pattern) {
        Some(bucket) => candidates.intersect(bucket),
        None => {
            log::debug!("Pattern {pattern} is not indexed, ignoring");
            candidates.clone()
        }
    }
}

/// Apply `patterns` to `initial` in order
///
/// The result may be empty; callers must treat that as contradictory
/// evidence. An empty `patterns` returns `initial` unchanged.
///
/// # Errors
/// Returns `Error::UnknownPattern` if the first pattern has no bucket.
pub fn reduce_all(
    index: &PatternIndex,
    initial: &CandidateSet,
    patterns: &[Pattern],
) -> Result<CandidateSet> {
    reduce_all_traced(index, initial, patterns).map(|(candidates, _)| candidates)
}

/// [`reduce_all`], also returning the candidate count after each pattern
///
/// # Errors
/// Returns `Error::UnknownPattern` if the first pattern has no bucket.
pub fn reduce_all_traced(
    index: &PatternIndex,
    initial: &CandidateSet,
    patterns: &[Pattern],
) -> Result<(CandidateSet, Vec<ReductionStep>)> {
    if let Some(first) = patterns.first()
        && !index.contains_pattern(first)
    {
        return Err(Error::UnknownPattern(*first));
    }

    let mut candidates = initial.clone();
    let mut steps = Vec::with_capacity(patterns.len());
    for &pattern in patterns {
        candidates = reduce(index, &candidates, pattern);
        log::debug!("{pattern} {:4} remaining", candidates.len());
        steps.push(ReductionStep {
            pattern,
            indexed: index.contains_pattern(&pattern),
            remaining: candidates.len(),
        });
    }

    Ok((candidates, steps))
}

/// Patterns whose bucket holds exactly one of `a` and `b`
///
/// Only these patterns can ever tell the two words apart. An empty result
/// means no observable evidence separates them.
#[must_use]
pub fn discriminate(index: &PatternIndex, a: &Word, b: &Word) -> BTreeSet<Pattern> {
    index
        .iter()
        .filter(|(_, words)| words.contains(a) != words.contains(b))
        .map(|(&pattern, _)| pattern)
        .collect()
}
