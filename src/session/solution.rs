//! Resolved puzzles

use super::PuzzleId;
use crate::core::Word;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The deduced answer and everyone whose results narrowed it down
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub puzzle: PuzzleId,
    pub word: Word,
    pub contributors: BTreeSet<String>,
}

impl Solution {
    /// Public message crediting contributors, at most `limit` characters
    ///
    /// Contributors are dropped from the end of the list until it fits.
    #[must_use]
    pub fn announcement(&self, limit: usize) -> String {
        let mut handles: Vec<String> = self.contributors.iter().map(|c| format!("@{c}")).collect();
        loop {
            let message = self.compose(&handles);
            if handles.is_empty() || message.chars().count() <= limit {
                return message;
            }
            handles.pop();
        }
    }

    fn compose(&self, handles: &[String]) -> String {
        let answer = self.word.text().to_uppercase();
        if handles.is_empty() {
            format!("The answer to Wordle {} is: {answer}.", self.puzzle)
        } else {
            format!(
                "Based on the solutions posted by {}, the answer to Wordle {} is: {answer}. Thanks all!",
                handles.join(", "),
                self.puzzle
            )
        }
    }
}
