//! Turning shared posts into feedback patterns
//!
//! A shared result looks like:
//!
//! ```text
//! Wordle 210 4/6
//!
//! ⬜🟨⬜⬜⬜
//! 🟩⬜🟨⬜⬜
//! 🟩🟩⬜🟩⬜
//! 🟩🟩🟩🟩🟩
//! ```
//!
//! Every line made only of colored squares is one pattern.

use super::PuzzleId;
use crate::core::{Feedback, Pattern};
use serde::{Deserialize, Serialize};

const GREEN_SQUARE: char = '\u{1f7e9}';
const YELLOW_SQUARE: char = '\u{1f7e8}';
const BLACK_SQUARE: char = '\u{2b1b}';
const WHITE_SQUARE: char = '\u{2b1c}';

/// Emoji presentation selector some clients append to squares
const VARIATION_SELECTOR: char = '\u{fe0f}';

/// Raw post text and who posted it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub source: String,
    pub text: String,
}

impl Post {
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text: text.into(),
        }
    }
}

/// One observed pattern attributed to its source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvidenceUnit {
    pub pattern: Pattern,
    pub source: String,
}

/// Selects posts about one puzzle and extracts their patterns
#[derive(Debug, Clone)]
pub struct EvidenceFilter {
    title: String,
    markers: Vec<String>,
    word_len: usize,
}

impl EvidenceFilter {
    #[must_use]
    pub fn new(puzzle: PuzzleId, word_len: usize, wrong_variant_markers: &[String]) -> Self {
        Self {
            title: puzzle.title(),
            markers: wrong_variant_markers.to_vec(),
            word_len,
        }
    }

    /// Whether the text is a result for this puzzle from the expected game
    #[must_use]
    pub fn is_relevant(&self, text: &str) -> bool {
        mentions_title(text, &self.title) && !self.markers.iter().any(|m| text.contains(m.as_str()))
    }

    /// Patterns in a relevant post, in line order
    #[must_use]
    pub fn extract(&self, post: &Post) -> Vec<EvidenceUnit> {
        if !self.is_relevant(&post.text) {
            return Vec::new();
        }

        post.text
            .lines()
            .filter_map(|line| parse_pattern_line(line, self.word_len))
            .map(|pattern| EvidenceUnit {
                pattern,
                source: post.source.clone(),
            })
            .collect()
    }
}

/// `title` followed by something other than another digit
fn mentions_title(text: &str, title: &str) -> bool {
    text.match_indices(title).any(|(start, _)| {
        !text[start + title.len()..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit())
    })
}

fn square_feedback(ch: char) -> Option<Feedback> {
    match ch {
        GREEN_SQUARE => Some(Feedback::Exact),
        YELLOW_SQUARE => Some(Feedback::Present),
        BLACK_SQUARE | WHITE_SQUARE => Some(Feedback::Absent),
        _ => None,
    }
}

/// Parse a line of exactly `word_len` colored squares
#[must_use]
pub fn parse_pattern_line(line: &str, word_len: usize) -> Option<Pattern> {
    let marks = line
        .trim()
        .chars()
        .filter(|&c| c != VARIATION_SELECTOR)
        .map(square_feedback)
        .collect::<Option<Vec<_>>>()?;

    if marks.len() == word_len {
        Pattern::from_marks(&marks).ok()
    } else {
        None
    }
}
