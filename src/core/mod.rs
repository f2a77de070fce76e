//! Core domain types
//!
//! Words and feedback patterns. Everything here is pure and has no I/O.

mod pattern;
mod word;

pub use pattern::{Feedback, Pattern};
pub use word::{MAX_WORD_LEN, Word};
