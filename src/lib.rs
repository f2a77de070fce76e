//! Wordle Deducer
//!
//! Deduces the daily Wordle answer from the colored feedback patterns players
//! share, without ever seeing their guesses.
//!
//! An index maps every pattern to the answers that can produce it from some
//! guess. Each shared pattern intersects the candidate answers with its
//! bucket until a single answer is left.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_deducer::core::{Pattern, Word};
//!
//! let guess = Word::new("crane").unwrap();
//! let answer = Word::new("slate").unwrap();
//!
//! let pattern = Pattern::calculate(&guess, &answer);
//! assert_eq!(pattern.to_string(), "..X.X");
//! ```

// Core domain types
pub mod core;

// Errors shared by the library
pub mod error;

// Word lists
pub mod wordlists;

// Pattern index
pub mod index;

// Candidate reduction and pair analysis
pub mod solver;

// Streaming deduction sessions
pub mod session;

// Session configuration
pub mod config;

// Atomic JSON files
pub mod persistence;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{Error, Result};
