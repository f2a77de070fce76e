//! Library error type
//!
//! Every fallible operation in the library returns [`Result`]. The binary
//! wraps these in `anyhow` at the command boundary.

use crate::core::Pattern;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for deduction operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building indices or deducing answers
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid word '{word}': {reason}")]
    InvalidWord { word: String, reason: &'static str },

    #[error("word length mismatch: expected {expected} letters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("invalid pattern '{0}'")]
    InvalidPattern(String),

    /// A pattern the caller assumed was indexed has no bucket
    #[error("pattern {0} is not in the index")]
    UnknownPattern(Pattern),

    #[error("{}:{line}: {source}", path.display())]
    MalformedCorpus {
        path: PathBuf,
        line: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("corpus is empty")]
    EmptyCorpus,

    #[error("corrupt index: {0}")]
    CorruptIndex(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
