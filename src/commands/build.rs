//! Index build command
//!
//! Loads both corpora, builds the pattern index and writes it to disk.

use crate::error::Result;
use crate::index::{IndexBuilder, save_index};
use crate::wordlists::loader::load_from_file;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Configuration for building an index
pub struct BuildConfig {
    pub answers: PathBuf,
    pub guesses: PathBuf,
    pub output: PathBuf,
    pub chunk_size: usize,
    pub progress: bool,
}

/// Summary of a finished build
pub struct BuildResult {
    pub answers: usize,
    pub guesses: usize,
    pub word_len: usize,
    pub patterns: usize,
    pub output: PathBuf,
    pub duration: Duration,
}

/// Build and persist the index described by `config`
///
/// # Errors
///
/// Returns an error if either corpus is missing or malformed, the corpora
/// have different word lengths, or the index cannot be written.
pub fn run_build(config: &BuildConfig) -> Result<BuildResult> {
    let start = Instant::now();

    let answers = load_from_file(&config.answers)?;
    let guesses = load_from_file(&config.guesses)?;

    let index = IndexBuilder::new()
        .chunk_size(config.chunk_size)
        .with_progress(config.progress)
        .build(&answers, &guesses)?;
    save_index(&index, &config.output)?;

    Ok(BuildResult {
        answers: answers.len(),
        guesses: guesses.len(),
        word_len: index.word_len(),
        patterns: index.len(),
        output: config.output.clone(),
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::load_index;
    use std::fs;

    #[test]
    fn builds_and_writes_index() {
        let dir = tempfile::tempdir().unwrap();
        let answers = dir.path().join("answers.txt");
        let guesses = dir.path().join("guesses.txt");
        fs::write(&answers, "crane\nslate\n").unwrap();
        fs::write(&guesses, "crane\nslate\nirate\nLLAMA\n").unwrap();

        let config = BuildConfig {
            answers,
            guesses,
            output: dir.path().join("out").join("index.json"),
            chunk_size: 1,
            progress: false,
        };
        let result = run_build(&config).unwrap();

        assert_eq!(result.answers, 2);
        assert_eq!(result.guesses, 4);
        assert_eq!(result.word_len, 5);

        let index = load_index(&config.output).unwrap();
        assert_eq!(index.len(), result.patterns);
    }

    #[test]
    fn malformed_corpus_fails() {
        let dir = tempfile::tempdir().unwrap();
        let answers = dir.path().join("answers.txt");
        let guesses = dir.path().join("guesses.txt");
        fs::write(&answers, "crane\nsl8te\n").unwrap();
        fs::write(&guesses, "crane\n").unwrap();

        let config = BuildConfig {
            answers,
            guesses,
            output: dir.path().join("index.json"),
            chunk_size: 1,
            progress: false,
        };
        assert!(run_build(&config).is_err());
        assert!(!config.output.exists());
    }
}
