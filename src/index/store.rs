//! Index persistence
//!
//! On-disk form:
//!
//! ```json
//! {"word_len":5,"patterns":{"..X.X":["slate", ...], ...}}
//! ```
//!
//! Keys and bucket entries are sorted, so building twice from the same
//! corpora produces byte-identical files.

use super::PatternIndex;
use crate::core::{MAX_WORD_LEN, Pattern, Word};
use crate::error::{Error, Result};
use crate::persistence::{load_json, save_json};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Serialize, Deserialize)]
struct IndexFile {
    word_len: usize,
    patterns: BTreeMap<String, Vec<Word>>,
}

impl From<&PatternIndex> for IndexFile {
    fn from(index: &PatternIndex) -> Self {
        let patterns = index
            .iter()
            .map(|(pattern, words)| {
                let mut words: Vec<Word> = words.iter().cloned().collect();
                words.sort_unstable();
                (pattern.to_string(), words)
            })
            .collect();

        Self {
            word_len: index.word_len(),
            patterns,
        }
    }
}

impl TryFrom<IndexFile> for PatternIndex {
    type Error = Error;

    fn try_from(file: IndexFile) -> Result<Self> {
        if !(1..=MAX_WORD_LEN).contains(&file.word_len) {
            return Err(Error::CorruptIndex(format!(
                "word length {} is outside 1..={MAX_WORD_LEN}",
                file.word_len
            )));
        }

        let buckets = file
            .patterns
            .into_iter()
            .map(|(key, words)| {
                let pattern: Pattern = key
                    .parse()
                    .map_err(|_| Error::CorruptIndex(format!("bad pattern key '{key}'")))?;
                Ok((pattern, words))
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_buckets(file.word_len, buckets)
    }
}

/// Write `index` to `path`, replacing any existing file atomically
///
/// # Errors
/// Returns an I/O or serialization error.
pub fn save_index(index: &PatternIndex, path: &Path) -> Result<()> {
    save_json(&IndexFile::from(index), path)?;
    log::info!("Saved {} patterns to {}", index.len(), path.display());
    Ok(())
}

/// Read an index previously written by [`save_index`]
///
/// # Errors
/// Returns an I/O error, a serialization error for malformed JSON or words,
/// or `Error::CorruptIndex` for keys or entries of the wrong length.
pub fn load_index(path: &Path) -> Result<PatternIndex> {
    let file: IndexFile = load_json(path)?;
    let index = PatternIndex::try_from(file)?;
    log::debug!("Loaded {} patterns from {}", index.len(), path.display());
    Ok(index)
}
