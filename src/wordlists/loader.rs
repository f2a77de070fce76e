//! Word list loading utilities
//!
//! Corpora are newline-delimited files. Unlike a casual word list, a corpus
//! entry that fails validation is fatal: it means the file is corrupt.

use super::WordList;
use crate::core::Word;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Load a corpus from a file
///
/// Blank lines and surrounding whitespace are ignored.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, `Error::MalformedCorpus`
/// naming the offending line if an entry is invalid or has a different
/// length than the first entry, and `Error::EmptyCorpus` if the file holds
/// no words.
///
/// # Examples
/// ```no_run
/// use wordle_deducer::wordlists::loader::load_from_file;
///
/// let answers = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", answers.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_lines(&content).map_err(|(line, source)| Error::MalformedCorpus {
        path: path.to_path_buf(),
        line,
        source: Box::new(source),
    })?;
    WordList::new(words)
}

/// Parse newline-delimited corpus text
///
/// On failure, returns the 1-based line number and the cause.
fn parse_lines(content: &str) -> std::result::Result<Vec<Word>, (usize, Error)> {
    let mut words = Vec::new();
    let mut word_len = None;

    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let word = Word::new(trimmed).map_err(|e| (idx + 1, e))?;
        let expected = *word_len.get_or_insert(word.len());
        if word.len() != expected {
            return Err((
                idx + 1,
                Error::LengthMismatch {
                    expected,
                    actual: word.len(),
                },
            ));
        }
        words.push(word);
    }

    Ok(words)
}

/// Convert string slices to a word list
///
/// # Errors
///
/// Same validation as [`load_from_file`], without file context.
///
/// # Examples
/// ```
/// use wordle_deducer::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "slate"]).unwrap();
/// assert_eq!(words.len(), 2);
/// ```
pub fn words_from_slice(slice: &[&str]) -> Result<WordList> {
    let words = slice
        .iter()
        .map(|&s| Word::new(s))
        .collect::<Result<Vec<_>>>()?;
    WordList::new(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "SLATE", "irate"]).unwrap();

        assert_eq!(words.len(), 3);
        assert_eq!(words.word_len(), 5);
        assert_eq!(words.words()[1].text(), "slate");
    }

    #[test]
    fn words_from_slice_rejects_invalid() {
        assert!(words_from_slice(&["crane", "cr4ne"]).is_err());
        assert!(matches!(
            words_from_slice(&["crane", "toolong"]),
            Err(Error::LengthMismatch { .. })
        ));
        assert!(matches!(words_from_slice(&[]), Err(Error::EmptyCorpus)));
    }

    #[test]
    fn parse_skips_blank_lines_and_whitespace() {
        let words = parse_lines("crane\n\n  slate  \r\nirate\n").unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate", "irate"]);
    }

    #[test]
    fn parse_reports_line_of_bad_entry() {
        let (line, err) = parse_lines("crane\n\nslate\nshy\n").unwrap_err();
        assert_eq!(line, 4);
        assert!(matches!(err, Error::LengthMismatch { expected: 5, actual: 3 }));
    }

    #[test]
    fn load_from_file_names_path_and_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "crane\nsl@te").unwrap();

        let err = load_from_file(file.path()).unwrap_err();
        match err {
            Error::MalformedCorpus { line, path, .. } => {
                assert_eq!(line, 2);
                assert_eq!(path, file.path());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn load_from_file_reads_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "crane\nslate\ncrane").unwrap();

        let list = load_from_file(file.path()).unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn load_from_file_rejects_empty() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(matches!(load_from_file(file.path()), Err(Error::EmptyCorpus)));
    }
}
