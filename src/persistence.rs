//! JSON files on disk
//!
//! Writes go to a temporary file in the destination directory which is then
//! renamed over the target, so readers never observe a half-written file.

use crate::error::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Serialize `value` as JSON and atomically replace `path`
///
/// # Errors
/// Returns an I/O or serialization error; the target is untouched on failure.
pub fn save_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let mut temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file_mut());
        serde_json::to_writer(&mut writer, value)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Read a JSON document from `path`
///
/// # Errors
/// Returns an I/O error if the file cannot be opened and a serialization
/// error if it does not hold a valid `T`.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}
