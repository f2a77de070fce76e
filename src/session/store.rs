//! Remembering solved puzzles
//!
//! The store is an explicit handle passed to whoever needs it; there is no
//! global state. [`JsonFileStore`] is opened and closed explicitly and
//! writes every change through to disk.

use super::{PuzzleId, Solution};
use crate::error::Result;
use crate::persistence::{load_json, save_json};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Key-value store of solutions by puzzle
pub trait SolutionStore {
    /// # Errors
    /// Returns an error if the backing storage cannot be read.
    fn get(&self, puzzle: PuzzleId) -> Result<Option<Solution>>;

    /// # Errors
    /// Returns an error if the backing storage cannot be written.
    fn put(&mut self, solution: Solution) -> Result<()>;
}

/// In-memory store for tests and dry runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    solutions: BTreeMap<PuzzleId, Solution>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SolutionStore for MemoryStore {
    fn get(&self, puzzle: PuzzleId) -> Result<Option<Solution>> {
        Ok(self.solutions.get(&puzzle).cloned())
    }

    fn put(&mut self, solution: Solution) -> Result<()> {
        self.solutions.insert(solution.puzzle, solution);
        Ok(())
    }
}

/// Solutions kept in a JSON file keyed by puzzle number
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    solutions: BTreeMap<PuzzleId, Solution>,
    dirty: bool,
}

impl JsonFileStore {
    /// Open the store at `path`, starting empty if the file does not exist
    ///
    /// # Errors
    /// Returns an error if an existing file cannot be read or parsed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let solutions = if path.exists() {
            load_json(&path)?
        } else {
            BTreeMap::new()
        };
        log::debug!("Opened {} with {} solutions", path.display(), solutions.len());

        Ok(Self {
            path,
            solutions,
            dirty: false,
        })
    }

    /// Write any unsaved changes and release the store
    ///
    /// # Errors
    /// Returns an error if pending changes cannot be written.
    pub fn close(mut self) -> Result<()> {
        self.flush()
    }

    fn flush(&mut self) -> Result<()> {
        if self.dirty {
            save_json(&self.solutions, &self.path)?;
            self.dirty = false;
        }
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }
}

impl SolutionStore for JsonFileStore {
    fn get(&self, puzzle: PuzzleId) -> Result<Option<Solution>> {
        Ok(self.solutions.get(&puzzle).cloned())
    }

    fn put(&mut self, solution: Solution) -> Result<()> {
        self.solutions.insert(solution.puzzle, solution);
        self.dirty = true;
        self.flush()
    }
}

impl Drop for JsonFileStore {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            log::warn!("Failed to save {}: {e}", self.path.display());
        }
    }
}
