//! Clean result types

use std::path::PathBuf;

/// Result of a clean operation
#[derive(Debug, Clone, Default)]
pub struct CleanResult {
    /// Entries that were removed
    pub deleted: Vec<PathBuf>,
    /// Entries left in place by a partial clean
    pub preserved: Vec<PathBuf>,
    /// Errors that occurred
    pub errors: Vec<String>,
    /// The output directory did not exist
    pub nothing_to_clean: bool,
}

impl CleanResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a deleted entry
    pub fn add_deleted(&mut self, path: PathBuf) {
        self.deleted.push(path);
    }

    /// Add a preserved entry
    pub fn add_preserved(&mut self, path: PathBuf) {
        self.preserved.push(path);
    }

    /// Add an error
    pub fn add_error(&mut self, error: String) {
        self.errors.push(error);
    }

    /// Check if operation was successful
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}
