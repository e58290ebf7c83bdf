//! Clean Use Case
//!
//! Deletes build output, optionally keeping the generated build system.

use std::path::Path;

use crate::domain::ports::FileSystem;

use super::options::CleanOptions;
use super::result::CleanResult;

/// Clean use case - removes the contents of the output directory
pub struct CleanUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
}

impl<FS> CleanUseCase<FS>
where
    FS: FileSystem,
{
    /// Create a new clean use case
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Clean `out_dir`. A missing directory is not an error.
    pub fn execute(&self, out_dir: &Path, options: &CleanOptions) -> CleanResult {
        let mut result = CleanResult::new();

        if !self.fs.exists(out_dir) {
            result.nothing_to_clean = true;
            return result;
        }

        if options.full {
            match self.fs.remove_dir_all(out_dir) {
                Ok(()) => result.add_deleted(out_dir.to_path_buf()),
                Err(e) => result.add_error(format!("Failed to delete {}: {}", out_dir.display(), e)),
            }
            return result;
        }

        let entries = match self.fs.list_dir(out_dir) {
            Ok(entries) => entries,
            Err(e) => {
                result.add_error(format!("Failed to read {}: {}", out_dir.display(), e));
                return result;
            }
        };

        for path in entries {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            if options.preserves(&name) {
                result.add_preserved(path);
                continue;
            }

            let removed = if self.fs.is_dir(&path) {
                self.fs.remove_dir_all(&path)
            } else {
                self.fs.remove_file(&path)
            };
            match removed {
                Ok(()) => {
                    log::debug!("Deleted {}", path.display());
                    result.add_deleted(path);
                }
                Err(e) => result.add_error(format!("Failed to delete {}: {}", path.display(), e)),
            }
        }

        result
    }
}
