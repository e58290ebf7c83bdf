//! Resolved on-disk layout of a source checkout

use std::path::{Path, PathBuf};

use super::types::Config;

/// Absolute locations of the source root, build output and sysroot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    out_dir: PathBuf,
    sysroot_dir: PathBuf,
}

impl ProjectLayout {
    /// Resolve the configured directories against `root`
    pub fn new(root: &Path, config: &Config) -> Self {
        let root = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
        Self {
            out_dir: root.join(&config.paths.out_dir),
            sysroot_dir: root.join(&config.paths.sysroot_dir),
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Path under the source root
    pub fn source(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    /// Path under the build output directory
    pub fn out(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.out_dir.join(relative)
    }

    /// Path under the sysroot
    pub fn sysroot(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.sysroot_dir.join(relative)
    }
}
