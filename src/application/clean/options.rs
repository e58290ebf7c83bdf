//! Clean options

/// Entries of the output directory a partial clean leaves in place.
///
/// These hold the generated build system, so a partial clean does not force
/// the next build to reconfigure from scratch.
pub const PRESERVED_ENTRIES: [&str; 8] = [
    "CMakeFiles",
    "third_party",
    ".ninja_deps",
    ".ninja_log",
    "CMakeCache.txt",
    "build.ninja",
    "cmake_install.cmake",
    "rules.ninja",
];

/// Options for the clean command
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    /// Remove the output directory itself, build system state included
    pub full: bool,
}

impl CleanOptions {
    /// Create new clean options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set full
    pub fn with_full(mut self, full: bool) -> Self {
        self.full = full;
        self
    }

    /// Whether a partial clean keeps this entry
    pub fn preserves(&self, name: &str) -> bool {
        !self.full && PRESERVED_ENTRIES.contains(&name)
    }
}
