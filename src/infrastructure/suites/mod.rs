//! Test suite execution
//!
//! Implements the SuiteRunner port over the build output directory.

mod directory;

pub use directory::DirectorySuiteRunner;
