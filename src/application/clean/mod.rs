//! Clean Use Case
//!
//! Removes build output.
//!
//! This module handles:
//! - Partial clean: everything under `out/` except the build system's own state
//! - Full clean: the whole `out/` directory

mod options;
mod result;
mod use_case;

pub use options::{CleanOptions, PRESERVED_ENTRIES};
pub use result::CleanResult;
pub use use_case::CleanUseCase;
