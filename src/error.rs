//! Error types for cobaltb
//!
//! Uses `thiserror` for library errors; command handlers wrap these in
//! `anyhow` with context.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for console operations
pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Main error type for console operations
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Test filter keyword not in the catalog
    #[error("unknown test filter '{filter}' (valid: {valid})")]
    UnknownFilter { filter: String, valid: String },

    /// External tool ran but exited unsuccessfully
    #[error("'{program}' failed with exit code {code}")]
    CommandFailed { program: String, code: i32 },

    /// External tool was terminated by a signal
    #[error("'{program}' was terminated by signal {signal}")]
    CommandKilled { program: String, signal: i32 },

    /// External tool could not be launched at all
    #[error("failed to launch '{program}': {source}")]
    CommandSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// A file the operation depends on is not there
    #[error("required file not found: {path}")]
    MissingArtifact { path: PathBuf },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// File system operation failed
    #[error(transparent)]
    Fs(#[from] FsError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConsoleError {
    /// Exit code the process should terminate with for this error.
    ///
    /// A failing external tool propagates its own status; everything else is 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConsoleError::CommandFailed { code, .. } if *code != 0 => *code,
            ConsoleError::CommandKilled { signal, .. } => 128 + signal,
            _ => 1,
        }
    }
}
