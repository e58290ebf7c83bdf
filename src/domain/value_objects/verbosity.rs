//! Verbosity value object
//!
//! The raw `--verbose` count is forwarded to child processes (`-v=N`,
//! `-sub_process_v=N`), while the console itself only distinguishes three
//! levels.

use log::LevelFilter;

/// Discrete verbosity level used for the console's own output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VerbosityLevel {
    /// Warnings and errors only
    Quiet,
    /// Informational messages
    Info,
    /// Everything, including every external command line
    Debug,
}

/// Number of times `--verbose` was given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Verbosity(u8);

impl Verbosity {
    pub fn new(count: u8) -> Self {
        Self(count)
    }

    /// The raw repetition count
    pub fn count(&self) -> u8 {
        self.0
    }

    pub fn level(&self) -> VerbosityLevel {
        match self.0 {
            0 => VerbosityLevel::Quiet,
            1 => VerbosityLevel::Info,
            _ => VerbosityLevel::Debug,
        }
    }

    /// Log filter for the console's logger
    pub fn log_filter(&self) -> LevelFilter {
        match self.level() {
            VerbosityLevel::Quiet => LevelFilter::Warn,
            VerbosityLevel::Info => LevelFilter::Info,
            VerbosityLevel::Debug => LevelFilter::Debug,
        }
    }

    /// Returns a verbosity at least `floor` high.
    ///
    /// The demo services are started with `-v=3` or more so their logs are
    /// readable when launched by hand.
    pub fn at_least(self, floor: u8) -> Self {
        Self(self.0.max(floor))
    }
}

impl std::fmt::Display for Verbosity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
