//! Test run result types

use crate::domain::entities::SuiteId;

/// How a single suite ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuiteStatus {
    /// Every test in the suite exited 0
    Passed,
    /// The suite ran and reported a nonzero status
    Failed { code: i32 },
    /// The suite or its dependencies could not be started
    Errored { message: String },
    /// A required argument was missing; the suite was never invoked
    Misconfigured { reason: String },
}

impl SuiteStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, SuiteStatus::Passed)
    }
}

/// Outcome of one attempted suite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteOutcome {
    pub suite: SuiteId,
    pub status: SuiteStatus,
}

impl SuiteOutcome {
    pub fn new(suite: SuiteId, status: SuiteStatus) -> Self {
        Self { suite, status }
    }
}

/// Result of a test run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunResult {
    /// Attempted suites in run order
    pub outcomes: Vec<SuiteOutcome>,
}

impl RunResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, suite: SuiteId, status: SuiteStatus) {
        self.outcomes.push(SuiteOutcome::new(suite, status));
    }

    /// True iff every attempted suite passed
    pub fn success(&self) -> bool {
        self.outcomes.iter().all(|o| o.status.is_success())
    }

    /// Suites that did not pass
    pub fn failed(&self) -> impl Iterator<Item = &SuiteOutcome> {
        self.outcomes.iter().filter(|o| !o.status.is_success())
    }

    /// Process exit code for the run
    pub fn exit_code(&self) -> i32 {
        if self.success() {
            0
        } else {
            1
        }
    }
}
