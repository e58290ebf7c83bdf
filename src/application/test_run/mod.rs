//! Test Run Module
//!
//! Runs a resolved list of test suites, bringing up each suite's runtime
//! dependencies around it and aggregating the outcome.
//!
//! ## Structure
//!
//! - `options` - Suite arguments and verbosity (`TestOptions`)
//! - `result` - Per-suite outcomes and the aggregate (`RunResult`)
//! - `use_case` - The suite loop (`TestOrchestrator`)
//!
//! ## Usage
//!
//! ```ignore
//! use cobaltb::application::test_run::{TestOptions, TestOrchestrator};
//!
//! let orchestrator = TestOrchestrator::new(starter, runner, events);
//! let result = orchestrator.run(&suites, &options);
//! ```

mod options;
mod result;
mod use_case;

pub use options::{CloudBtArgs, E2eContext, TestOptions, CLOUD_BT_INSTANCE_REQUIRED};
pub use result::{RunResult, SuiteOutcome, SuiteStatus};
pub use use_case::TestOrchestrator;

#[cfg(test)]
mod tests;
