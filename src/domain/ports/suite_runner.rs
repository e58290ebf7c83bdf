//! SuiteRunner port - executes every test in one suite directory

use crate::domain::entities::TestSuite;
use crate::domain::value_objects::Verbosity;
use crate::error::ConsoleResult;

/// Everything needed to run one suite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteInvocation {
    pub suite: &'static TestSuite,
    /// Suite-specific arguments passed to every test binary
    pub args: Vec<String>,
    pub verbosity: Verbosity,
}

/// Runs a suite and reports its exit status (0 = every test passed)
pub trait SuiteRunner {
    fn run_suite(&self, invocation: &SuiteInvocation) -> ConsoleResult<i32>;
}

impl<T: SuiteRunner + ?Sized> SuiteRunner for &T {
    fn run_suite(&self, invocation: &SuiteInvocation) -> ConsoleResult<i32> {
        (**self).run_suite(invocation)
    }
}
