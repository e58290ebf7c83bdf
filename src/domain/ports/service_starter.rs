//! ServiceStarter port - runtime dependencies of test suites
//!
//! Some suites expect a local Bigtable Emulator and/or the three pipeline
//! services to be up while they run. The orchestrator only decides *whether*
//! they are needed; how they are launched is up to the implementation.

use std::process::Child;

use crate::domain::entities::TestSuite;
use crate::domain::value_objects::Verbosity;
use crate::error::ConsoleResult;

/// Which dependencies to bring up for a suite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DependencyRequest {
    pub storage_emulator: bool,
    pub pipeline_processes: bool,
}

impl DependencyRequest {
    /// Dependencies declared by a suite
    pub fn for_suite(suite: &TestSuite) -> Self {
        Self {
            storage_emulator: suite.needs_storage_emulator,
            pipeline_processes: suite.needs_pipeline_processes,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.storage_emulator && !self.pipeline_processes
    }
}

/// Background processes that stay alive until the guard is dropped
#[derive(Debug, Default)]
pub struct ServiceGuard {
    processes: Vec<(String, Child)>,
}

impl ServiceGuard {
    /// A guard that owns nothing
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, child: Child) {
        self.processes.push((name.into(), child));
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Names of the processes held, in start order
    pub fn names(&self) -> Vec<&str> {
        self.processes.iter().map(|(name, _)| name.as_str()).collect()
    }
}

impl Drop for ServiceGuard {
    fn drop(&mut self) {
        // Stop in reverse start order: services before the emulator they use.
        while let Some((name, mut child)) = self.processes.pop() {
            if let Ok(None) = child.try_wait() {
                log::info!("Killing {}...", name);
                let _ = child.kill();
                let _ = child.wait();
            }
        }
    }
}

/// Starts the dependencies a suite needs
pub trait ServiceStarter {
    /// Bring up what `request` asks for. Dropping the returned guard stops it.
    fn start(&self, request: DependencyRequest, verbosity: Verbosity)
        -> ConsoleResult<ServiceGuard>;
}

impl<T: ServiceStarter + ?Sized> ServiceStarter for &T {
    fn start(
        &self,
        request: DependencyRequest,
        verbosity: Verbosity,
    ) -> ConsoleResult<ServiceGuard> {
        (**self).start(request, verbosity)
    }
}
