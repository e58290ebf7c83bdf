//! Test Orchestrator
//!
//! Runs each selected suite in order:
//! 1. Check suite-specific preconditions
//! 2. Start the dependencies the suite declares
//! 3. Invoke the suite runner with the suite's arguments
//! 4. Tear the dependencies down and record the outcome
//!
//! A failing suite never stops the loop. A suite that is missing required
//! configuration does.

use crate::domain::entities::SuiteId;
use crate::domain::ports::{
    ConsoleEvent, DependencyRequest, EventSink, ServiceStarter, SuiteInvocation, SuiteRunner,
};

use super::options::{TestOptions, CLOUD_BT_INSTANCE_REQUIRED};
use super::result::{RunResult, SuiteStatus};

/// Test orchestrator - the suite loop behind `cobaltb test`
pub struct TestOrchestrator<S, R, E>
where
    S: ServiceStarter,
    R: SuiteRunner,
    E: EventSink,
{
    starter: S,
    runner: R,
    events: E,
}

impl<S, R, E> TestOrchestrator<S, R, E>
where
    S: ServiceStarter,
    R: SuiteRunner,
    E: EventSink,
{
    pub fn new(starter: S, runner: R, events: E) -> Self {
        Self {
            starter,
            runner,
            events,
        }
    }

    /// Run `suites` in the given order
    pub fn run(&self, suites: &[SuiteId], options: &TestOptions) -> RunResult {
        let mut result = RunResult::new();
        self.events.on_event(ConsoleEvent::TestsPlanned {
            suites: suites.to_vec(),
        });

        for &suite in suites {
            if suite == SuiteId::GtestsCloudBt && !options.cloud_bt.is_complete() {
                self.events.on_event(ConsoleEvent::SuiteMisconfigured {
                    suite,
                    message: CLOUD_BT_INSTANCE_REQUIRED.to_string(),
                });
                result.record(
                    suite,
                    SuiteStatus::Misconfigured {
                        reason: CLOUD_BT_INSTANCE_REQUIRED.to_string(),
                    },
                );
                break;
            }

            self.events.on_event(ConsoleEvent::SuiteStarted { suite });
            let status = self.run_one(suite, options);
            self.events.on_event(ConsoleEvent::SuiteFinished {
                suite,
                passed: status.is_success(),
            });
            result.record(suite, status);
        }

        self.events.on_event(ConsoleEvent::TestsFinished {
            passed: result.success(),
        });
        result
    }

    fn run_one(&self, suite: SuiteId, options: &TestOptions) -> SuiteStatus {
        let request = DependencyRequest::for_suite(suite.suite());

        // Held until the suite returns; dropping it stops the services.
        let _guard = if request.is_empty() {
            None
        } else {
            match self.starter.start(request, options.verbosity) {
                Ok(guard) => Some(guard),
                Err(e) => {
                    log::error!("Could not start dependencies for {}: {}", suite, e);
                    return SuiteStatus::Errored {
                        message: e.to_string(),
                    };
                }
            }
        };

        let invocation = SuiteInvocation {
            suite: suite.suite(),
            args: options.suite_args(suite),
            verbosity: options.verbosity,
        };

        match self.runner.run_suite(&invocation) {
            Ok(0) => SuiteStatus::Passed,
            Ok(code) => SuiteStatus::Failed { code },
            Err(e) => {
                log::error!("{} could not be run: {}", suite, e);
                SuiteStatus::Errored {
                    message: e.to_string(),
                }
            }
        }
    }
}
