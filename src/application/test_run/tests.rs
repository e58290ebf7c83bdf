//! Test Orchestrator Tests

use super::*;
use crate::config::PortsConfig;
use crate::domain::entities::SuiteId;
use crate::domain::ports::{
    ConsoleEvent, DependencyRequest, EventSink, NoopEventSink, ServiceGuard, ServiceStarter,
    SuiteInvocation, SuiteRunner,
};
use crate::domain::value_objects::Verbosity;
use crate::error::{ConsoleError, ConsoleResult};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

// Mock implementations for testing

/// Returns scripted exit codes and records every invocation
#[derive(Default)]
struct ScriptedSuiteRunner {
    codes: HashMap<SuiteId, i32>,
    missing: Vec<SuiteId>,
    calls: RefCell<Vec<SuiteInvocation>>,
}

impl ScriptedSuiteRunner {
    fn with_code(mut self, suite: SuiteId, code: i32) -> Self {
        self.codes.insert(suite, code);
        self
    }

    fn with_missing(mut self, suite: SuiteId) -> Self {
        self.missing.push(suite);
        self
    }

    fn called(&self) -> Vec<SuiteId> {
        self.calls.borrow().iter().map(|i| i.suite.id).collect()
    }

    fn args_for(&self, suite: SuiteId) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .find(|i| i.suite.id == suite)
            .map(|i| i.args.clone())
            .unwrap_or_default()
    }
}

impl SuiteRunner for ScriptedSuiteRunner {
    fn run_suite(&self, invocation: &SuiteInvocation) -> ConsoleResult<i32> {
        self.calls.borrow_mut().push(invocation.clone());
        let id = invocation.suite.id;
        if self.missing.contains(&id) {
            return Err(ConsoleError::MissingArtifact {
                path: PathBuf::from("out").join(id.dir()),
            });
        }
        Ok(self.codes.get(&id).copied().unwrap_or(0))
    }
}

/// Records dependency requests without starting anything
#[derive(Default)]
struct CountingStarter {
    requests: RefCell<Vec<DependencyRequest>>,
    fail: bool,
}

impl ServiceStarter for CountingStarter {
    fn start(
        &self,
        request: DependencyRequest,
        _verbosity: Verbosity,
    ) -> ConsoleResult<ServiceGuard> {
        self.requests.borrow_mut().push(request);
        if self.fail {
            return Err(ConsoleError::MissingArtifact {
                path: PathBuf::from("sysroot/cbtemulator"),
            });
        }
        Ok(ServiceGuard::empty())
    }
}

#[derive(Default)]
struct RecordingEventSink {
    events: RefCell<Vec<ConsoleEvent>>,
}

impl EventSink for RecordingEventSink {
    fn on_event(&self, event: ConsoleEvent) {
        self.events.borrow_mut().push(event);
    }
}

fn options(instance: &str) -> TestOptions {
    TestOptions::new(
        Verbosity::new(2),
        CloudBtArgs::new("google.com:shuffler-test", instance),
        E2eContext {
            ports: PortsConfig::default(),
            observation_querier_path: PathBuf::from(
                "/src/out/tools/observation_querier/query_observations",
            ),
            test_app_path: PathBuf::from("/src/out/tools/test_app/cobalt_test_app"),
        },
    )
}

const DEFAULT_SUITES: [SuiteId; 4] = [
    SuiteId::Gtests,
    SuiteId::GoTests,
    SuiteId::GtestsBtEmulator,
    SuiteId::E2eTests,
];

#[test]
fn all_passing_suites_succeed() {
    let starter = CountingStarter::default();
    let runner = ScriptedSuiteRunner::default();
    let orchestrator = TestOrchestrator::new(&starter, &runner, NoopEventSink);

    let result = orchestrator.run(&DEFAULT_SUITES, &options(""));

    assert!(result.success());
    assert_eq!(result.exit_code(), 0);
    assert_eq!(runner.called(), DEFAULT_SUITES);
}

#[test]
fn failure_does_not_short_circuit() {
    let starter = CountingStarter::default();
    let runner = ScriptedSuiteRunner::default().with_code(SuiteId::Gtests, 1);
    let orchestrator = TestOrchestrator::new(&starter, &runner, NoopEventSink);

    let result = orchestrator.run(&DEFAULT_SUITES, &options(""));

    assert!(!result.success());
    assert_eq!(result.exit_code(), 1);
    assert_eq!(runner.called(), DEFAULT_SUITES);
    assert_eq!(
        result.outcomes[0].status,
        SuiteStatus::Failed { code: 1 }
    );
    assert!(result.outcomes[1..].iter().all(|o| o.status.is_success()));
}

#[test]
fn missing_suite_directory_is_a_failure() {
    let starter = CountingStarter::default();
    let runner = ScriptedSuiteRunner::default().with_missing(SuiteId::GoTests);
    let orchestrator = TestOrchestrator::new(&starter, &runner, NoopEventSink);

    let result = orchestrator.run(&DEFAULT_SUITES, &options(""));

    assert!(!result.success());
    assert!(matches!(
        result.outcomes[1].status,
        SuiteStatus::Errored { .. }
    ));
    assert_eq!(runner.called().len(), 4);
}

#[test]
fn dependencies_follow_suite_needs() {
    let starter = CountingStarter::default();
    let runner = ScriptedSuiteRunner::default();
    let orchestrator = TestOrchestrator::new(&starter, &runner, NoopEventSink);

    orchestrator.run(&DEFAULT_SUITES, &options(""));

    // gtests and go_tests need nothing, so only two requests are made
    assert_eq!(
        *starter.requests.borrow(),
        [
            DependencyRequest {
                storage_emulator: true,
                pipeline_processes: false,
            },
            DependencyRequest {
                storage_emulator: true,
                pipeline_processes: true,
            },
        ]
    );
}

#[test]
fn dependency_failure_fails_suite_and_continues() {
    let starter = CountingStarter {
        fail: true,
        ..Default::default()
    };
    let runner = ScriptedSuiteRunner::default();
    let orchestrator = TestOrchestrator::new(&starter, &runner, NoopEventSink);

    let result = orchestrator.run(&DEFAULT_SUITES, &options(""));

    assert!(!result.success());
    // The emulator-backed suites never reached the runner
    assert_eq!(runner.called(), [SuiteId::Gtests, SuiteId::GoTests]);
    assert_eq!(result.outcomes.len(), 4);
}

#[test]
fn cloud_bt_without_instance_stops_the_loop() {
    let starter = CountingStarter::default();
    let runner = ScriptedSuiteRunner::default();
    let events = RecordingEventSink::default();
    let orchestrator = TestOrchestrator::new(&starter, &runner, &events);

    let result = orchestrator.run(
        &[SuiteId::Gtests, SuiteId::GtestsCloudBt, SuiteId::GoTests],
        &options(""),
    );

    assert!(!result.success());
    assert_eq!(runner.called(), [SuiteId::Gtests]);
    assert_eq!(result.outcomes.len(), 2);
    assert_eq!(
        result.outcomes[1].status,
        SuiteStatus::Misconfigured {
            reason: CLOUD_BT_INSTANCE_REQUIRED.to_string()
        }
    );
    assert!(events
        .events
        .borrow()
        .contains(&ConsoleEvent::SuiteMisconfigured {
            suite: SuiteId::GtestsCloudBt,
            message: "--bigtable_instance_name must be specified".to_string(),
        }));
}

#[test]
fn cloud_bt_receives_project_and_instance() {
    let starter = CountingStarter::default();
    let runner = ScriptedSuiteRunner::default();
    let orchestrator = TestOrchestrator::new(&starter, &runner, NoopEventSink);

    let result = orchestrator.run(&[SuiteId::GtestsCloudBt], &options("my-instance"));

    assert!(result.success());
    assert_eq!(
        runner.args_for(SuiteId::GtestsCloudBt),
        [
            "--bigtable_project_name=google.com:shuffler-test",
            "--bigtable_instance_name=my-instance",
        ]
    );
    assert!(starter.requests.borrow().is_empty());
}

#[test]
fn e2e_receives_service_endpoints() {
    let starter = CountingStarter::default();
    let runner = ScriptedSuiteRunner::default();
    let orchestrator = TestOrchestrator::new(&starter, &runner, NoopEventSink);

    orchestrator.run(&[SuiteId::E2eTests], &options(""));

    assert_eq!(
        runner.args_for(SuiteId::E2eTests),
        [
            "-analyzer_uri=localhost:6001",
            "-shuffler_uri=localhost:5001",
            "-report_master_uri=localhost:7001",
            "-observation_querier_path=/src/out/tools/observation_querier/query_observations",
            "-test_app_path=/src/out/tools/test_app/cobalt_test_app",
            "-sub_process_v=2",
        ]
    );
}

#[test]
fn other_suites_get_no_arguments() {
    let starter = CountingStarter::default();
    let runner = ScriptedSuiteRunner::default();
    let orchestrator = TestOrchestrator::new(&starter, &runner, NoopEventSink);

    orchestrator.run(&DEFAULT_SUITES[..3], &options("ignored"));

    for suite in &DEFAULT_SUITES[..3] {
        assert!(runner.args_for(*suite).is_empty());
    }
}

#[test]
fn events_bracket_each_suite() {
    let starter = CountingStarter::default();
    let runner = ScriptedSuiteRunner::default().with_code(SuiteId::GoTests, 2);
    let events = RecordingEventSink::default();
    let orchestrator = TestOrchestrator::new(&starter, &runner, &events);

    orchestrator.run(&[SuiteId::Gtests, SuiteId::GoTests], &options(""));

    assert_eq!(
        *events.events.borrow(),
        [
            ConsoleEvent::TestsPlanned {
                suites: vec![SuiteId::Gtests, SuiteId::GoTests],
            },
            ConsoleEvent::SuiteStarted {
                suite: SuiteId::Gtests
            },
            ConsoleEvent::SuiteFinished {
                suite: SuiteId::Gtests,
                passed: true,
            },
            ConsoleEvent::SuiteStarted {
                suite: SuiteId::GoTests
            },
            ConsoleEvent::SuiteFinished {
                suite: SuiteId::GoTests,
                passed: false,
            },
            ConsoleEvent::TestsFinished { passed: false },
        ]
    );
}

#[test]
fn empty_selection_passes() {
    let starter = CountingStarter::default();
    let runner = ScriptedSuiteRunner::default();
    let orchestrator = TestOrchestrator::new(&starter, &runner, NoopEventSink);

    let result = orchestrator.run(&[], &options(""));

    assert!(result.success());
    assert!(runner.called().is_empty());
}
