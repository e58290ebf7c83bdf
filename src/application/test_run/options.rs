//! Test run options

use std::path::PathBuf;

use crate::config::PortsConfig;
use crate::domain::entities::SuiteId;
use crate::domain::value_objects::Verbosity;

/// Directive printed when the cloud Bigtable suite is selected without an instance
pub const CLOUD_BT_INSTANCE_REQUIRED: &str = "--bigtable_instance_name must be specified";

/// Arguments for the suite that talks to a real Bigtable instance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CloudBtArgs {
    pub project: String,
    /// Empty means "not given"; the suite refuses to run without it
    pub instance: String,
}

impl CloudBtArgs {
    pub fn new(project: impl Into<String>, instance: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            instance: instance.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.instance.is_empty()
    }

    pub fn to_args(&self) -> Vec<String> {
        vec![
            format!("--bigtable_project_name={}", self.project),
            format!("--bigtable_instance_name={}", self.instance),
        ]
    }
}

/// Where the end-to-end suite finds the locally started pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct E2eContext {
    pub ports: PortsConfig,
    pub observation_querier_path: PathBuf,
    pub test_app_path: PathBuf,
}

impl E2eContext {
    /// Arguments for the e2e binaries; `sub_process_verbosity` is forwarded to
    /// the tools they launch
    pub fn to_args(&self, sub_process_verbosity: Verbosity) -> Vec<String> {
        vec![
            format!("-analyzer_uri=localhost:{}", self.ports.analyzer_service),
            format!("-shuffler_uri=localhost:{}", self.ports.shuffler),
            format!("-report_master_uri=localhost:{}", self.ports.report_master),
            format!(
                "-observation_querier_path={}",
                self.observation_querier_path.display()
            ),
            format!("-test_app_path={}", self.test_app_path.display()),
            format!("-sub_process_v={}", sub_process_verbosity.count()),
        ]
    }
}

/// Options for a test run
#[derive(Debug, Clone)]
pub struct TestOptions {
    pub verbosity: Verbosity,
    pub cloud_bt: CloudBtArgs,
    pub e2e: E2eContext,
}

impl TestOptions {
    pub fn new(verbosity: Verbosity, cloud_bt: CloudBtArgs, e2e: E2eContext) -> Self {
        Self {
            verbosity,
            cloud_bt,
            e2e,
        }
    }

    /// Suite-specific arguments handed to every binary in the suite
    pub fn suite_args(&self, suite: SuiteId) -> Vec<String> {
        match suite {
            SuiteId::E2eTests => self.e2e.to_args(self.verbosity),
            SuiteId::GtestsCloudBt => self.cloud_bt.to_args(),
            SuiteId::Gtests | SuiteId::GoTests | SuiteId::GtestsBtEmulator => Vec::new(),
        }
    }
}
