//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ClusterTarget;
use crate::error::ConsoleResult;

use super::loader::{self, ConfigWarning};

/// Build tree locations, relative to the source root unless absolute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    #[serde(default = "default_sysroot_dir")]
    pub sysroot_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
            sysroot_dir: default_sysroot_dir(),
        }
    }
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("out")
}

fn default_sysroot_dir() -> PathBuf {
    PathBuf::from("sysroot")
}

/// Local ports the pipeline services listen on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortsConfig {
    #[serde(default = "default_shuffler_port")]
    pub shuffler: u16,

    #[serde(default = "default_analyzer_service_port")]
    pub analyzer_service: u16,

    #[serde(default = "default_report_master_port")]
    pub report_master: u16,
}

impl Default for PortsConfig {
    fn default() -> Self {
        Self {
            shuffler: default_shuffler_port(),
            analyzer_service: default_analyzer_service_port(),
            report_master: default_report_master_port(),
        }
    }
}

fn default_shuffler_port() -> u16 {
    5001
}

fn default_analyzer_service_port() -> u16 {
    6001
}

fn default_report_master_port() -> u16 {
    7001
}

/// Registry and cluster the images are deployed to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GceConfig {
    #[serde(default = "default_gce_project")]
    pub project: String,

    #[serde(default = "default_project_domain")]
    pub project_domain: String,

    #[serde(default = "default_cluster")]
    pub cluster: String,

    #[serde(default = "default_registry")]
    pub registry: String,
}

impl Default for GceConfig {
    fn default() -> Self {
        Self {
            project: default_gce_project(),
            project_domain: default_project_domain(),
            cluster: default_cluster(),
            registry: default_registry(),
        }
    }
}

impl GceConfig {
    pub fn cluster_target(&self) -> ClusterTarget {
        ClusterTarget {
            registry: self.registry.clone(),
            project_domain: self.project_domain.clone(),
            project: self.project.clone(),
            cluster: self.cluster.clone(),
        }
    }
}

fn default_gce_project() -> String {
    "shuffler-test".to_string()
}

fn default_project_domain() -> String {
    "google.com".to_string()
}

fn default_cluster() -> String {
    "cluster-1".to_string()
}

fn default_registry() -> String {
    "us.gcr.io".to_string()
}

/// Bigtable settings for the deployed analyzer and the cloud_bt suite
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BigtableConfig {
    /// Instance the deployed analyzer writes observations to
    #[serde(default = "default_bigtable_instance")]
    pub instance: String,

    /// Table the deployed analyzer writes observations to
    #[serde(default = "default_bigtable_table")]
    pub table: String,

    /// Default `--bigtable_project_name` for the cloud_bt suite
    #[serde(default = "default_test_project")]
    pub test_project: String,
}

impl Default for BigtableConfig {
    fn default() -> Self {
        Self {
            instance: default_bigtable_instance(),
            table: default_bigtable_table(),
            test_project: default_test_project(),
        }
    }
}

fn default_bigtable_instance() -> String {
    "cobalt-analyzer".to_string()
}

fn default_bigtable_table() -> String {
    "observations".to_string()
}

fn default_test_project() -> String {
    "google.com:shuffler-test".to_string()
}

/// Test orchestration settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestsConfig {
    /// How long to let background services come up before running a suite
    #[serde(default = "default_startup_wait_ms")]
    pub service_startup_wait_ms: u64,
}

impl Default for TestsConfig {
    fn default() -> Self {
        Self {
            service_startup_wait_ms: default_startup_wait_ms(),
        }
    }
}

fn default_startup_wait_ms() -> u64 {
    1000
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub ports: PortsConfig,

    #[serde(default)]
    pub gce: GceConfig,

    #[serde(default)]
    pub bigtable: BigtableConfig,

    #[serde(default)]
    pub tests: TestsConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ConsoleResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ConsoleResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(source_root: &Path) -> (Self, Vec<ConfigWarning>) {
        loader::load_or_default(source_root)
    }

    /// Apply environment variable overrides (COBALTB_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// The observation table the deployed analyzer is pointed at
    pub fn analyzer_table(&self) -> String {
        self.gce
            .cluster_target()
            .bigtable_table(&self.bigtable.instance, &self.bigtable.table)
    }
}
