//! Command lines for the locally runnable pipeline processes
//!
//! Binaries live under the build output directory; the Bigtable Emulator
//! ships with the cloud SDK in the sysroot.

use std::path::PathBuf;

use crate::config::ProjectLayout;
use crate::domain::ports::ExternalCommand;
use crate::domain::value_objects::Verbosity;

/// Flag telling the analyzer-side services to use the local emulator
const USE_EMULATOR_FLAG: &str = "-for_testing_only_use_bigtable_emulator";

/// Options for launching the Shuffler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShufflerOptions {
    pub port: u16,
    pub analyzer_uri: String,
    /// Keep state in memory instead of LevelDB
    pub use_memstore: bool,
    /// Wipe any previously persisted LevelDB state on start
    pub erase_db: bool,
    pub config_file: PathBuf,
}

/// Builds the command lines for every local process
#[derive(Debug, Clone)]
pub struct LocalProcesses {
    layout: ProjectLayout,
}

impl LocalProcesses {
    pub fn new(layout: ProjectLayout) -> Self {
        Self { layout }
    }

    pub fn bigtable_emulator_path(&self) -> PathBuf {
        self.layout
            .sysroot("gcloud/google-cloud-sdk/platform/bigtable-emulator/cbtemulator")
    }

    pub fn shuffler_path(&self) -> PathBuf {
        self.layout.out("shuffler/shuffler")
    }

    pub fn analyzer_service_path(&self) -> PathBuf {
        self.layout.out("analyzer/analyzer_service/analyzer_service")
    }

    pub fn report_master_path(&self) -> PathBuf {
        self.layout.out("analyzer/report_master/analyzer_report_master")
    }

    pub fn test_app_path(&self) -> PathBuf {
        self.layout.out("tools/test_app/cobalt_test_app")
    }

    pub fn report_client_path(&self) -> PathBuf {
        self.layout.out("tools/report_client")
    }

    pub fn observation_querier_path(&self) -> PathBuf {
        self.layout
            .out("tools/observation_querier/query_observations")
    }

    /// Shuffler config used when none is given
    pub fn default_shuffler_config(&self) -> PathBuf {
        self.layout.source("shuffler/src/config/config_v0.txt")
    }

    /// Registered metrics/encodings/reports used when none are given
    pub fn default_cobalt_config_dir(&self) -> PathBuf {
        self.layout.source("config/registered")
    }

    pub fn bigtable_emulator(&self) -> ExternalCommand {
        ExternalCommand::new(path_arg(self.bigtable_emulator_path()))
    }

    pub fn shuffler(&self, options: &ShufflerOptions, verbosity: Verbosity) -> ExternalCommand {
        let mut cmd = ExternalCommand::new(path_arg(self.shuffler_path()))
            .arg("-port")
            .arg(options.port.to_string())
            .arg("-analyzer_uri")
            .arg(options.analyzer_uri.as_str())
            .arg("-config_file")
            .arg(path_arg(options.config_file.clone()));
        if options.use_memstore {
            cmd = cmd.arg("-use_memstore");
        }
        if options.erase_db {
            cmd = cmd.arg("-erase_db");
        }
        with_logging(cmd, verbosity)
    }

    pub fn analyzer_service(&self, port: u16, verbosity: Verbosity) -> ExternalCommand {
        let cmd = ExternalCommand::new(path_arg(self.analyzer_service_path()))
            .arg(USE_EMULATOR_FLAG)
            .arg("-port")
            .arg(port.to_string());
        with_logging(cmd, verbosity)
    }

    pub fn report_master(
        &self,
        port: u16,
        cobalt_config_dir: PathBuf,
        verbosity: Verbosity,
    ) -> ExternalCommand {
        let cmd = ExternalCommand::new(path_arg(self.report_master_path()))
            .arg(USE_EMULATOR_FLAG)
            .arg("-port")
            .arg(port.to_string())
            .arg("-cobalt_config_dir")
            .arg(path_arg(cobalt_config_dir));
        with_logging(cmd, verbosity)
    }

    pub fn test_app(
        &self,
        shuffler_uri: &str,
        analyzer_uri: &str,
        verbosity: Verbosity,
    ) -> ExternalCommand {
        let cmd = ExternalCommand::new(path_arg(self.test_app_path()))
            .arg("-shuffler_uri")
            .arg(shuffler_uri)
            .arg("-analyzer_uri")
            .arg(analyzer_uri);
        with_logging(cmd, verbosity)
    }

    pub fn report_client(&self, report_master_uri: &str, verbosity: Verbosity) -> ExternalCommand {
        let cmd = ExternalCommand::new(path_arg(self.report_client_path()))
            .arg("-report_master_uri")
            .arg(report_master_uri);
        with_logging(cmd, verbosity)
    }

    pub fn observation_querier(&self, verbosity: Verbosity) -> ExternalCommand {
        let cmd =
            ExternalCommand::new(path_arg(self.observation_querier_path())).arg(USE_EMULATOR_FLAG);
        with_logging(cmd, verbosity)
    }
}

/// `localhost:<port>` URI for a local service
pub fn local_uri(port: u16) -> String {
    format!("localhost:{}", port)
}

fn with_logging(cmd: ExternalCommand, verbosity: Verbosity) -> ExternalCommand {
    cmd.arg("-logtostderr")
        .arg(format!("-v={}", verbosity.count()))
}

fn path_arg(path: PathBuf) -> String {
    path.to_string_lossy().into_owned()
}
