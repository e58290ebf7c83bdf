use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use cobaltb::domain::value_objects::TestFilter;

/// cobaltb - operator console for the Cobalt pipeline
#[derive(Parser, Debug)]
#[command(name = "cobaltb")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Root of the source checkout
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the test suites found under the build output directory
    Test {
        /// Which suites to run: all, gtests, gotests, btemulator, e2e, cloud_bt,
        /// or any of these prefixed with "no" to exclude them
        #[arg(long, default_value = "all")]
        tests: TestFilter,

        /// Project of the Bigtable instance used by the cloud_bt suite
        #[arg(long = "bigtable_project_name")]
        bigtable_project_name: Option<String>,

        /// Bigtable instance used by the cloud_bt suite (required for cloud_bt)
        #[arg(long = "bigtable_instance_name")]
        bigtable_instance_name: Option<String>,
    },

    /// Delete build output
    Clean {
        /// Delete the whole output directory, build system included
        #[arg(long)]
        full: bool,
    },

    /// Run one local process in the foreground
    Start {
        #[command(subcommand)]
        process: StartCommand,
    },

    /// Build the base image and the selected service images
    #[command(name = "gce_build")]
    GceBuild(ImageFlags),

    /// Tag the selected images and push them to the registry
    #[command(name = "gce_push")]
    GcePush(ImageFlags),

    /// Start the selected images on the cluster
    #[command(name = "gce_start")]
    GceStart(ImageFlags),

    /// Stop the selected images on the cluster
    #[command(name = "gce_stop")]
    GceStop(ImageFlags),
}

/// Image selection shared by the cluster commands
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct ImageFlags {
    /// Only the analyzer image
    #[arg(long = "a")]
    pub analyzer_only: bool,

    /// Only the shuffler image (wins over --a)
    #[arg(long = "s")]
    pub shuffler_only: bool,
}

#[derive(Subcommand, Debug)]
pub enum StartCommand {
    /// The local Bigtable Emulator
    #[command(name = "bigtable_emulator")]
    BigtableEmulator,

    /// The Shuffler
    Shuffler {
        /// Port to listen on (default from config)
        #[arg(long)]
        port: Option<u16>,

        /// Analyzer Service to forward to (default: the local one)
        #[arg(long = "analyzer_uri")]
        analyzer_uri: Option<String>,

        /// Keep state in memory instead of LevelDB
        #[arg(long = "use_memstore")]
        use_memstore: bool,

        /// Keep previously persisted LevelDB state
        #[arg(long = "keep_existing_db")]
        keep_existing_db: bool,

        /// Shuffler config file
        #[arg(long = "config_file")]
        config_file: Option<PathBuf>,
    },

    /// The Analyzer Service, backed by the local Bigtable Emulator
    #[command(name = "analyzer_service")]
    AnalyzerService {
        /// Port to listen on (default from config)
        #[arg(long)]
        port: Option<u16>,
    },

    /// The Report Master, backed by the local Bigtable Emulator
    #[command(name = "report_master")]
    ReportMaster {
        /// Port to listen on (default from config)
        #[arg(long)]
        port: Option<u16>,

        /// Directory holding the registered metrics, encodings and reports
        #[arg(long = "cobalt_config_dir")]
        cobalt_config_dir: Option<PathBuf>,
    },

    /// The end-to-end test client
    #[command(name = "test_app")]
    TestApp {
        #[arg(long = "shuffler_uri")]
        shuffler_uri: Option<String>,

        #[arg(long = "analyzer_uri")]
        analyzer_uri: Option<String>,
    },

    /// The report client
    #[command(name = "report_client")]
    ReportClient {
        #[arg(long = "report_master_uri")]
        report_master_uri: Option<String>,
    },

    /// Dump observations stored in the local Bigtable Emulator
    #[command(name = "observation_querier")]
    ObservationQuerier,
}
