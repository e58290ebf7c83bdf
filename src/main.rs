//! cobaltb - operator console for the Cobalt pipeline
//!
//! Usage: cobaltb [-v...] [--root <DIR>] <COMMAND>
//!
//! Commands:
//!   test       Run the test suites under the build output directory
//!   clean      Delete build output
//!   start      Run one local process in the foreground
//!   gce_build  Build the service images
//!   gce_push   Push the service images to the registry
//!   gce_start  Start the service images on the cluster
//!   gce_stop   Stop the service images on the cluster

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use cobaltb::domain::value_objects::Verbosity;
use cobaltb::error::ConsoleError;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};
use commands::session::Session;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbosity = Verbosity::new(cli.verbose);

    env_logger::Builder::new()
        .filter_level(verbosity.log_filter())
        .format_timestamp(None)
        .parse_env("COBALTB_LOG")
        .init();

    match run(cli, verbosity) {
        Ok(code) => exit_code(code),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            exit_code(error_exit_code(&err))
        }
    }
}

fn run(cli: Cli, verbosity: Verbosity) -> Result<i32> {
    let session = Session::open(&cli.root, verbosity)?;

    match cli.command {
        Commands::Test {
            tests,
            bigtable_project_name,
            bigtable_instance_name,
        } => commands::test::cmd_test(
            &session,
            tests,
            bigtable_project_name,
            bigtable_instance_name,
        ),
        Commands::Clean { full } => commands::clean::cmd_clean(&session, full),
        Commands::Start { process } => commands::start::cmd_start(&session, process),
        Commands::GceBuild(flags) => commands::gce::cmd_gce_build(&session, flags),
        Commands::GcePush(flags) => commands::gce::cmd_gce_push(&session, flags),
        Commands::GceStart(flags) => commands::gce::cmd_gce_start(&session, flags),
        Commands::GceStop(flags) => commands::gce::cmd_gce_stop(&session, flags),
    }
}

/// A failing external tool propagates its own status; anything else is 1
fn error_exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<ConsoleError>())
        .map(ConsoleError::exit_code)
        .unwrap_or(1)
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
