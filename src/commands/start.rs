//! Start command handler
//!
//! Runs one pipeline process in the foreground until it exits.

use anyhow::Result;

use cobaltb::domain::ports::{CommandRunner, CommandStatus, ExternalCommand};
use cobaltb::infrastructure::services::{local_uri, LocalProcesses, ShufflerOptions};

use super::session::Session;
use crate::cli::StartCommand;
use crate::ui::theme::{banners, colors, paint};

/// Verbosity floor for the long-running services
const SERVICE_MIN_VERBOSITY: u8 = 3;

/// Execute the start command
pub fn cmd_start(session: &Session, process: StartCommand) -> Result<i32> {
    let command = build_command(session, &session.processes(), process);
    log::info!("Starting {}", command.program());

    let status = session.runner().run(&command)?;
    if let CommandStatus::Signaled(signal) = status {
        println!(
            "{}",
            paint(
                &format!("{} {}", banners::SIGNAL_WARNING, signal),
                colors::WARNING,
                session.color
            )
        );
    }
    Ok(status.code())
}

fn build_command(
    session: &Session,
    processes: &LocalProcesses,
    process: StartCommand,
) -> ExternalCommand {
    let ports = session.config.ports;
    let verbosity = session.verbosity;

    match process {
        StartCommand::BigtableEmulator => processes.bigtable_emulator(),
        StartCommand::Shuffler {
            port,
            analyzer_uri,
            use_memstore,
            keep_existing_db,
            config_file,
        } => {
            let options = ShufflerOptions {
                port: port.unwrap_or(ports.shuffler),
                analyzer_uri: analyzer_uri.unwrap_or_else(|| local_uri(ports.analyzer_service)),
                use_memstore,
                erase_db: !keep_existing_db,
                config_file: config_file.unwrap_or_else(|| processes.default_shuffler_config()),
            };
            processes.shuffler(&options, verbosity.at_least(SERVICE_MIN_VERBOSITY))
        }
        StartCommand::AnalyzerService { port } => processes.analyzer_service(
            port.unwrap_or(ports.analyzer_service),
            verbosity.at_least(SERVICE_MIN_VERBOSITY),
        ),
        StartCommand::ReportMaster {
            port,
            cobalt_config_dir,
        } => processes.report_master(
            port.unwrap_or(ports.report_master),
            cobalt_config_dir.unwrap_or_else(|| processes.default_cobalt_config_dir()),
            verbosity,
        ),
        StartCommand::TestApp {
            shuffler_uri,
            analyzer_uri,
        } => processes.test_app(
            &shuffler_uri.unwrap_or_else(|| local_uri(ports.shuffler)),
            &analyzer_uri.unwrap_or_else(|| local_uri(ports.analyzer_service)),
            verbosity,
        ),
        StartCommand::ReportClient { report_master_uri } => processes.report_client(
            &report_master_uri.unwrap_or_else(|| local_uri(ports.report_master)),
            verbosity,
        ),
        StartCommand::ObservationQuerier => processes.observation_querier(verbosity),
    }
}
