//! Local Service Starter
//!
//! Implements the ServiceStarter port by spawning the emulator and the
//! pipeline services as background children of the console.

use std::time::Duration;

use crate::config::PortsConfig;
use crate::domain::ports::{CommandRunner, DependencyRequest, ServiceGuard, ServiceStarter};
use crate::domain::value_objects::Verbosity;
use crate::error::ConsoleResult;

use super::catalog::{local_uri, LocalProcesses, ShufflerOptions};

/// Spawns suite dependencies on this machine
pub struct LocalServiceStarter<R: CommandRunner> {
    processes: LocalProcesses,
    ports: PortsConfig,
    runner: R,
    startup_wait: Duration,
}

impl<R: CommandRunner> LocalServiceStarter<R> {
    pub fn new(
        processes: LocalProcesses,
        ports: PortsConfig,
        runner: R,
        startup_wait: Duration,
    ) -> Self {
        Self {
            processes,
            ports,
            runner,
            startup_wait,
        }
    }
}

impl<R: CommandRunner> ServiceStarter for LocalServiceStarter<R> {
    fn start(
        &self,
        request: DependencyRequest,
        verbosity: Verbosity,
    ) -> ConsoleResult<ServiceGuard> {
        let mut guard = ServiceGuard::empty();

        // Anything already pushed is torn down by the guard if a later spawn fails.
        if request.storage_emulator {
            log::info!("Starting the Bigtable Emulator...");
            let child = self.runner.spawn(&self.processes.bigtable_emulator())?;
            guard.push("Bigtable Emulator", child);
        }

        if request.pipeline_processes {
            log::info!("Starting the Shuffler, Analyzer Service and Report Master...");
            let shuffler = ShufflerOptions {
                port: self.ports.shuffler,
                analyzer_uri: local_uri(self.ports.analyzer_service),
                use_memstore: true,
                erase_db: true,
                config_file: self.processes.default_shuffler_config(),
            };
            let child = self
                .runner
                .spawn(&self.processes.shuffler(&shuffler, verbosity))?;
            guard.push("Shuffler", child);

            let child = self.runner.spawn(
                &self
                    .processes
                    .analyzer_service(self.ports.analyzer_service, verbosity),
            )?;
            guard.push("Analyzer Service", child);

            let child = self.runner.spawn(&self.processes.report_master(
                self.ports.report_master,
                self.processes.default_cobalt_config_dir(),
                verbosity,
            ))?;
            guard.push("Report Master", child);
        }

        if !guard.is_empty() && !self.startup_wait.is_zero() {
            log::debug!(
                "Waiting {:?} for {} to come up",
                self.startup_wait,
                guard.names().join(", ")
            );
            std::thread::sleep(self.startup_wait);
        }

        Ok(guard)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::config::{Config, ProjectLayout};
    use crate::domain::ports::{CommandStatus, ExternalCommand};
    use std::cell::RefCell;
    use std::path::Path;
    use std::process::{Child, Command};

    /// Spawns `sleep` in place of every service and records what was asked for
    #[derive(Default)]
    struct SleepRunner {
        spawned: RefCell<Vec<String>>,
    }

    impl CommandRunner for SleepRunner {
        fn run(&self, _command: &ExternalCommand) -> ConsoleResult<CommandStatus> {
            Ok(CommandStatus::Exited(0))
        }

        fn spawn(&self, command: &ExternalCommand) -> ConsoleResult<Child> {
            self.spawned.borrow_mut().push(command.program().to_string());
            Ok(Command::new("sleep").arg("30").spawn()?)
        }
    }

    fn starter(runner: &SleepRunner) -> LocalServiceStarter<&SleepRunner> {
        let layout = ProjectLayout::new(Path::new("/src/cobalt"), &Config::default());
        LocalServiceStarter::new(
            LocalProcesses::new(layout),
            PortsConfig::default(),
            runner,
            Duration::ZERO,
        )
    }

    #[test]
    fn nothing_requested_spawns_nothing() {
        let runner = SleepRunner::default();
        let guard = starter(&runner)
            .start(DependencyRequest::default(), Verbosity::new(0))
            .unwrap();

        assert!(guard.is_empty());
        assert!(runner.spawned.borrow().is_empty());
    }

    #[test]
    fn emulator_only() {
        let runner = SleepRunner::default();
        let request = DependencyRequest {
            storage_emulator: true,
            pipeline_processes: false,
        };
        let guard = starter(&runner).start(request, Verbosity::new(0)).unwrap();

        assert_eq!(guard.names(), ["Bigtable Emulator"]);
        assert!(runner.spawned.borrow()[0].ends_with("cbtemulator"));
    }

    #[test]
    fn full_pipeline_starts_emulator_first() {
        let runner = SleepRunner::default();
        let request = DependencyRequest {
            storage_emulator: true,
            pipeline_processes: true,
        };
        let guard = starter(&runner).start(request, Verbosity::new(0)).unwrap();

        assert_eq!(
            guard.names(),
            [
                "Bigtable Emulator",
                "Shuffler",
                "Analyzer Service",
                "Report Master"
            ]
        );
        let spawned = runner.spawned.borrow();
        assert!(spawned[1].ends_with("out/shuffler/shuffler"));
        assert!(spawned[3].ends_with("analyzer_report_master"));
    }
}
