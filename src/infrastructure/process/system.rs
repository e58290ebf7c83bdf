//! System Command Runner
//!
//! Implements the CommandRunner port with `std::process::Command`. Child
//! processes share the console's stdio so tool output streams straight to the
//! operator.

use std::process::{Child, Command, ExitStatus, Stdio};

use crate::domain::ports::{CommandRunner, CommandStatus, ExternalCommand};
use crate::error::{ConsoleError, ConsoleResult};
use crate::infrastructure::environment::EnvironmentContext;

/// Runs commands on the local machine
#[derive(Debug, Clone, Default)]
pub struct SystemCommandRunner {
    env: EnvironmentContext,
}

impl SystemCommandRunner {
    /// Create a runner that applies `env` to every child it starts
    pub fn new(env: EnvironmentContext) -> Self {
        Self { env }
    }

    fn build(&self, command: &ExternalCommand) -> Command {
        let mut cmd = Command::new(command.program());
        cmd.args(command.get_args())
            .envs(self.env.vars())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(dir) = command.get_current_dir() {
            cmd.current_dir(dir);
        }
        cmd
    }

    fn spawn_error(command: &ExternalCommand, source: std::io::Error) -> ConsoleError {
        ConsoleError::CommandSpawn {
            program: command.program().to_string(),
            source,
        }
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, command: &ExternalCommand) -> ConsoleResult<CommandStatus> {
        log::debug!("Running: {}", command);
        let status = self
            .build(command)
            .status()
            .map_err(|e| Self::spawn_error(command, e))?;
        let status = to_command_status(status);
        log::debug!("{} finished: {:?}", command.program(), status);
        Ok(status)
    }

    fn spawn(&self, command: &ExternalCommand) -> ConsoleResult<Child> {
        log::debug!("Spawning: {}", command);
        self.build(command)
            .spawn()
            .map_err(|e| Self::spawn_error(command, e))
    }
}

#[cfg(unix)]
fn to_command_status(status: ExitStatus) -> CommandStatus {
    use std::os::unix::process::ExitStatusExt;

    match (status.code(), status.signal()) {
        (Some(code), _) => CommandStatus::Exited(code),
        (None, Some(signal)) => CommandStatus::Signaled(signal),
        (None, None) => CommandStatus::Exited(1),
    }
}

#[cfg(not(unix))]
fn to_command_status(status: ExitStatus) -> CommandStatus {
    CommandStatus::Exited(status.code().unwrap_or(1))
}
