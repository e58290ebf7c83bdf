//! CommandRunner port - abstraction over launching external tools
//!
//! Every effect the console has on the outside world (docker, gcloud,
//! kubectl, test binaries, pipeline services) goes through this trait, so
//! use cases can be exercised with a recording runner in tests.

use std::path::{Path, PathBuf};
use std::process::Child;

use crate::error::{ConsoleError, ConsoleResult};

/// A fully specified external invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    program: String,
    args: Vec<String>,
    current_dir: Option<PathBuf>,
}

impl ExternalCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    pub fn get_current_dir(&self) -> Option<&Path> {
        self.current_dir.as_deref()
    }

    /// Shell-like rendering for logs
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.command_line())
    }
}

/// How a finished external command ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    /// Exited normally with this code
    Exited(i32),
    /// Terminated by this signal
    Signaled(i32),
}

impl CommandStatus {
    pub fn success(&self) -> bool {
        matches!(self, CommandStatus::Exited(0))
    }

    /// Exit code, with signals reported the way a shell would (128 + n)
    pub fn code(&self) -> i32 {
        match self {
            CommandStatus::Exited(code) => *code,
            CommandStatus::Signaled(signal) => 128 + signal,
        }
    }
}

/// Launches external commands
pub trait CommandRunner {
    /// Run to completion and report how it ended.
    ///
    /// Only a failure to launch is an `Err`; a nonzero exit is a normal
    /// `Ok(CommandStatus)` for the caller to judge.
    fn run(&self, command: &ExternalCommand) -> ConsoleResult<CommandStatus>;

    /// Start in the background and hand back the child process
    fn spawn(&self, command: &ExternalCommand) -> ConsoleResult<Child>;

    /// Run to completion and turn any unsuccessful status into an error
    fn check(&self, command: &ExternalCommand) -> ConsoleResult<()> {
        match self.run(command)? {
            CommandStatus::Exited(0) => Ok(()),
            CommandStatus::Exited(code) => Err(ConsoleError::CommandFailed {
                program: command.program().to_string(),
                code,
            }),
            CommandStatus::Signaled(signal) => Err(ConsoleError::CommandKilled {
                program: command.program().to_string(),
                signal,
            }),
        }
    }
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, command: &ExternalCommand) -> ConsoleResult<CommandStatus> {
        (**self).run(command)
    }

    fn spawn(&self, command: &ExternalCommand) -> ConsoleResult<Child> {
        (**self).spawn(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedStatus(CommandStatus);

    impl CommandRunner for FixedStatus {
        fn run(&self, _command: &ExternalCommand) -> ConsoleResult<CommandStatus> {
            Ok(self.0)
        }

        fn spawn(&self, command: &ExternalCommand) -> ConsoleResult<Child> {
            Err(ConsoleError::CommandSpawn {
                program: command.program().to_string(),
                source: std::io::Error::other("not supported"),
            })
        }
    }

    #[test]
    fn command_line_joins_args() {
        let cmd = ExternalCommand::new("docker")
            .arg("build")
            .args(["-t", "shuffler"]);
        assert_eq!(cmd.command_line(), "docker build -t shuffler");
    }

    #[test]
    fn check_passes_on_zero() {
        let runner = FixedStatus(CommandStatus::Exited(0));
        assert!(runner.check(&ExternalCommand::new("true")).is_ok());
    }

    #[test]
    fn check_reports_exit_code() {
        let runner = FixedStatus(CommandStatus::Exited(2));
        let err = runner.check(&ExternalCommand::new("kubectl")).unwrap_err();
        assert!(matches!(
            err,
            ConsoleError::CommandFailed { ref program, code: 2 } if program == "kubectl"
        ));
    }

    #[test]
    fn check_reports_signal() {
        let runner = FixedStatus(CommandStatus::Signaled(9));
        let err = runner.check(&ExternalCommand::new("docker")).unwrap_err();
        assert!(matches!(err, ConsoleError::CommandKilled { signal: 9, .. }));
    }

    #[test]
    fn signal_code_is_shell_style() {
        assert_eq!(CommandStatus::Signaled(15).code(), 143);
        assert!(!CommandStatus::Signaled(15).success());
    }
}
