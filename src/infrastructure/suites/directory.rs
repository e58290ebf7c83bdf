//! Directory Suite Runner
//!
//! A suite is a directory under the build output holding one executable per
//! test. Every executable is run in name order with the suite's arguments;
//! the suite passes only if all of them exit 0.

use std::path::PathBuf;

use crate::domain::ports::{
    CommandRunner, ExternalCommand, FileSystem, SuiteInvocation, SuiteRunner,
};
use crate::error::{ConsoleError, ConsoleResult};

/// Runs the test binaries found in `out/<suite dir>`
pub struct DirectorySuiteRunner<R: CommandRunner, F: FileSystem> {
    out_dir: PathBuf,
    runner: R,
    fs: F,
}

impl<R: CommandRunner, F: FileSystem> DirectorySuiteRunner<R, F> {
    pub fn new(out_dir: PathBuf, runner: R, fs: F) -> Self {
        Self {
            out_dir,
            runner,
            fs,
        }
    }

    /// Executables in the suite directory, in the order they will run
    pub fn test_binaries(&self, suite_dir: &str) -> ConsoleResult<Vec<PathBuf>> {
        let dir = self.out_dir.join(suite_dir);
        if !self.fs.is_dir(&dir) {
            return Err(ConsoleError::MissingArtifact { path: dir });
        }
        Ok(self
            .fs
            .list_dir(&dir)?
            .into_iter()
            .filter(|path| self.fs.is_executable(path))
            .collect())
    }
}

impl<R: CommandRunner, F: FileSystem> SuiteRunner for DirectorySuiteRunner<R, F> {
    fn run_suite(&self, invocation: &SuiteInvocation) -> ConsoleResult<i32> {
        let dir = invocation.suite.id.dir();
        let binaries = self.test_binaries(dir)?;
        if binaries.is_empty() {
            log::warn!("No test binaries found in {}", self.out_dir.join(dir).display());
            return Ok(0);
        }

        let mut failures = Vec::new();
        for binary in &binaries {
            let name = binary
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            log::info!("Running {}...", name);

            let command = ExternalCommand::new(binary.to_string_lossy())
                .args(invocation.args.iter().cloned())
                .current_dir(self.out_dir.join(dir));
            match self.runner.run(&command) {
                Ok(status) if status.success() => {}
                Ok(status) => {
                    log::error!("{} failed ({:?})", name, status);
                    failures.push(name);
                }
                Err(err) => {
                    log::error!("{}", err);
                    failures.push(name);
                }
            }
        }

        if failures.is_empty() {
            Ok(0)
        } else {
            log::error!(
                "{} of {} tests failed in {}: {}",
                failures.len(),
                binaries.len(),
                dir,
                failures.join(", ")
            );
            Ok(1)
        }
    }
}
