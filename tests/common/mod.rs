//! Common test utilities for cobaltb CLI tests.
//!
//! Provides `TestEnv`: an isolated source checkout and home directory, plus
//! helpers to lay out fake build output and run the `cobaltb` binary in it.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running a cobaltb CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated source checkout and home directory
pub struct TestEnv {
    pub root: TempDir,
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create root dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_cobaltb")),
        }
    }

    /// Get path relative to the checkout root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Write a file, creating parent directories
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Write an executable shell script
    #[cfg(unix)]
    pub fn write_script(&self, relative: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.write_file(relative, &format!("#!/bin/sh\n{}\n", body));
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make script executable");
        path
    }

    #[cfg(unix)]
    /// Install a fake external tool in `sysroot/bin` that appends its
    /// arguments to `tool_calls.log` and exits with `code`
    pub fn fake_tool(&self, name: &str, code: i32) {
        let log = self.path("tool_calls.log");
        self.write_script(
            &format!("sysroot/bin/{}", name),
            &format!("echo \"{} $*\" >> '{}'\nexit {}", name, log.display(), code),
        );
    }

    /// Lines recorded by fake tools, in call order
    pub fn tool_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.path("tool_calls.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Run cobaltb against this checkout
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_in(self.root.path(), args)
    }

    /// Run cobaltb from `cwd`, pointing `--root` at this checkout
    pub fn run_in(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let output = Command::new(&self.bin)
            .current_dir(cwd)
            .arg("--root")
            .arg(self.root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("COBALTB_NO_COLOR", "1")
            .env("COBALTB_STARTUP_WAIT_MS", "0")
            .env_remove("COBALTB_OUT_DIR")
            .env_remove("COBALTB_SYSROOT_DIR")
            .env_remove("COBALTB_GCE_PROJECT")
            .env_remove("COBALTB_GCE_CLUSTER")
            .env_remove("COBALTB_BIGTABLE_INSTANCE")
            .output()
            .expect("Failed to execute cobaltb");
        to_result(output)
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
