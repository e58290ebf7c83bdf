//! Environment context inherited by every spawned tool
//!
//! Computed once at startup from the project layout and never changed
//! afterwards. Rather than mutating the console's own environment, the
//! variables are applied to each child process by the command runner.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use crate::config::ProjectLayout;
use crate::error::{ConsoleError, ConsoleResult};

/// File in the source root holding the service account key
pub const CREDENTIALS_FILE: &str = "service_account_credentials.json";

/// Variables set for every external invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentContext {
    vars: Vec<(String, OsString)>,
}

impl EnvironmentContext {
    /// Build the context from the layout and the console's own `PATH`
    pub fn from_layout(layout: &ProjectLayout) -> ConsoleResult<Self> {
        Self::with_base_path(layout, std::env::var_os("PATH"))
    }

    /// Build the context with an explicit inherited `PATH`
    pub fn with_base_path(
        layout: &ProjectLayout,
        base_path: Option<OsString>,
    ) -> ConsoleResult<Self> {
        let mut search_path: Vec<PathBuf> = vec![
            layout.sysroot("bin"),
            layout.sysroot("gcloud/google-cloud-sdk/bin"),
        ];
        if let Some(base) = base_path {
            search_path.extend(std::env::split_paths(&base));
        }
        let path = std::env::join_paths(search_path)
            .map_err(|e| ConsoleError::Io(std::io::Error::other(e)))?;

        Ok(Self {
            vars: vec![
                ("PATH".to_string(), path),
                (
                    "LD_LIBRARY_PATH".to_string(),
                    layout.sysroot("lib").into_os_string(),
                ),
                (
                    "GOOGLE_APPLICATION_CREDENTIALS".to_string(),
                    layout.source(CREDENTIALS_FILE).into_os_string(),
                ),
                (
                    "GRPC_DEFAULT_SSL_ROOTS_FILE_PATH".to_string(),
                    layout.sysroot("share/grpc/roots.pem").into_os_string(),
                ),
                (
                    "GOROOT".to_string(),
                    layout.sysroot("golang").into_os_string(),
                ),
            ],
        })
    }

    pub fn vars(&self) -> impl Iterator<Item = (&str, &OsStr)> {
        self.vars
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_os_str()))
    }

    pub fn get(&self, key: &str) -> Option<&OsStr> {
        self.vars
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_os_str())
    }
}
