//! State shared by every command for one invocation

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};

use cobaltb::config::{Config, ProjectLayout};
use cobaltb::domain::value_objects::Verbosity;
use cobaltb::infrastructure::{EnvironmentContext, LocalProcesses, SystemCommandRunner};

use crate::ui;
use crate::ui::terminal::detect_capabilities;

/// Resolved configuration, layout and subprocess environment
pub struct Session {
    pub verbosity: Verbosity,
    pub config: Config,
    pub layout: ProjectLayout,
    pub env: EnvironmentContext,
    pub color: bool,
}

impl Session {
    /// Load config for `root` and compute the subprocess environment once
    pub fn open(root: &Path, verbosity: Verbosity) -> Result<Self> {
        let color = detect_capabilities().color_enabled();

        let (config, warnings) = Config::load_or_default(root);
        ui::print_config_warnings(&warnings, color);

        let layout = ProjectLayout::new(root, &config);
        let env = EnvironmentContext::from_layout(&layout)
            .context("Failed to prepare the environment for external tools")?;
        log::debug!(
            "Source root {}, output {}",
            layout.root().display(),
            layout.out_dir().display()
        );

        Ok(Self {
            verbosity,
            config,
            layout,
            env,
            color,
        })
    }

    /// Command runner carrying this session's environment
    pub fn runner(&self) -> SystemCommandRunner {
        SystemCommandRunner::new(self.env.clone())
    }

    pub fn processes(&self) -> LocalProcesses {
        LocalProcesses::new(self.layout.clone())
    }

    pub fn startup_wait(&self) -> Duration {
        Duration::from_millis(self.config.tests.service_startup_wait_ms)
    }
}
