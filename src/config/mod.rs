//! Configuration module for cobaltb
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (COBALTB_*)
//! 3. Project config (<root>/cobaltb.toml)
//! 4. User config (~/.config/cobaltb/config.toml)
//! 5. Built-in defaults (lowest priority)

mod layout;
mod loader;
mod types;

pub use layout::ProjectLayout;
pub use loader::{apply_overrides, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{BigtableConfig, Config, GceConfig, PathsConfig, PortsConfig, TestsConfig};
