//! Deploy Module
//!
//! Drives a set of images through the cluster lifecycle:
//! stage → build → publish → start → stop.
//!
//! ## Structure
//!
//! - `options` - Cluster target and observation table (`DeployOptions`)
//! - `result` - What each step touched (`LifecycleResult`)
//! - `tokens` - Proof that a precondition step ran (`StagedBaseImage`, `ClusterCredentials`)
//! - `use_case` - Core controller logic (`DeploymentController`)
//!
//! ## Usage
//!
//! ```ignore
//! use cobaltb::application::deploy::{DeployOptions, DeploymentController};
//!
//! let controller = DeploymentController::new(layout, options, runner, fs, events);
//! let staged = controller.stage_base_image()?;
//! controller.build(&staged, &images)?;
//! ```

mod options;
mod result;
mod tokens;
mod use_case;

pub use options::{DeployOptions, ANALYZER_CONFIG_FILES, BASE_RUNTIME_FILES};
pub use result::{LifecycleResult, LifecycleStep};
pub use tokens::{ClusterCredentials, StagedBaseImage};
pub use use_case::DeploymentController;
