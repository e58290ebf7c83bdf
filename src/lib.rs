//! cobaltb - operator console for the Cobalt pipeline
//!
//! Tests the pipeline (shuffler, analyzer service, report master) locally and
//! manages its container images on a remote cluster. The console does not
//! implement the pipeline; it drives the tools that build, test and deploy it.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use config::{Config, ProjectLayout};
pub use error::{ConsoleError, ConsoleResult};
