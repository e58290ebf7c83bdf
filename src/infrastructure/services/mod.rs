//! Local pipeline services
//!
//! Command lines for every locally runnable process, and the ServiceStarter
//! implementation that brings them up around a test suite.

mod catalog;
mod starter;

pub use catalog::{local_uri, LocalProcesses, ShufflerOptions};
pub use starter::LocalServiceStarter;
