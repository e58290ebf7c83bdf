//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all process and file I/O.
//!
//! ## Structure
//!
//! - `environment` - Variables inherited by every spawned tool
//! - `fs/` - Local file system
//! - `process/` - Command runner over `std::process`
//! - `services/` - Local pipeline processes and the dependency starter
//! - `suites/` - Directory-based test suite runner

pub mod environment;
pub mod fs;
pub mod process;
pub mod services;
pub mod suites;

// Re-export for convenience
pub use environment::EnvironmentContext;
pub use fs::LocalFs;
pub use process::SystemCommandRunner;
pub use services::{LocalProcesses, LocalServiceStarter};
pub use suites::DirectorySuiteRunner;
