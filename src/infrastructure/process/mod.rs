//! Process execution
//!
//! Implements the CommandRunner port for the local machine.

mod system;

pub use system::SystemCommandRunner;
