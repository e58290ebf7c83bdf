//! Command handlers
//!
//! One handler per subcommand. Each builds the use case from the session's
//! infrastructure, runs it, and returns the process exit code.

pub mod clean;
pub mod gce;
pub mod session;
pub mod start;
