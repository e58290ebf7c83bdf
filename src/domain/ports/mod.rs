//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod command_runner;
pub mod console_events;
pub mod file_system;
pub mod service_starter;
pub mod suite_runner;

pub use command_runner::{CommandRunner, CommandStatus, ExternalCommand};
pub use console_events::{ConsoleEvent, EventSink, NoopEventSink};
pub use file_system::{FileSystem, FsError, FsResult};
pub use service_starter::{DependencyRequest, ServiceGuard, ServiceStarter};
pub use suite_runner::{SuiteInvocation, SuiteRunner};
