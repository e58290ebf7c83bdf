//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `TestOrchestrator` - Runs test suites with their dependencies
//! - `DeploymentController` - Builds, publishes, starts and stops images
//! - `CleanUseCase` - Removes build output

pub mod clean;
pub mod deploy;
pub mod test_run;

pub use clean::{CleanOptions, CleanResult, CleanUseCase};
pub use deploy::{
    ClusterCredentials, DeployOptions, DeploymentController, LifecycleResult, LifecycleStep,
    StagedBaseImage,
};
pub use test_run::{RunResult, SuiteOutcome, SuiteStatus, TestOptions, TestOrchestrator};
