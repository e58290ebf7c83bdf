//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod cluster_target;
mod image_set;
mod test_filter;
mod verbosity;

pub use cluster_target::ClusterTarget;
pub use image_set::ImageSet;
pub use test_filter::{SuiteGroup, TestFilter, NEGATION_PREFIX};
pub use verbosity::{Verbosity, VerbosityLevel};
