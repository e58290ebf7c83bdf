//! Deploy Options
//!
//! Where images go and what the base image carries.

use crate::domain::value_objects::ClusterTarget;

/// Runtime libraries copied from the sysroot into the base image build context
pub const BASE_RUNTIME_FILES: [&str; 6] = [
    "lib/libprotobuf.so.10",
    "lib/libgoogleapis.so",
    "lib/libgrpc++.so.1",
    "lib/libgrpc.so.1",
    "lib/libunwind.so.1",
    "share/grpc/roots.pem",
];

/// Registration files copied from the source tree into the analyzer build context
pub const ANALYZER_CONFIG_FILES: [&str; 3] = [
    "config/demo/registered_metrics.txt",
    "config/demo/registered_encodings.txt",
    "config/demo/registered_reports.txt",
];

/// Options for the deployment controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOptions {
    pub target: ClusterTarget,
    /// Full Bigtable table name the analyzer writes observations to
    pub observation_table: String,
}

impl DeployOptions {
    pub fn new(target: ClusterTarget, observation_table: impl Into<String>) -> Self {
        Self {
            target,
            observation_table: observation_table.into(),
        }
    }
}
