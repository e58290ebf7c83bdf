//! Deployable image catalog
//!
//! Every image is built on top of the shared `cobalt` base image, which only
//! carries runtime libraries and is never published or started.

/// Name of the shared base image
pub const BASE_IMAGE: &str = "cobalt";

/// Identity of a publishable, startable image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ImageId {
    Analyzer,
    Shuffler,
}

impl ImageId {
    pub fn name(&self) -> &'static str {
        match self {
            ImageId::Analyzer => "analyzer",
            ImageId::Shuffler => "shuffler",
        }
    }

    pub fn image(&self) -> &'static DeployableImage {
        match self {
            ImageId::Analyzer => &IMAGE_CATALOG[0],
            ImageId::Shuffler => &IMAGE_CATALOG[1],
        }
    }
}

impl std::fmt::Display for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A service image and the port its container listens on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployableImage {
    pub id: ImageId,
    pub container_port: u16,
}

/// Every deployable image, in build/start order
pub const IMAGE_CATALOG: [DeployableImage; 2] = [
    DeployableImage {
        id: ImageId::Analyzer,
        container_port: 8080,
    },
    DeployableImage {
        id: ImageId::Shuffler,
        container_port: 50051,
    },
];

/// Paths inside the analyzer container where its registration files live
pub const ANALYZER_METRICS_PATH: &str = "/etc/cobalt/registered_metrics.txt";
pub const ANALYZER_REPORTS_PATH: &str = "/etc/cobalt/registered_reports.txt";
pub const ANALYZER_ENCODINGS_PATH: &str = "/etc/cobalt/registered_encodings.txt";

impl DeployableImage {
    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    /// Arguments passed to the container entrypoint on start.
    ///
    /// Only the analyzer takes arguments: the observation table and its three
    /// registration files. Every other image starts with none.
    pub fn start_args(&self, observation_table: &str) -> Vec<String> {
        match self.id {
            ImageId::Analyzer => vec![
                "-table".to_string(),
                observation_table.to_string(),
                "-metrics".to_string(),
                ANALYZER_METRICS_PATH.to_string(),
                "-reports".to_string(),
                ANALYZER_REPORTS_PATH.to_string(),
                "-encodings".to_string(),
                ANALYZER_ENCODINGS_PATH.to_string(),
            ],
            ImageId::Shuffler => Vec::new(),
        }
    }
}
