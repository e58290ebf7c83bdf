//! Domain Entities
//!
//! The fixed catalogs the console selects from. Neither catalog changes at
//! runtime; commands only pick subsets.

mod image;
mod test_suite;

pub use image::{
    DeployableImage, ImageId, ANALYZER_ENCODINGS_PATH, ANALYZER_METRICS_PATH,
    ANALYZER_REPORTS_PATH, BASE_IMAGE, IMAGE_CATALOG,
};
pub use test_suite::{SuiteId, TestSuite, SUITE_CATALOG};
