//! Domain Services
//!
//! Pure selection logic over the fixed catalogs.
//! These services have no I/O dependencies and are easily testable.

mod filter_resolver;
mod image_selector;

pub use filter_resolver::FilterResolver;
pub use image_selector::ImageSelector;
