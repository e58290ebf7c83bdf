//! Image selection for the `gce_*` commands

use crate::domain::entities::ImageId;
use crate::domain::value_objects::ImageSet;

/// Chooses which images a lifecycle command operates on
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageSelector;

impl ImageSelector {
    pub fn new() -> Self {
        Self
    }

    /// Select from the `--a` / `--s` flags.
    ///
    /// The shuffler flag is checked first, so passing both selects only the
    /// shuffler. Neither flag selects the whole catalog.
    pub fn select(&self, analyzer_only: bool, shuffler_only: bool) -> ImageSet {
        if shuffler_only {
            ImageSet::single(ImageId::Shuffler)
        } else if analyzer_only {
            ImageSet::single(ImageId::Analyzer)
        } else {
            ImageSet::full()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_selects_full_catalog() {
        assert_eq!(ImageSelector::new().select(false, false), ImageSet::full());
    }

    #[test]
    fn analyzer_flag() {
        assert_eq!(
            ImageSelector::new().select(true, false),
            ImageSet::single(ImageId::Analyzer)
        );
    }

    #[test]
    fn shuffler_flag() {
        assert_eq!(
            ImageSelector::new().select(false, true),
            ImageSet::single(ImageId::Shuffler)
        );
    }

    #[test]
    fn shuffler_wins_when_both_set() {
        assert_eq!(
            ImageSelector::new().select(true, true),
            ImageSet::single(ImageId::Shuffler)
        );
    }
}
