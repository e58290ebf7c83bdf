//! Property tests for image selection.

use proptest::prelude::*;

use cobaltb::domain::entities::ImageId;
use cobaltb::domain::services::ImageSelector;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 16,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The selection is never empty and follows the flag table.
    #[test]
    fn property_selection_table(analyzer_only in any::<bool>(), shuffler_only in any::<bool>()) {
        let set = ImageSelector::new().select(analyzer_only, shuffler_only);

        prop_assert!(!set.is_empty());
        let expected: &[ImageId] = match (analyzer_only, shuffler_only) {
            (_, true) => &[ImageId::Shuffler],
            (true, false) => &[ImageId::Analyzer],
            (false, false) => &[ImageId::Analyzer, ImageId::Shuffler],
        };
        prop_assert_eq!(set.ids(), expected);
    }
}
