//! Property tests for test filter resolution.

use proptest::prelude::*;

use cobaltb::domain::entities::SuiteId;
use cobaltb::domain::services::FilterResolver;
use cobaltb::domain::value_objects::SuiteGroup;

const KEYWORDS: [&str; 6] = ["all", "gtests", "gotests", "btemulator", "e2e", "cloud_bt"];

fn keyword() -> impl Strategy<Value = &'static str> {
    proptest::sample::select(&KEYWORDS[..])
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A negated keyword selects exactly `all` minus that keyword.
    #[test]
    fn property_negation_is_difference_from_all(k in keyword()) {
        let resolver = FilterResolver::new();
        let all = resolver.resolve("all").unwrap();
        let positive = resolver.resolve(k).unwrap();
        let negated = resolver.resolve(&format!("no{}", k)).unwrap();

        let expected: Vec<SuiteId> = all
            .iter()
            .copied()
            .filter(|s| !positive.contains(s))
            .collect();
        prop_assert_eq!(negated, expected);
    }

    /// PROPERTY: Only the explicit cloud_bt keyword selects the cloud suite.
    #[test]
    fn property_cloud_bt_only_when_explicit(k in keyword(), negate in any::<bool>()) {
        let filter = if negate { format!("no{}", k) } else { k.to_string() };
        let suites = FilterResolver::new().resolve(&filter).unwrap();

        let explicit = !negate && k == "cloud_bt";
        prop_assert_eq!(suites.contains(&SuiteId::GtestsCloudBt), explicit);
    }

    /// PROPERTY: Resolution preserves catalog order and never repeats a suite.
    #[test]
    fn property_resolution_is_ordered_and_unique(k in keyword(), negate in any::<bool>()) {
        let filter = if negate { format!("no{}", k) } else { k.to_string() };
        let suites = FilterResolver::new().resolve(&filter).unwrap();

        prop_assert!(suites.windows(2).all(|w| w[0] < w[1]));
    }

    /// PROPERTY: Anything outside the keyword list is rejected, negated or not.
    #[test]
    fn property_unknown_keywords_rejected(word in "[a-z_]{1,12}") {
        prop_assume!(SuiteGroup::from_keyword(&word).is_none());
        let resolver = FilterResolver::new();
        prop_assert!(resolver.resolve(&word).is_err() || word.starts_with("no"));
        let negated = format!("no{}", word);
        prop_assert!(resolver.resolve(&negated).is_err());
    }
}
