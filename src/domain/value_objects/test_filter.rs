//! Test filter value object
//!
//! A filter is a group keyword, optionally prefixed with `no` to mean
//! "every suite in `all` except this group".

use std::str::FromStr;

use crate::error::ConsoleError;

/// Prefix that negates a group keyword
pub const NEGATION_PREFIX: &str = "no";

/// Named group of test suites that can be requested with `--tests`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuiteGroup {
    /// Every suite except the Cloud Bigtable suite
    All,
    Gtests,
    Gotests,
    BtEmulator,
    E2e,
    /// Only reachable by asking for it explicitly
    CloudBt,
}

impl SuiteGroup {
    /// Every group, in catalog order
    pub const ALL_GROUPS: [SuiteGroup; 6] = [
        SuiteGroup::All,
        SuiteGroup::Gtests,
        SuiteGroup::Gotests,
        SuiteGroup::BtEmulator,
        SuiteGroup::E2e,
        SuiteGroup::CloudBt,
    ];

    pub fn keyword(&self) -> &'static str {
        match self {
            SuiteGroup::All => "all",
            SuiteGroup::Gtests => "gtests",
            SuiteGroup::Gotests => "gotests",
            SuiteGroup::BtEmulator => "btemulator",
            SuiteGroup::E2e => "e2e",
            SuiteGroup::CloudBt => "cloud_bt",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL_GROUPS
            .into_iter()
            .find(|group| group.keyword() == keyword)
    }
}

impl std::fmt::Display for SuiteGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// A parsed `--tests` expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestFilter {
    /// Run exactly the suites of this group
    Include(SuiteGroup),
    /// Run every suite of `all` that is not in this group
    Exclude(SuiteGroup),
}

impl Default for TestFilter {
    fn default() -> Self {
        TestFilter::Include(SuiteGroup::All)
    }
}

impl TestFilter {
    /// Every spelling accepted on the command line
    pub fn valid_keywords() -> Vec<String> {
        let mut keywords = Vec::new();
        for group in SuiteGroup::ALL_GROUPS {
            keywords.push(group.keyword().to_string());
            keywords.push(format!("{}{}", NEGATION_PREFIX, group.keyword()));
        }
        keywords
    }
}

impl FromStr for TestFilter {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negated, keyword) = match s.strip_prefix(NEGATION_PREFIX) {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let group =
            SuiteGroup::from_keyword(keyword).ok_or_else(|| ConsoleError::UnknownFilter {
                filter: s.to_string(),
                valid: TestFilter::valid_keywords().join(", "),
            })?;

        Ok(if negated {
            TestFilter::Exclude(group)
        } else {
            TestFilter::Include(group)
        })
    }
}

impl std::fmt::Display for TestFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestFilter::Include(group) => write!(f, "{}", group),
            TestFilter::Exclude(group) => write!(f, "{}{}", NEGATION_PREFIX, group),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_keyword() {
        assert_eq!(
            "gtests".parse::<TestFilter>().unwrap(),
            TestFilter::Include(SuiteGroup::Gtests)
        );
        assert_eq!(
            "cloud_bt".parse::<TestFilter>().unwrap(),
            TestFilter::Include(SuiteGroup::CloudBt)
        );
    }

    #[test]
    fn parses_negated_keyword() {
        assert_eq!(
            "noe2e".parse::<TestFilter>().unwrap(),
            TestFilter::Exclude(SuiteGroup::E2e)
        );
        assert_eq!(
            "nobtemulator".parse::<TestFilter>().unwrap(),
            TestFilter::Exclude(SuiteGroup::BtEmulator)
        );
    }

    #[test]
    fn rejects_unknown_keyword() {
        let err = "unit".parse::<TestFilter>().unwrap_err();
        assert!(matches!(err, ConsoleError::UnknownFilter { ref filter, .. } if filter == "unit"));
    }

    #[test]
    fn rejects_unknown_negated_keyword() {
        assert!("nounit".parse::<TestFilter>().is_err());
        assert!("no".parse::<TestFilter>().is_err());
    }

    #[test]
    fn display_round_trips_spelling() {
        for keyword in TestFilter::valid_keywords() {
            let filter: TestFilter = keyword.parse().unwrap();
            assert_eq!(filter.to_string(), keyword);
        }
    }

    #[test]
    fn default_is_all() {
        assert_eq!(TestFilter::default(), TestFilter::Include(SuiteGroup::All));
    }
}
