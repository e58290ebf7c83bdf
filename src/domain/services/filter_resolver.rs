//! Test filter resolution
//!
//! Maps a `--tests` expression to the concrete, ordered list of suites to run.

use crate::domain::entities::SuiteId;
use crate::domain::value_objects::{SuiteGroup, TestFilter};
use crate::error::ConsoleResult;

/// Resolves filter keywords against the suite catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterResolver;

impl FilterResolver {
    pub fn new() -> Self {
        Self
    }

    /// Suites denoted by a positive group keyword.
    ///
    /// `all` deliberately leaves out the Cloud Bigtable suite, which talks to
    /// a real cloud instance and must be asked for by name.
    pub fn members(&self, group: SuiteGroup) -> &'static [SuiteId] {
        match group {
            SuiteGroup::All => &[
                SuiteId::Gtests,
                SuiteId::GoTests,
                SuiteId::GtestsBtEmulator,
                SuiteId::E2eTests,
            ],
            SuiteGroup::Gtests => &[SuiteId::Gtests],
            SuiteGroup::Gotests => &[SuiteId::GoTests],
            SuiteGroup::BtEmulator => &[SuiteId::GtestsBtEmulator],
            SuiteGroup::E2e => &[SuiteId::E2eTests],
            SuiteGroup::CloudBt => &[SuiteId::GtestsCloudBt],
        }
    }

    /// Resolve an already-parsed filter
    pub fn resolve_filter(&self, filter: TestFilter) -> Vec<SuiteId> {
        match filter {
            TestFilter::Include(group) => self.members(group).to_vec(),
            TestFilter::Exclude(group) => {
                let excluded = self.members(group);
                self.members(SuiteGroup::All)
                    .iter()
                    .copied()
                    .filter(|suite| !excluded.contains(suite))
                    .collect()
            }
        }
    }

    /// Parse and resolve a raw filter string.
    ///
    /// The keyword is validated before anything is resolved, so an unknown
    /// keyword is an error rather than an empty selection.
    pub fn resolve(&self, filter: &str) -> ConsoleResult<Vec<SuiteId>> {
        let filter: TestFilter = filter.parse()?;
        Ok(self.resolve_filter(filter))
    }
}
