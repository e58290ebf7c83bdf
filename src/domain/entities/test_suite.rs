//! Test suite catalog

/// Identity of one test suite (a directory of test binaries under `out/`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SuiteId {
    Gtests,
    GoTests,
    GtestsBtEmulator,
    E2eTests,
    GtestsCloudBt,
}

impl SuiteId {
    pub fn suite(&self) -> &'static TestSuite {
        match self {
            SuiteId::Gtests => &SUITE_CATALOG[0],
            SuiteId::GoTests => &SUITE_CATALOG[1],
            SuiteId::GtestsBtEmulator => &SUITE_CATALOG[2],
            SuiteId::E2eTests => &SUITE_CATALOG[3],
            SuiteId::GtestsCloudBt => &SUITE_CATALOG[4],
        }
    }

    /// Directory name under the build output directory
    pub fn dir(&self) -> &'static str {
        match self {
            SuiteId::Gtests => "gtests",
            SuiteId::GoTests => "go_tests",
            SuiteId::GtestsBtEmulator => "gtests_btemulator",
            SuiteId::E2eTests => "e2e_tests",
            SuiteId::GtestsCloudBt => "gtests_cloud_bt",
        }
    }
}

impl std::fmt::Display for SuiteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dir())
    }
}

/// A suite and the external dependencies its tests assume are running
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestSuite {
    pub id: SuiteId,
    /// Tests talk to a local Bigtable Emulator
    pub needs_storage_emulator: bool,
    /// Tests talk to a running Shuffler, Analyzer Service and Report Master
    pub needs_pipeline_processes: bool,
}

/// Every suite, in execution order
pub const SUITE_CATALOG: [TestSuite; 5] = [
    TestSuite {
        id: SuiteId::Gtests,
        needs_storage_emulator: false,
        needs_pipeline_processes: false,
    },
    TestSuite {
        id: SuiteId::GoTests,
        needs_storage_emulator: false,
        needs_pipeline_processes: false,
    },
    TestSuite {
        id: SuiteId::GtestsBtEmulator,
        needs_storage_emulator: true,
        needs_pipeline_processes: false,
    },
    TestSuite {
        id: SuiteId::E2eTests,
        needs_storage_emulator: true,
        needs_pipeline_processes: true,
    },
    TestSuite {
        id: SuiteId::GtestsCloudBt,
        needs_storage_emulator: false,
        needs_pipeline_processes: false,
    },
];
