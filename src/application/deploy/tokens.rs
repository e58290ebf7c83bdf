//! Precondition tokens
//!
//! Values that can only be obtained by running the step they stand for.
//! Operations that depend on that step take the token by reference, so the
//! ordering is checked by the compiler rather than at run time.

/// The base image build context has been staged under `out/cobalt`
#[derive(Debug)]
pub struct StagedBaseImage {
    _private: (),
}

impl StagedBaseImage {
    pub(super) fn new() -> Self {
        Self { _private: () }
    }
}

/// Local credentials have been fetched for the configured cluster
#[derive(Debug)]
pub struct ClusterCredentials {
    _private: (),
}

impl ClusterCredentials {
    pub(super) fn new() -> Self {
        Self { _private: () }
    }
}
