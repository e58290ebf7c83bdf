//! Console Event Port
//!
//! Use cases report progress through this port instead of printing, so the
//! banner layout lives in the UI layer and tests can record what happened.

use crate::domain::entities::SuiteId;

/// Event emitted by the test and lifecycle use cases
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEvent {
    /// The suites that are about to run, in order
    TestsPlanned { suites: Vec<SuiteId> },

    /// A suite is about to be run
    SuiteStarted { suite: SuiteId },

    /// A suite ran to completion
    SuiteFinished { suite: SuiteId, passed: bool },

    /// A suite could not run because a required argument is missing
    SuiteMisconfigured { suite: SuiteId, message: String },

    /// Every selected suite has been handled
    TestsFinished { passed: bool },

    /// An image build is about to be invoked
    ImageBuilding { image: String },

    /// An image is being tagged and pushed
    ImagePublishing { image: String, tag: String },

    /// An image is being started on the cluster
    ImageStarting { image: String },

    /// An image's service and deployment are being deleted
    ImageStopping { image: String },
}

/// Trait for receiving console events
///
/// Implementations:
/// - `TerminalEventSink`: banners and progress lines on stdout
/// - `NoopEventSink`: silent operation
pub trait EventSink {
    fn on_event(&self, event: ConsoleEvent);
}

impl<T: EventSink + ?Sized> EventSink for &T {
    fn on_event(&self, event: ConsoleEvent) {
        (**self).on_event(event)
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn on_event(&self, _event: ConsoleEvent) {}
}
