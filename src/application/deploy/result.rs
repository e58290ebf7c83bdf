//! Deploy Result
//!
//! Result types for lifecycle operations.

/// A lifecycle operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleStep {
    Build,
    Publish,
    Start,
    Stop,
}

impl LifecycleStep {
    /// Past tense, for summaries
    pub fn verb(&self) -> &'static str {
        match self {
            LifecycleStep::Build => "Built",
            LifecycleStep::Publish => "Published",
            LifecycleStep::Start => "Started",
            LifecycleStep::Stop => "Stopped",
        }
    }
}

/// Result of a completed lifecycle operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleResult {
    pub step: LifecycleStep,
    /// Images handled, in order
    pub images: Vec<&'static str>,
}

impl LifecycleResult {
    pub fn new(step: LifecycleStep) -> Self {
        Self {
            step,
            images: Vec::new(),
        }
    }

    pub fn summary(&self) -> String {
        format!("{} {}", self.step.verb(), self.images.join(", "))
    }
}
