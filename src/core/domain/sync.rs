use crate::core::types::SecretKey;

/// A key that could not be pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushFailure {
    pub key: SecretKey,
    pub reason: String,
}

/// Outcome of a push: every pair is attempted, failures are collected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushReport {
    /// Pairs read from the source
    pub attempted: usize,
    /// Pairs the remote accepted
    pub succeeded: usize,
    /// Secrets created (subset of `succeeded`)
    pub created: usize,
    /// Secrets updated in upsert mode (subset of `succeeded`)
    pub updated: usize,
    /// Per-key failures in source order
    pub failures: Vec<PushFailure>,
}

impl PushReport {
    pub fn is_complete(&self) -> bool {
        self.succeeded == self.attempted
    }
}
