//! Per-scenario check record.

use super::error::{FailureKind, ScenarioError};

/// A check that did not hold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckFailure {
    /// Which kind of check failed
    pub kind: FailureKind,
    /// Human-readable reason
    pub message: String,
}

/// Checks recorded while running one scenario
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationResult {
    /// Checks that held, in order
    pub successes: Vec<String>,
    /// Checks that failed, in order
    pub failures: Vec<CheckFailure>,
}

impl VerificationResult {
    /// Empty record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no check failed
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// Note a check that held
    pub fn add_success(&mut self, message: String) {
        self.successes.push(message);
    }

    /// Note the error that ended the scenario
    pub fn add_error(&mut self, error: &ScenarioError) {
        self.failures.push(CheckFailure {
            kind: error.kind(),
            message: error.to_string(),
        });
    }

    /// Message of the first failure
    pub fn first_failure(&self) -> Option<&str> {
        self.failures.first().map(|failure| failure.message.as_str())
    }

    /// Kind of the first failure
    pub fn failure_kind(&self) -> Option<FailureKind> {
        self.failures.first().map(|failure| failure.kind)
    }
}
