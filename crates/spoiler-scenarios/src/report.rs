//! Per-run outcome collection.

use super::verification_result::VerificationResult;

/// Result of one scenario
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioOutcome {
    /// Scenario name
    pub name: String,
    /// Checks that passed or failed
    pub verification: VerificationResult,
}

impl ScenarioOutcome {
    /// Whether every check passed
    pub fn passed(&self) -> bool {
        self.verification.passed()
    }
}

/// Outcomes of a run, in execution order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// One entry per executed scenario
    outcomes: Vec<ScenarioOutcome>,
}

impl RunReport {
    /// Append an outcome
    pub fn push(&mut self, outcome: ScenarioOutcome) {
        self.outcomes.push(outcome);
    }

    /// All outcomes in execution order
    pub fn outcomes(&self) -> &[ScenarioOutcome] {
        &self.outcomes
    }

    /// Outcome of the scenario called `name`
    pub fn outcome(&self, name: &str) -> Option<&ScenarioOutcome> {
        self.outcomes.iter().find(|outcome| outcome.name == name)
    }

    /// Outcomes that failed
    pub fn failed(&self) -> impl Iterator<Item = &ScenarioOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.passed())
    }

    /// Number of passing scenarios
    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.passed()).count()
    }

    /// Number of failing scenarios
    pub fn failed_count(&self) -> usize {
        self.failed().count()
    }

    /// Whether every scenario passed
    pub fn all_passed(&self) -> bool {
        self.failed_count() == 0
    }

    /// Log a summary of the run
    pub fn log_summary(&self) {
        tracing::info!("=== Scenario Summary ===");
        tracing::info!(
            "{} passed, {} failed",
            self.passed_count(),
            self.failed_count()
        );

        if self.all_passed() {
            tracing::info!("All scenarios passed");
            return;
        }

        tracing::error!("=== Failed Scenarios ===");
        for outcome in self.failed() {
            tracing::error!("{}:", outcome.name);
            for failure in &outcome.verification.failures {
                tracing::error!("  - [{:?}] {}", failure.kind, failure.message);
            }
        }
    }
}
