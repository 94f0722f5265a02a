//! Ordered acceptance scenarios for the Story Spoiler API
//!
//! Provides:
//! - Scenario descriptors (name, action, expectation) as serde data
//! - The built-in seven-scenario suite
//! - A session fixture that logs in once and owns the authenticated client
//! - A sequential runner that threads the created story id between scenarios

#![cfg_attr(
    test,
    allow(
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::missing_panics_doc,
        clippy::missing_errors_doc,
        reason = "Allow for tests"
    )
)]

pub mod catalog;
pub mod error;
pub mod reply_verifier;
pub mod report;
pub mod scenario;
pub mod session;
pub mod types;
pub mod verification_result;

pub use error::{FailureKind, ScenarioError};
pub use report::{RunReport, ScenarioOutcome};
pub use scenario::ScenarioRunner;
pub use session::{ScenarioContext, SessionFixture};
pub use types::{Expectation, Scenario, ScenarioAction, StoryTarget};
pub use verification_result::{CheckFailure, VerificationResult};
