//! Reasons a scenario can fail.

use spoiler_core::Error as ClientError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which kind of check a scenario failed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Status code mismatch
    Status,
    /// Body text, shape or payload did not match
    Body,
    /// The request never produced a response
    Transport,
    /// The scenario depended on state an earlier scenario did not produce
    Context,
}

/// A failed check inside a single scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// The response status differs from the expected one.
    #[error("expected HTTP status {expected}, got {actual}")]
    UnexpectedStatus {
        /// Expected status code
        expected: u16,
        /// Received status code
        actual: u16,
    },

    /// The body lacks an expected substring.
    #[error("response body does not contain {expected:?}")]
    MissingText {
        /// Substring that was not found
        expected: String,
    },

    /// The body parsed as JSON but is not an array.
    #[error("expected a JSON array of stories")]
    NotAnArray,

    /// The body is an empty JSON array.
    #[error("stories array should not be empty")]
    EmptyArray,

    /// A create response carried no usable `storyId`.
    #[error("storyId should not be null or empty")]
    MissingStoryId,

    /// An edit or delete targeted the created story before one existed.
    #[error("no story has been created by an earlier scenario")]
    NoCreatedStory,

    /// Transport or parse failure.
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl ScenarioError {
    /// Category of the failed check
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::UnexpectedStatus { .. } => FailureKind::Status,
            Self::MissingText { .. }
            | Self::NotAnArray
            | Self::EmptyArray
            | Self::MissingStoryId => FailureKind::Body,
            Self::NoCreatedStory => FailureKind::Context,
            Self::Client(error) if error.is_transport() => FailureKind::Transport,
            Self::Client(_) => FailureKind::Body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, from_str};

    #[test]
    fn test_messages_name_expected_values() {
        let status = ScenarioError::UnexpectedStatus {
            expected: 201,
            actual: 401,
        };
        assert_eq!(status.to_string(), "expected HTTP status 201, got 401");

        let text = ScenarioError::MissingText {
            expected: "No spoilers...".to_owned(),
        };
        assert_eq!(
            text.to_string(),
            "response body does not contain \"No spoilers...\""
        );
    }

    #[test]
    fn test_kind_groups_failures() {
        let status = ScenarioError::UnexpectedStatus {
            expected: 200,
            actual: 500,
        };
        assert_eq!(status.kind(), FailureKind::Status);
        assert_eq!(ScenarioError::MissingStoryId.kind(), FailureKind::Body);
        assert_eq!(ScenarioError::NoCreatedStory.kind(), FailureKind::Context);

        let parse: ScenarioError =
            ClientError::from(from_str::<Value>("not json").unwrap_err()).into();
        assert_eq!(parse.kind(), FailureKind::Body);
    }

    #[test]
    fn test_client_error_is_transparent() {
        let error: ScenarioError = ClientError::Config("bad".to_owned()).into();
        assert_eq!(error.to_string(), "Configuration error: bad");
    }
}
