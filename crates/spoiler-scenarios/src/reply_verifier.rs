//! Response verification logic.

use super::error::ScenarioError;
use serde_json::Value;
use spoiler_core::{ApiReply, ApiResponseDto};

/// Reply verifier helper
pub struct ReplyVerifier;

impl ReplyVerifier {
    /// Verify the status code
    ///
    /// # Errors
    /// Returns `UnexpectedStatus` naming both codes on mismatch
    pub fn verify_status(reply: &ApiReply, expected: u16) -> Result<(), ScenarioError> {
        let actual = reply.status().as_u16();
        if actual == expected {
            Ok(())
        } else {
            Err(ScenarioError::UnexpectedStatus { expected, actual })
        }
    }

    /// Verify the body contains `expected`
    ///
    /// # Errors
    /// Returns `MissingText` if the substring is absent
    pub fn verify_body_contains(reply: &ApiReply, expected: &str) -> Result<(), ScenarioError> {
        if reply.contains(expected) {
            Ok(())
        } else {
            Err(ScenarioError::MissingText {
                expected: expected.to_owned(),
            })
        }
    }

    /// Verify the body is a non-empty JSON array, returning its length
    ///
    /// # Errors
    /// Returns an error if the body is not JSON, not an array, or empty
    pub fn verify_non_empty_array(reply: &ApiReply) -> Result<usize, ScenarioError> {
        let value: Value = reply.json()?;
        let Value::Array(items) = value else {
            return Err(ScenarioError::NotAnArray);
        };
        if items.is_empty() {
            return Err(ScenarioError::EmptyArray);
        }
        Ok(items.len())
    }

    /// Pull a non-empty `storyId` out of a create response
    ///
    /// # Errors
    /// Returns an error if the body is not JSON or the id is missing/empty
    pub fn extract_story_id(reply: &ApiReply) -> Result<String, ScenarioError> {
        let response: ApiResponseDto = reply.json()?;
        response
            .story_id
            .filter(|story_id| !story_id.is_empty())
            .ok_or(ScenarioError::MissingStoryId)
    }
}
