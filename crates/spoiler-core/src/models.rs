//! Wire types exchanged with the Story Spoiler API.

use serde::{Deserialize, Serialize};

/// Story payload sent to the create and edit endpoints.
///
/// Absent fields serialize as JSON `null`, which is how requests with missing
/// required fields are expressed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryDto {
    /// Story title (required by the server)
    pub title: Option<String>,
    /// Story description (required by the server)
    pub description: Option<String>,
    /// Optional picture URL
    pub url: Option<String>,
}

impl StoryDto {
    /// Story with every field populated.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            url: Some(url.into()),
        }
    }
}

/// Message envelope returned by story endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponseDto {
    /// Human-readable outcome message
    #[serde(default)]
    pub msg: Option<String>,
    /// Identifier assigned to a newly created story
    #[serde(default, rename = "storyId", alias = "StoryId")]
    pub story_id: Option<String>,
}

/// Body of the login request.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'creds> {
    /// Account name
    pub username: &'creds str,
    /// Account password
    pub password: &'creds str,
}

/// Body of the login response. Only the token is read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for later requests
    #[serde(default, rename = "accessToken")]
    pub access_token: Option<String>,
}
