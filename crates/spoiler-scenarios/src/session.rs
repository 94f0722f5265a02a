//! One-time session setup and per-run scenario state.

use super::error::ScenarioError;
use super::types::StoryTarget;
use core::result::Result as CoreResult;
use spoiler_core::{Authenticator, Result, SpoilerConfig, StoryClient};

/// Authenticated client shared by every scenario of a run.
///
/// Built once by [`SessionFixture::setup`] and released by
/// [`SessionFixture::teardown`] after the last scenario.
#[derive(Debug)]
pub struct SessionFixture {
    /// Client carrying the bearer token
    client: StoryClient,
}

impl SessionFixture {
    /// Log in and build the authenticated client.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid, the login call
    /// fails at transport level, or the login status is not a success
    pub async fn setup(config: &SpoilerConfig) -> Result<Self> {
        config.validate()?;

        let authenticator = Authenticator::new(&config.api)?;
        let token = authenticator.fetch_token(&config.credentials).await?;
        let client = StoryClient::new(&config.api, token)?;

        tracing::info!("Session established against {}", client.base_url());
        Ok(Self { client })
    }

    /// Wrap an already authenticated client.
    #[must_use]
    pub fn from_client(client: StoryClient) -> Self {
        Self { client }
    }

    /// The authenticated client.
    pub fn client(&self) -> &StoryClient {
        &self.client
    }

    /// Release the client.
    pub fn teardown(self) {
        tracing::info!("Closing session against {}", self.client.base_url());
        drop(self.client);
    }
}

/// State threaded between scenarios of a single run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScenarioContext {
    /// Id of the most recently created story
    created_story_id: Option<String>,
}

impl ScenarioContext {
    /// Remember the id returned by a create scenario.
    pub fn record_created_story(&mut self, story_id: String) {
        tracing::debug!("Captured storyId {story_id}");
        self.created_story_id = Some(story_id);
    }

    /// Forget the captured id so `created` targets fail until the next capture.
    pub fn clear_created_story(&mut self) {
        self.created_story_id = None;
    }

    /// Id of the most recently created story.
    pub fn created_story_id(&self) -> Option<&str> {
        self.created_story_id.as_deref()
    }

    /// Turn a target into a concrete story id.
    ///
    /// # Errors
    /// Returns `NoCreatedStory` for [`StoryTarget::Created`] before any
    /// story was captured
    pub fn resolve(&self, target: &StoryTarget) -> CoreResult<String, ScenarioError> {
        match target {
            StoryTarget::Created => self
                .created_story_id
                .clone()
                .ok_or(ScenarioError::NoCreatedStory),
            StoryTarget::Literal(story_id) => Ok(story_id.clone()),
        }
    }
}
