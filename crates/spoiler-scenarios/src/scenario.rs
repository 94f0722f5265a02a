//! Scenario runner implementation

use crate::error::ScenarioError;
use crate::reply_verifier::ReplyVerifier;
use crate::report::{RunReport, ScenarioOutcome};
use crate::session::{ScenarioContext, SessionFixture};
use crate::types::{Scenario, ScenarioAction};
use crate::verification_result::VerificationResult;
use core::result::Result as CoreResult;
use serde_json::from_str;
use spoiler_core::{ApiReply, Result, SpoilerConfig, StoryClient};
use std::fs;
use std::path::Path;

/// Runs scenarios one at a time, in declared order, against one session
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    /// Scenarios in execution order
    scenarios: Vec<Scenario>,
}

impl ScenarioRunner {
    /// Runner over an explicit scenario list
    #[must_use]
    pub fn new(scenarios: Vec<Scenario>) -> Self {
        Self { scenarios }
    }

    /// Runner over the built-in Story Spoiler suite
    #[must_use]
    pub fn story_spoiler() -> Self {
        Self::new(crate::catalog::story_spoiler_scenarios())
    }

    /// Load a scenario list from a JSON file
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let scenarios: Vec<Scenario> = from_str(&content)?;
        tracing::debug!(
            "Loaded {} scenarios from {}",
            scenarios.len(),
            path.display()
        );
        Ok(Self::new(scenarios))
    }

    /// Scenarios in execution order
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Set up a session, run every scenario, then tear the session down
    ///
    /// # Errors
    /// Returns error only if session setup fails; scenario failures are
    /// recorded in the report
    pub async fn run(&self, config: &SpoilerConfig) -> Result<RunReport> {
        let session = SessionFixture::setup(config).await?;
        let report = self.run_with(&session).await;
        session.teardown();
        Ok(report)
    }

    /// Run every scenario against an existing session
    pub async fn run_with(&self, session: &SessionFixture) -> RunReport {
        let mut context = ScenarioContext::default();
        let mut report = RunReport::default();

        for (index, scenario) in self.scenarios.iter().enumerate() {
            tracing::info!(
                "Scenario {}: {} ({})",
                index + 1,
                scenario.name,
                scenario.action.label()
            );

            let mut verification = VerificationResult::new();
            match Self::execute(session.client(), &mut context, scenario, &mut verification).await
            {
                Ok(()) => tracing::info!("✓ {} PASSED", scenario.name),
                Err(error) => {
                    tracing::error!("✗ {} FAILED: {error}", scenario.name);
                    verification.add_error(&error);
                }
            }

            report.push(ScenarioOutcome {
                name: scenario.name.clone(),
                verification,
            });
        }

        report
    }

    /// Issue the scenario's request and check the reply, stopping at the
    /// first failed check
    async fn execute(
        client: &StoryClient,
        context: &mut ScenarioContext,
        scenario: &Scenario,
        verification: &mut VerificationResult,
    ) -> CoreResult<(), ScenarioError> {
        let reply = Self::perform(client, context, &scenario.action).await?;
        let expect = &scenario.expect;

        ReplyVerifier::verify_status(&reply, expect.status)?;
        verification.add_success(format!("status {}", expect.status));

        if scenario.action.captures_id() {
            context.clear_created_story();
            let story_id = ReplyVerifier::extract_story_id(&reply)?;
            verification.add_success(format!("captured storyId {story_id}"));
            context.record_created_story(story_id);
        }

        if let Some(ref expected) = expect.body_contains {
            ReplyVerifier::verify_body_contains(&reply, expected)?;
            verification.add_success(format!("body contains {expected:?}"));
        }

        if expect.non_empty_array {
            let count = ReplyVerifier::verify_non_empty_array(&reply)?;
            verification.add_success(format!("{count} stories listed"));
        }

        Ok(())
    }

    /// Send the request an action describes
    async fn perform(
        client: &StoryClient,
        context: &ScenarioContext,
        action: &ScenarioAction,
    ) -> CoreResult<ApiReply, ScenarioError> {
        let reply = match action {
            ScenarioAction::CreateStory { story, .. } => client.create_story(story).await?,
            ScenarioAction::EditStory { target, story } => {
                let story_id = context.resolve(target)?;
                client.edit_story(&story_id, story).await?
            }
            ScenarioAction::ListStories => client.list_stories().await?,
            ScenarioAction::DeleteStory { target } => {
                let story_id = context.resolve(target)?;
                client.delete_story(&story_id).await?
            }
        };
        Ok(reply)
    }
}
