//! Scenario descriptors

use serde::{Deserialize, Serialize};
use spoiler_core::StoryDto;

/// One named request/assertion unit of a run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Scenario {
    /// Scenario name, used in reports
    pub name: String,
    /// What this scenario checks
    #[serde(default)]
    pub description: String,
    /// Request to issue
    pub action: ScenarioAction,
    /// Expected outcome of the request
    pub expect: Expectation,
}

impl Scenario {
    /// Create a scenario.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        action: ScenarioAction,
        expect: Expectation,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            action,
            expect,
        }
    }
}

/// Request issued by a scenario
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioAction {
    /// Create a story
    CreateStory {
        /// Payload to submit
        story: StoryDto,
        /// Store the returned `storyId` for later scenarios
        #[serde(default)]
        capture_id: bool,
    },
    /// Edit an existing story
    EditStory {
        /// Which story to edit
        target: StoryTarget,
        /// Replacement payload
        story: StoryDto,
    },
    /// List every story
    ListStories,
    /// Delete a story
    DeleteStory {
        /// Which story to delete
        target: StoryTarget,
    },
}

impl ScenarioAction {
    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::CreateStory { .. } => "create story",
            Self::EditStory { .. } => "edit story",
            Self::ListStories => "list stories",
            Self::DeleteStory { .. } => "delete story",
        }
    }

    /// Whether this action stores the created story id.
    pub fn captures_id(&self) -> bool {
        matches!(
            self,
            Self::CreateStory {
                capture_id: true,
                ..
            }
        )
    }
}

/// Story an edit or delete is aimed at
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoryTarget {
    /// The story captured by an earlier create scenario
    Created,
    /// A fixed identifier
    Literal(String),
}

/// Expected outcome of a scenario
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Expectation {
    /// Expected HTTP status code
    pub status: u16,
    /// Substring the body must contain
    #[serde(default)]
    pub body_contains: Option<String>,
    /// Body must be a JSON array with at least one element
    #[serde(default)]
    pub non_empty_array: bool,
}

impl Expectation {
    /// Expect `status` and nothing else.
    #[must_use]
    pub fn status(status: u16) -> Self {
        Self {
            status,
            body_contains: None,
            non_empty_array: false,
        }
    }

    /// Also require `text` in the body.
    #[must_use]
    pub fn with_body(mut self, text: impl Into<String>) -> Self {
        self.body_contains = Some(text.into());
        self
    }

    /// Also require a non-empty JSON array body.
    #[must_use]
    pub fn with_non_empty_array(mut self) -> Self {
        self.non_empty_array = true;
        self
    }
}
