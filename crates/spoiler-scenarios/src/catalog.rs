//! Built-in Story Spoiler acceptance suite.

use super::types::{Expectation, Scenario, ScenarioAction, StoryTarget};
use spoiler_core::StoryDto;

/// Id that was never issued; the edit endpoint answers 404 for it.
pub const UNKNOWN_EDIT_ID: &str = "1234210993811-";
/// Id that was never issued; the delete endpoint answers 400 for it.
pub const UNKNOWN_DELETE_ID: &str = "1241124124--";

/// The seven Story Spoiler scenarios, in execution order.
///
/// Scenarios 2 and 4 act on the story captured by scenario 1.
#[must_use]
pub fn story_spoiler_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new(
            "create_story_with_required_fields",
            "Creating a story with title and description returns 201 and a storyId",
            ScenarioAction::CreateStory {
                story: StoryDto::new("New Story", "some cool story here", ""),
                capture_id: true,
            },
            Expectation::status(201).with_body("Successfully created!"),
        ),
        Scenario::new(
            "edit_created_story",
            "Editing the created story returns 200",
            ScenarioAction::EditStory {
                target: StoryTarget::Created,
                story: StoryDto::new("Updated Story Title", "This is new cool story", ""),
            },
            Expectation::status(200).with_body("Successfully edited"),
        ),
        Scenario::new(
            "list_all_stories",
            "Listing stories returns 200 and a non-empty array",
            ScenarioAction::ListStories,
            Expectation::status(200).with_non_empty_array(),
        ),
        Scenario::new(
            "delete_created_story",
            "Deleting the created story returns 200",
            ScenarioAction::DeleteStory {
                target: StoryTarget::Created,
            },
            Expectation::status(200).with_body("Deleted successfully!"),
        ),
        Scenario::new(
            "create_story_without_required_fields",
            "Creating a story with null title and description returns 400",
            ScenarioAction::CreateStory {
                story: StoryDto {
                    title: None,
                    description: None,
                    url: Some(String::new()),
                },
                capture_id: false,
            },
            Expectation::status(400),
        ),
        Scenario::new(
            "edit_non_existing_story",
            "Editing an id that was never issued returns 404",
            ScenarioAction::EditStory {
                target: StoryTarget::Literal(UNKNOWN_EDIT_ID.to_owned()),
                story: StoryDto::new("Non existing story", "Trying to update", ""),
            },
            Expectation::status(404).with_body("No spoilers..."),
        ),
        Scenario::new(
            "delete_non_existing_story",
            "Deleting an id that was never issued returns 400",
            ScenarioAction::DeleteStory {
                target: StoryTarget::Literal(UNKNOWN_DELETE_ID.to_owned()),
            },
            Expectation::status(400).with_body("Unable to delete this story spoiler!"),
        ),
    ]
}
