//! Dating-story assignments.
//!
//! Only a handful of characters have a dating scene; the folder name
//! on disk carries a story index rather than the character id, so the
//! association lives in this table.

/// One character's dating-story assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct DatingStory {
    pub character_id: &'static str,
    pub story_index: &'static str,
}

/// All known dating stories, in story order.
pub const DATING_STORIES: &[DatingStory] = &[
    DatingStory {
        character_id: "003303",
        story_index: "1",
    },
    DatingStory {
        character_id: "003402",
        story_index: "2",
    },
    DatingStory {
        character_id: "003203",
        story_index: "3",
    },
    DatingStory {
        character_id: "001106",
        story_index: "4",
    },
    DatingStory {
        character_id: "060802",
        story_index: "5",
    },
    DatingStory {
        character_id: "067603",
        story_index: "6",
    },
    DatingStory {
        character_id: "000296",
        story_index: "7",
    },
];

/// Get the story index for a character, if it has a dating scene.
pub fn story_index(character_id: &str) -> Option<&'static str> {
    DATING_STORIES
        .iter()
        .find(|s| s.character_id == character_id)
        .map(|s| s.story_index)
}

/// Folder name holding a character's dating bundle.
pub fn dating_folder(character_id: &str) -> Option<String> {
    story_index(character_id).map(|n| format!("illust_dating{n}"))
}
