//! Payloads of the trivia provider's HTTP API.
//!
//! Only the fields the game uses are modeled, everything else in the payloads is ignored.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// One entry of `GET /random?count=N`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomClue {
    pub category_id: CategoryId,
}

impl RandomClue {
    pub fn list_from_json(json: &str) -> serde_json::Result<Vec<Self>> {
        serde_json::from_str(json)
    }
}

/// Body of `GET /category?id=<id>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    #[serde(default)]
    pub id: Option<CategoryId>,
    pub title: String,
    #[serde(default)]
    pub clues: Vec<ClueRecord>,
}

impl CategoryRecord {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Trimmed title, or an error when it cannot be told apart from an empty cell.
    pub fn display_title(&self) -> ProviderResult<String> {
        let title = self.title.trim();
        if title.is_empty() || title == PLACEHOLDER {
            return Err(ProviderError::InvalidContent(alloc::format!(
                "unusable category title {:?}",
                self.title
            )));
        }
        Ok(title.to_string())
    }
}

/// Upstream sends `null` for some questions and answers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueRecord {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
}

impl ClueRecord {
    /// Converts into a hidden [`Clue`], skipping records that would render blank or as the placeholder.
    pub fn into_clue(self) -> Option<Clue> {
        fn usable(text: Option<String>) -> Option<String> {
            let text = text?;
            let trimmed = text.trim();
            if trimmed.is_empty() || trimmed == PLACEHOLDER {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Some(Clue::new(usable(self.question)?, usable(self.answer)?))
    }
}
