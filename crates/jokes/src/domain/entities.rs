//! Domain Entities
//!
//! Core business entities for the jokes domain.

use crate::domain::value_objects::{JokeType, Rating};
use kernel::id::JokeId;
use serde::{Deserialize, Serialize};

/// A joke as delivered by the joke service, before it is saved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JokeInput {
    pub setup: String,
    pub punchline: String,
    #[serde(rename = "type", default)]
    pub joke_type: JokeType,
}

impl JokeInput {
    pub fn new(
        setup: impl Into<String>,
        punchline: impl Into<String>,
        joke_type: JokeType,
    ) -> Self {
        Self {
            setup: setup.into(),
            punchline: punchline.into(),
            joke_type,
        }
    }
}

/// Joke entity - a saved member of the collection
///
/// Serialized with the field names persisted collections already use
/// (`id`, `setup`, `punchline`, `type`, `rating`, `createdAt`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Joke {
    pub id: JokeId,
    pub setup: String,
    pub punchline: String,
    #[serde(rename = "type", default)]
    pub joke_type: JokeType,
    #[serde(default)]
    pub rating: Rating,
    /// Epoch milliseconds at save time
    #[serde(default)]
    pub created_at: i64,
}

impl Joke {
    /// Create a new, unrated joke from service input
    pub fn new(input: &JokeInput, id: JokeId, created_at_ms: i64) -> Self {
        Self {
            id,
            setup: input.setup.clone(),
            punchline: input.punchline.clone(),
            joke_type: input.joke_type,
            rating: Rating::UNRATED,
            created_at: created_at_ms,
        }
    }

    /// Same setup and punchline (exact, case-sensitive)
    pub fn is_same_joke(&self, candidate: &JokeInput) -> bool {
        self.setup == candidate.setup && self.punchline == candidate.punchline
    }

    pub fn to_input(&self) -> JokeInput {
        JokeInput::new(self.setup.clone(), self.punchline.clone(), self.joke_type)
    }
}
