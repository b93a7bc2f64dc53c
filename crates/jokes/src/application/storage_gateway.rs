//! Storage Gateway Use Case
//!
//! Owns the saved collection: dedupe on save, id / timestamp assignment,
//! and wholesale rewrites for rating and removal.

use crate::domain::entities::{Joke, JokeInput};
use crate::domain::repository::JokeRepository;
use crate::domain::value_objects::Rating;
use crate::error::{JokesError, JokesResult};
use kernel::id::JokeId;
use platform::clock::{Clock, SystemClock};
use std::sync::Arc;

pub const NO_JOKE_MESSAGE: &str = "No joke to save";
pub const DUPLICATE_MESSAGE: &str = "This joke is already in your collection!";
pub const SAVED_MESSAGE: &str = "Joke saved to your collection!";

/// Result of a save attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub success: bool,
    pub message: String,
}

impl SaveOutcome {
    fn rejected(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
        }
    }

    fn saved() -> Self {
        Self {
            success: true,
            message: SAVED_MESSAGE.to_string(),
        }
    }
}

/// Storage Gateway
pub struct StorageGateway<R, C = SystemClock>
where
    R: JokeRepository,
    C: Clock,
{
    repo: Arc<R>,
    clock: C,
}

impl<R: JokeRepository> StorageGateway<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self::with_clock(repo, SystemClock)
    }
}

impl<R, C> StorageGateway<R, C>
where
    R: JokeRepository,
    C: Clock,
{
    pub fn with_clock(repo: Arc<R>, clock: C) -> Self {
        Self { repo, clock }
    }

    /// Every saved joke in insertion order
    ///
    /// Unreadable storage reads as an empty collection.
    pub fn get_all(&self) -> Vec<Joke> {
        self.repo.load().unwrap_or_else(|e| {
            e.log();
            Vec::new()
        })
    }

    /// Whether a joke with the same setup and punchline is already saved
    pub fn exists(&self, candidate: &JokeInput) -> bool {
        self.get_all().iter().any(|j| j.is_same_joke(candidate))
    }

    /// Append a new joke unless it is missing or already saved
    ///
    /// Rejections come back as an unsuccessful [`SaveOutcome`]. An unreadable
    /// collection is an `Err` and the slot is left as it was.
    pub fn save(&self, candidate: Option<&JokeInput>) -> JokesResult<SaveOutcome> {
        let Some(candidate) = candidate else {
            return Ok(SaveOutcome::rejected(NO_JOKE_MESSAGE));
        };

        let mut jokes = self.repo.load()?;
        if jokes.iter().any(|j| j.is_same_joke(candidate)) {
            tracing::warn!(setup = %candidate.setup, "Duplicate joke not saved");
            return Ok(SaveOutcome::rejected(DUPLICATE_MESSAGE));
        }

        let now = self.clock.now_millis();
        let id = next_free_id(&jokes, now);
        let joke = Joke::new(candidate, id, now);

        tracing::info!(
            joke_id = %joke.id,
            joke_type = %joke.joke_type,
            "Saving joke"
        );

        jokes.push(joke);
        self.repo.store(&jokes)?;

        Ok(SaveOutcome::saved())
    }

    /// Overwrite the persisted collection
    pub fn replace_all(&self, jokes: &[Joke]) -> JokesResult<()> {
        self.repo.store(jokes)?;
        tracing::debug!(count = jokes.len(), "Joke collection replaced");
        Ok(())
    }

    /// Set a saved joke's star rating
    pub fn rate(&self, id: &JokeId, stars: u8) -> JokesResult<Joke> {
        let rating = Rating::new(stars).ok_or(JokesError::InvalidRating(stars))?;

        let mut jokes = self.repo.load()?;
        let joke = jokes
            .iter_mut()
            .find(|j| &j.id == id)
            .ok_or_else(|| JokesError::NotFound(id.to_string()))?;
        joke.rating = rating;
        let updated = joke.clone();

        self.replace_all(&jokes)?;
        tracing::info!(joke_id = %id, rating = stars, "Joke rated");

        Ok(updated)
    }

    /// Drop a saved joke
    pub fn remove(&self, id: &JokeId) -> JokesResult<Joke> {
        let mut jokes = self.repo.load()?;
        let index = jokes
            .iter()
            .position(|j| &j.id == id)
            .ok_or_else(|| JokesError::NotFound(id.to_string()))?;
        let removed = jokes.remove(index);

        self.replace_all(&jokes)?;
        tracing::info!(joke_id = %id, "Joke removed");

        Ok(removed)
    }
}

/// First `joke_<ms>` id at or after `now` not already taken
fn next_free_id(jokes: &[Joke], now: i64) -> JokeId {
    let mut millis = now;
    loop {
        let id = JokeId::from_millis(millis);
        if !jokes.iter().any(|j| j.id == id) {
            return id;
        }
        millis += 1;
    }
}
