//! Repository Traits
//!
//! Interfaces for data persistence and the remote joke feed.
//! Implementations are in the infrastructure layer.

use crate::domain::entities::{Joke, JokeInput};
use crate::domain::value_objects::JokeType;
use crate::error::JokesResult;

/// Saved-joke collection repository
///
/// The collection is read and written as a whole; there is no per-record
/// update.
pub trait JokeRepository {
    /// Load the full collection in insertion order
    fn load(&self) -> JokesResult<Vec<Joke>>;

    /// Overwrite the full collection
    fn store(&self, jokes: &[Joke]) -> JokesResult<()>;
}

/// Remote joke feed
#[trait_variant::make(JokeSource: Send)]
pub trait LocalJokeSource {
    /// Fetch one joke of the requested type
    async fn fetch(&self, joke_type: JokeType) -> JokesResult<JokeInput>;
}
