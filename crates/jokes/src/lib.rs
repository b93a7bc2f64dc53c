//! Jokes Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, filter / sort services, port traits
//! - `application/` - Storage gateway, session state machine, collection view
//! - `infra/` - Key-value repository and HTTP joke feed
//!
//! ## Collection Model
//! - The saved collection is one JSON array in one key-value slot
//! - Every write replaces the whole array (no partial updates)
//! - Two jokes are duplicates when setup and punchline match exactly
//! - Unreadable storage reads as an empty collection; failed writes are errors

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::collection_view::CollectionView;
pub use application::config::{JokesConfig, TypingTimings};
pub use application::session::{JokeSession, MessageKind, SessionState};
pub use application::storage_gateway::{SaveOutcome, StorageGateway};
pub use domain::entities::{Joke, JokeInput};
pub use domain::value_objects::{JokeType, Rating, SortOption};
pub use error::{JokesError, JokesResult};
pub use infra::joke_api::HttpJokeSource;
pub use infra::local_storage::KvJokeRepository;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult, OptionExt, ResultExt},
    kind::ErrorKind,
};
pub use kernel::id::JokeId;
