//! Jokes Error Types
//!
//! This module provides jokes-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::kv_store::StoreError;
use thiserror::Error;

/// Jokes-specific result type alias
pub type JokesResult<T> = Result<T, JokesError>;

/// Generic fallback when a fetch error carries no text
pub const FETCH_FAILED_FALLBACK: &str = "Failed to fetch joke";

/// Jokes-specific error variants
#[derive(Debug, Error)]
pub enum JokesError {
    /// Network or HTTP failure talking to the joke service
    #[error("{0}")]
    Fetch(String),

    /// Service answered but with no usable joke
    #[error("No joke data received from API")]
    EmptyResponse,

    /// Key-value store failure (unavailable, quota exceeded)
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    /// Stored collection is not valid JSON / not a joke list
    #[error("Stored collection is unreadable: {0}")]
    CorruptCollection(#[source] serde_json::Error),

    /// Collection could not be encoded for storage
    #[error("Collection could not be serialized: {0}")]
    Serialization(#[source] serde_json::Error),

    /// No saved joke with this id
    #[error("Joke not found: {0}")]
    NotFound(String),

    /// Rating outside 0-5
    #[error("Rating must be between 0 and 5, got {0}")]
    InvalidRating(u8),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl JokesError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            JokesError::Fetch(_) => ErrorKind::FetchFailure,
            JokesError::EmptyResponse => ErrorKind::EmptyResponse,
            JokesError::Storage(_) | JokesError::CorruptCollection(_) => {
                ErrorKind::StorageUnavailable
            }
            JokesError::NotFound(_) => ErrorKind::NotFound,
            JokesError::InvalidRating(_) => ErrorKind::InvalidInput,
            JokesError::Serialization(_) | JokesError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Text shown to the user, never empty
    pub fn user_message(&self) -> String {
        let text = self.to_string();
        if text.trim().is_empty() {
            FETCH_FAILED_FALLBACK.to_string()
        } else {
            text
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            JokesError::Storage(e) => {
                tracing::error!(error = %e, "Joke storage error");
            }
            JokesError::Serialization(e) => {
                tracing::error!(error = %e, "Joke collection serialization error");
            }
            JokesError::Internal(msg) => {
                tracing::error!(message = %msg, "Jokes internal error");
            }
            JokesError::CorruptCollection(e) => {
                tracing::warn!(error = %e, "Stored joke collection is corrupt");
            }
            JokesError::Fetch(msg) => {
                tracing::warn!(message = %msg, "Joke fetch failed");
            }
            JokesError::EmptyResponse => {
                tracing::warn!("Joke service returned no usable joke");
            }
            _ => {
                tracing::debug!(error = %self, "Jokes error");
            }
        }
    }
}

impl From<JokesError> for AppError {
    fn from(err: JokesError) -> Self {
        let kind = err.kind();
        let message = err.user_message();
        AppError::new(kind, message)
    }
}
