//! Application Configuration
//!
//! Configuration for the jokes application layer.

use platform::pagination::{
    DEFAULT_INITIAL_PAGE, DEFAULT_ITEMS_PER_PAGE, DEFAULT_VISIBLE_PAGES, PaginationOptions,
};
use std::time::Duration;

pub const DEFAULT_RANDOM_ENDPOINT: &str = "https://official-joke-api.appspot.com/jokes/random";
pub const DEFAULT_PROGRAMMING_ENDPOINT: &str =
    "https://official-joke-api.appspot.com/jokes/programming/random";
pub const DEFAULT_STORAGE_KEY: &str = "savedJokes";

/// Save messages stay up for this many fade durations
const MESSAGE_CLEAR_FADES: u32 = 6;

/// Typewriter pacing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingTimings {
    /// Wait before the first character
    pub fade: Duration,
    /// Wait between characters
    pub per_char: Duration,
    /// Wait after the last character before typing ends
    pub settle: Duration,
}

impl Default for TypingTimings {
    fn default() -> Self {
        Self {
            fade: Duration::from_millis(500),
            per_char: Duration::from_millis(25),
            settle: Duration::from_millis(300),
        }
    }
}

impl TypingTimings {
    /// No pauses at all
    pub const fn instant() -> Self {
        Self {
            fade: Duration::ZERO,
            per_char: Duration::ZERO,
            settle: Duration::ZERO,
        }
    }
}

/// Jokes application configuration
#[derive(Debug, Clone)]
pub struct JokesConfig {
    /// Endpoint for general jokes
    pub random_endpoint: String,
    /// Endpoint for programming jokes
    pub programming_endpoint: String,
    /// Key-value slot holding the saved collection
    pub storage_key: String,
    /// Collection page size
    pub items_per_page: usize,
    /// Width of the page-number window
    pub visible_pages: usize,
    /// Reveal animation pacing
    pub typing: TypingTimings,
    /// HTTP request timeout
    pub request_timeout: Duration,
}

impl Default for JokesConfig {
    fn default() -> Self {
        Self {
            random_endpoint: DEFAULT_RANDOM_ENDPOINT.to_string(),
            programming_endpoint: DEFAULT_PROGRAMMING_ENDPOINT.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            visible_pages: DEFAULT_VISIBLE_PAGES,
            typing: TypingTimings::default(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl JokesConfig {
    /// How long a save message stays visible
    pub fn message_clear_delay(&self) -> Duration {
        self.typing.fade * MESSAGE_CLEAR_FADES
    }

    pub fn pagination_options(&self) -> PaginationOptions {
        PaginationOptions {
            items_per_page: self.items_per_page,
            initial_page: DEFAULT_INITIAL_PAGE,
        }
    }
}
