//! Joke Session Use Case
//!
//! State machine behind the "tell me a joke" screen:
//!
//! ```text
//! idle ──fetch──▶ loading ──ok──▶ loaded ──reveal──▶ revealed
//!                    │                 ▲                 │
//!                    └──err──▶ error   └──── fetch ──────┘
//! ```
//!
//! Every fetch bumps a generation counter. A completion carrying an older
//! [`FetchTicket`] is dropped, so a slow response can never overwrite the
//! joke a later request already delivered.

use crate::application::config::JokesConfig;
use crate::application::storage_gateway::{SaveOutcome, StorageGateway};
use crate::application::typewriter::Typewriter;
use crate::domain::entities::JokeInput;
use crate::domain::repository::{JokeRepository, JokeSource};
use crate::domain::value_objects::JokeType;
use crate::error::JokesResult;
use platform::clock::{Clock, SystemClock};
use std::sync::Arc;
use tokio::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Revealed,
    Error,
}

impl SessionState {
    /// A joke is on screen and may be saved
    pub fn has_joke(&self) -> bool {
        matches!(self, SessionState::Loaded | SessionState::Revealed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Info,
}

/// Transient feedback after a save attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveMessage {
    pub kind: MessageKind,
    pub text: String,
    pub shown_at: Instant,
}

/// Handle for one in-flight fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    joke_type: JokeType,
}

impl FetchTicket {
    pub fn joke_type(&self) -> JokeType {
        self.joke_type
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Joke Session
pub struct JokeSession<S, R, C = SystemClock>
where
    S: JokeSource,
    R: JokeRepository,
    C: Clock,
{
    source: Arc<S>,
    gateway: Arc<StorageGateway<R, C>>,
    config: Arc<JokesConfig>,
    state: SessionState,
    joke_type: JokeType,
    joke: Option<JokeInput>,
    error: Option<String>,
    typewriter: Typewriter,
    save_message: Option<SaveMessage>,
    is_saved: bool,
    generation: u64,
}

impl<S, R, C> JokeSession<S, R, C>
where
    S: JokeSource,
    R: JokeRepository,
    C: Clock,
{
    pub fn new(
        source: Arc<S>,
        gateway: Arc<StorageGateway<R, C>>,
        config: Arc<JokesConfig>,
    ) -> Self {
        Self {
            source,
            gateway,
            config,
            state: SessionState::Idle,
            joke_type: JokeType::default(),
            joke: None,
            error: None,
            typewriter: Typewriter::new(),
            save_message: None,
            is_saved: false,
            generation: 0,
        }
    }

    // ========================================================================
    // Fetching
    // ========================================================================

    /// Enter `loading` and hand out the ticket the result must carry
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.state = SessionState::Loading;
        self.error = None;
        self.typewriter.reset();
        self.save_message = None;
        self.is_saved = false;

        tracing::debug!(
            generation = self.generation,
            joke_type = %self.joke_type,
            "Fetch started"
        );

        FetchTicket {
            generation: self.generation,
            joke_type: self.joke_type,
        }
    }

    /// Apply a fetch result. Returns `false` when the ticket is stale.
    pub fn complete_fetch(&mut self, ticket: FetchTicket, result: JokesResult<JokeInput>) -> bool {
        if ticket.generation != self.generation || self.state != SessionState::Loading {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                "Stale fetch result dropped"
            );
            return false;
        }

        match result {
            Ok(joke) => {
                tracing::info!(joke_type = %ticket.joke_type, "Joke loaded");
                self.joke = Some(joke);
                self.state = SessionState::Loaded;
            }
            Err(e) => {
                e.log();
                self.error = Some(e.user_message());
                self.joke = None;
                self.state = SessionState::Error;
            }
        }
        true
    }

    /// Fetch a joke of the current type
    pub async fn fetch(&mut self) -> SessionState {
        let ticket = self.begin_fetch();
        let result = self.source.fetch(ticket.joke_type).await;
        self.complete_fetch(ticket, result);
        self.state
    }

    /// Switch feeds and fetch from the new one
    pub async fn toggle_joke_type(&mut self) -> SessionState {
        self.joke_type = self.joke_type.toggled();
        self.fetch().await
    }

    /// Choose the feed for the next fetch
    pub fn set_joke_type(&mut self, joke_type: JokeType) {
        self.joke_type = joke_type;
    }

    // ========================================================================
    // Reveal
    // ========================================================================

    /// Show the punchline. Only a freshly loaded joke can be revealed.
    pub fn reveal(&mut self) -> bool {
        if self.state != SessionState::Loaded {
            return false;
        }
        let Some(joke) = &self.joke else {
            return false;
        };
        self.typewriter.start(&joke.punchline);
        self.state = SessionState::Revealed;
        true
    }

    /// Type the revealed punchline out at the configured pace
    pub async fn animate_reveal(&mut self, on_frame: impl FnMut(&str)) {
        if self.state != SessionState::Revealed {
            return;
        }
        let timings = self.config.typing;
        self.typewriter.run(timings, on_frame).await;
    }

    // ========================================================================
    // Save
    // ========================================================================

    /// Save the current joke. `None` when no joke is loaded.
    ///
    /// Storage failures become an info message instead of an error.
    pub fn save(&mut self) -> Option<SaveOutcome> {
        if !self.state.has_joke() {
            return None;
        }

        let outcome = match self.gateway.save(self.joke.as_ref()) {
            Ok(outcome) => outcome,
            Err(e) => {
                e.log();
                SaveOutcome {
                    success: false,
                    message: e.user_message(),
                }
            }
        };

        self.is_saved = outcome.success;
        self.save_message = Some(SaveMessage {
            kind: if outcome.success {
                MessageKind::Success
            } else {
                MessageKind::Info
            },
            text: outcome.message.clone(),
            shown_at: Instant::now(),
        });

        Some(outcome)
    }

    /// When the current save message should disappear
    pub fn save_message_deadline(&self) -> Option<Instant> {
        self.save_message
            .as_ref()
            .map(|m| m.shown_at + self.config.message_clear_delay())
    }

    /// Clear the save message once its display time is over
    pub fn expire_save_message(&mut self) -> bool {
        match self.save_message_deadline() {
            Some(deadline) if Instant::now() >= deadline => {
                self.save_message = None;
                true
            }
            _ => false,
        }
    }

    /// Sleep until the save message times out, then clear it
    pub async fn wait_save_message(&mut self) {
        if let Some(deadline) = self.save_message_deadline() {
            tokio::time::sleep_until(deadline).await;
            self.expire_save_message();
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == SessionState::Loading
    }

    pub fn joke_type(&self) -> JokeType {
        self.joke_type
    }

    pub fn joke(&self) -> Option<&JokeInput> {
        self.joke.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_punchline_revealed(&self) -> bool {
        self.state == SessionState::Revealed
    }

    pub fn displayed_punchline(&self) -> &str {
        self.typewriter.displayed_text()
    }

    pub fn is_typing_punchline(&self) -> bool {
        self.typewriter.is_typing()
    }

    pub fn save_message(&self) -> Option<&SaveMessage> {
        self.save_message.as_ref()
    }

    pub fn is_current_joke_saved(&self) -> bool {
        self.is_saved
    }

    pub fn gateway(&self) -> &StorageGateway<R, C> {
        &self.gateway
    }
}
