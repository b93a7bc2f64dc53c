//! Typewriter reveal
//!
//! Character-by-character reveal of a punchline. [`Typewriter`] is the
//! synchronous state; [`Typewriter::run`] paces it on the tokio clock.

use crate::application::config::TypingTimings;

/// One step of the reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Another character was appended
    Typed(char),
    /// Every character is shown
    Done,
}

#[derive(Debug, Clone, Default)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
    displayed: String,
    is_typing: bool,
}

impl Typewriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin revealing `text`. Empty text leaves the state untouched.
    pub fn start(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        self.chars = text.chars().collect();
        self.shown = 0;
        self.displayed.clear();
        self.is_typing = true;
        true
    }

    pub fn tick(&mut self) -> Tick {
        match self.chars.get(self.shown) {
            Some(&c) => {
                self.displayed.push(c);
                self.shown += 1;
                Tick::Typed(c)
            }
            None => Tick::Done,
        }
    }

    pub fn finish(&mut self) {
        self.is_typing = false;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn displayed_text(&self) -> &str {
        &self.displayed
    }

    pub fn is_typing(&self) -> bool {
        self.is_typing
    }

    /// All characters are shown (typing may still be settling)
    pub fn is_complete(&self) -> bool {
        !self.chars.is_empty() && self.shown == self.chars.len()
    }

    /// Drive a started reveal to the end, calling `on_frame` after each
    /// character
    pub async fn run(&mut self, timings: TypingTimings, mut on_frame: impl FnMut(&str)) {
        if !self.is_typing {
            return;
        }

        tokio::time::sleep(timings.fade).await;
        loop {
            tokio::time::sleep(timings.per_char).await;
            match self.tick() {
                Tick::Typed(_) => on_frame(&self.displayed),
                Tick::Done => break,
            }
        }
        tokio::time::sleep(timings.settle).await;
        self.finish();
    }

    /// `start` followed by `run`
    pub async fn play(&mut self, text: &str, timings: TypingTimings, on_frame: impl FnMut(&str)) {
        if self.start(text) {
            self.run(timings, on_frame).await;
        }
    }
}
