//! Domain Value Objects
//!
//! Immutable value types for the jokes domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which joke feed a joke came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JokeType {
    #[default]
    Random,
    Programming,
}

impl JokeType {
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            JokeType::Random => "random",
            JokeType::Programming => "programming",
        }
    }

    /// The other feed
    #[inline]
    pub const fn toggled(&self) -> Self {
        match self {
            JokeType::Random => JokeType::Programming,
            JokeType::Programming => JokeType::Random,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "random" => Some(JokeType::Random),
            "programming" => Some(JokeType::Programming),
            _ => None,
        }
    }
}

impl fmt::Display for JokeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Star rating, 0 (unrated) to 5
///
/// Decoding is lenient: stored values above 5 are clamped and negative
/// values read as unrated, so one bad record never hides a collection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(from = "i64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const UNRATED: Rating = Rating(0);
    pub const MAX: u8 = 5;

    pub fn new(stars: u8) -> Option<Self> {
        if stars <= Self::MAX {
            Some(Self(stars))
        } else {
            None
        }
    }

    pub fn stars(&self) -> u8 {
        self.0
    }

    pub fn is_rated(&self) -> bool {
        self.0 > 0
    }
}

impl From<i64> for Rating {
    fn from(raw: i64) -> Self {
        Self(raw.clamp(0, Self::MAX as i64) as u8)
    }
}

impl From<Rating> for u8 {
    fn from(r: Rating) -> Self {
        r.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for star in 1..=Self::MAX {
            f.write_str(if star <= self.0 { "★" } else { "☆" })?;
        }
        Ok(())
    }
}

/// Collection sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOption {
    /// Most recently saved first
    #[default]
    Newest,
    /// Highest rating first
    Rating,
    /// By setup, A to Z
    Alphabetical,
}

impl SortOption {
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            SortOption::Newest => "newest",
            SortOption::Rating => "rating",
            SortOption::Alphabetical => "alphabetical",
        }
    }

    /// Unrecognized codes fall back to [`SortOption::Newest`]
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "rating" => SortOption::Rating,
            "alphabetical" => SortOption::Alphabetical,
            "newest" => SortOption::Newest,
            other => {
                tracing::debug!(code = other, "Unknown sort option, using newest");
                SortOption::Newest
            }
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
