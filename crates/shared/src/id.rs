//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities.
//!
//! IDs are human-readable strings of the form `<prefix>_<epoch millis>`
//! (e.g. `joke_1718000000000`), which is the format already found in
//! persisted collections.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Entity marker carrying the ID prefix
pub trait Marker {
    /// Prefix placed before the `_<timestamp>` part
    const PREFIX: &'static str;
}

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type JokeId = Id<markers::Joke>;
///
/// let id = JokeId::from_millis(1_718_000_000_000);
/// assert_eq!(id.as_str(), "joke_1718000000000");
/// assert_eq!(id.timestamp_millis(), Some(1_718_000_000_000));
/// ```
pub struct Id<T> {
    value: String,
    _marker: PhantomData<T>,
}

impl<T: Marker> Id<T> {
    /// Create an ID from an epoch-millisecond timestamp
    pub fn from_millis(millis: i64) -> Self {
        Self {
            value: format!("{}_{}", T::PREFIX, millis),
            _marker: PhantomData,
        }
    }

    /// Parse a well-formed ID (`<prefix>_<digits>`)
    pub fn parse(raw: &str) -> Option<Self> {
        let digits = raw.strip_prefix(T::PREFIX)?.strip_prefix('_')?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self::from_string(raw.to_string()))
    }

    /// Timestamp part of the ID, if it has the canonical shape
    pub fn timestamp_millis(&self) -> Option<i64> {
        self.value
            .strip_prefix(T::PREFIX)?
            .strip_prefix('_')?
            .parse()
            .ok()
    }
}

impl<T> Id<T> {
    /// Wrap an arbitrary string without validation (stored data)
    pub fn from_string(value: String) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Borrow the underlying string
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Convert to the underlying string
    pub fn into_string(self) -> String {
        self.value
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        Self::from_string(self.value.clone())
    }
}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from_string)
    }
}

/// Marker types for different entity IDs
pub mod markers {
    use super::Marker;

    /// Marker for saved joke IDs
    pub struct Joke;

    impl Marker for Joke {
        const PREFIX: &'static str = "joke";
    }
}

/// Type aliases for common IDs
pub type JokeId = Id<markers::Joke>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_millis_format() {
        let id = JokeId::from_millis(42);
        assert_eq!(id.to_string(), "joke_42");
        assert_eq!(id.timestamp_millis(), Some(42));
    }

    #[test]
    fn test_parse() {
        assert!(JokeId::parse("joke_1718000000000").is_some());
        assert!(JokeId::parse("joke_").is_none());
        assert!(JokeId::parse("joke_12a").is_none());
        assert!(JokeId::parse("note_12").is_none());
        assert!(JokeId::parse("joke12").is_none());
    }

    #[test]
    fn test_from_string_keeps_foreign_ids() {
        let id = JokeId::from_string("legacy".to_string());
        assert_eq!(id.as_str(), "legacy");
        assert_eq!(id.timestamp_millis(), None);
    }

    #[test]
    fn test_serde_as_plain_string() {
        let id = JokeId::from_millis(7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""joke_7""#);

        let back: JokeId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
