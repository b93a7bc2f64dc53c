//! Key-value backed joke repository
//!
//! The whole collection lives in one slot as a JSON array.

use crate::domain::entities::Joke;
use crate::domain::repository::JokeRepository;
use crate::error::{JokesError, JokesResult};
use platform::kv_store::KeyValueStore;

/// Repository storing the collection under a single key
#[derive(Debug, Clone)]
pub struct KvJokeRepository<K: KeyValueStore> {
    store: K,
    key: String,
}

impl<K: KeyValueStore> KvJokeRepository<K> {
    pub fn new(store: K, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn kv_store(&self) -> &K {
        &self.store
    }
}

impl<K: KeyValueStore> JokeRepository for KvJokeRepository<K> {
    fn load(&self) -> JokesResult<Vec<Joke>> {
        let Some(raw) = self.store.get_item(&self.key)? else {
            return Ok(Vec::new());
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&raw).map_err(JokesError::CorruptCollection)
    }

    fn store(&self, jokes: &[Joke]) -> JokesResult<()> {
        let raw = serde_json::to_string(jokes).map_err(JokesError::Serialization)?;
        self.store.set_item(&self.key, &raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::JokeInput;
    use crate::domain::value_objects::{JokeType, Rating};
    use kernel::id::JokeId;
    use platform::kv_store::MemoryStore;

    #[test]
    fn test_missing_slot_is_empty() {
        let repo = KvJokeRepository::new(MemoryStore::new(), "savedJokes");
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_store_then_load() {
        let repo = KvJokeRepository::new(MemoryStore::new(), "savedJokes");
        let input = JokeInput::new("S", "P", JokeType::Programming);
        let joke = Joke::new(&input, JokeId::from_millis(1_700_000_000_000), 1_700_000_000_000);

        repo.store(std::slice::from_ref(&joke)).unwrap();
        assert_eq!(repo.load().unwrap(), vec![joke]);
    }

    #[test]
    fn test_reads_existing_browser_records() {
        let store = MemoryStore::new();
        store
            .set_item(
                "savedJokes",
                r#"[{"id":"joke_1700000000000","setup":"S","punchline":"P","type":"random","rating":3,"createdAt":1700000000000}]"#,
            )
            .unwrap();
        let repo = KvJokeRepository::new(store, "savedJokes");

        let jokes = repo.load().unwrap();
        assert_eq!(jokes.len(), 1);
        assert_eq!(jokes[0].id.as_str(), "joke_1700000000000");
        assert_eq!(jokes[0].rating, Rating::new(3).unwrap());
        assert_eq!(jokes[0].created_at, 1_700_000_000_000);
    }

    #[test]
    fn test_corrupt_slot_is_an_error() {
        let store = MemoryStore::new();
        store.set_item("savedJokes", "{not json").unwrap();
        let repo = KvJokeRepository::new(store, "savedJokes");

        assert!(matches!(repo.load(), Err(JokesError::CorruptCollection(_))));
    }
}
