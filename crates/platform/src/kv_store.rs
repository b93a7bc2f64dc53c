//! Key-Value Storage Infrastructure
//!
//! String-keyed slots holding string values, the shape of browser
//! `localStorage`. Every `set_item` overwrites the whole slot.
//!
//! Implementations:
//! - [`MemoryStore`] - process-local map with an optional byte quota
//! - [`FileStore`] - one `<key>.json` file per slot, written atomically

use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

/// Error raised by a key-value store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Backing storage could not be read or written
    #[error("Storage unavailable: {0}")]
    Unavailable(#[from] io::Error),

    /// Write would exceed the configured quota
    #[error("Storage quota exceeded: {requested} bytes requested, limit is {limit}")]
    QuotaExceeded { limit: usize, requested: usize },

    /// Key contains characters the backend cannot represent
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// Trait for key-value storage backends
pub trait KeyValueStore: Send + Sync {
    /// Read a slot. A missing slot is `Ok(None)`.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite a slot with `value`
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a slot. Removing a missing slot is not an error.
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove_item(key)
    }
}

// ============================================================================
// In-memory store
// ============================================================================

/// In-memory store
///
/// The quota, when set, bounds the sum of key and value lengths in bytes,
/// mirroring the per-origin limit browsers put on `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            quota_bytes: Some(quota_bytes),
        }
    }

    fn slots(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // A panic while holding the lock cannot leave a half-written slot.
        self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.slots().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut slots = self.slots();

        if let Some(limit) = self.quota_bytes {
            let others: usize = slots
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let requested = others + key.len() + value.len();
            if requested > limit {
                tracing::warn!(key, requested, limit, "Key-value store quota exceeded");
                return Err(StoreError::QuotaExceeded { limit, requested });
            }
        }

        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.slots().remove(key);
        Ok(())
    }
}

// ============================================================================
// File-backed store
// ============================================================================

/// File-backed store rooted at a directory
///
/// Each slot lives in `<dir>/<key>.json`. Writes go to `<key>.tmp`, are
/// synced, then renamed over the slot file, so a reader never observes a
/// partially written collection.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.slot_path(key)?;
        atomic_write(&path, value.as_bytes())?;
        tracing::debug!(path = %path.display(), bytes = value.len(), "Slot written");
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Write `contents` to `path` through a synced temp file and a rename
fn atomic_write(path: &Path, contents: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = path.with_extension("tmp");

    let result = write_synced(&tmp_path, contents).and_then(|()| fs::rename(&tmp_path, path));
    if let Err(e) = &result {
        tracing::warn!(path = %path.display(), error = %e, "Atomic write failed");
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

fn write_synced(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    {
        let mut writer = BufWriter::new(&mut file);
        writer.write_all(contents)?;
        writer.flush()?;
    }

    file.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get_item("savedJokes").unwrap(), None);

        store.set_item("savedJokes", "[]").unwrap();
        assert_eq!(store.get_item("savedJokes").unwrap().as_deref(), Some("[]"));

        store.remove_item("savedJokes").unwrap();
        assert_eq!(store.get_item("savedJokes").unwrap(), None);
    }

    #[test]
    fn test_memory_store_remove_missing_is_ok() {
        let store = MemoryStore::new();
        assert!(store.remove_item("nothing").is_ok());
    }

    #[test]
    fn test_memory_store_quota() {
        // "k" + 4 bytes fits, "k" + 10 bytes does not
        let store = MemoryStore::with_quota(5);
        store.set_item("k", "1234").unwrap();

        let err = store.set_item("k", "0123456789").unwrap_err();
        assert!(matches!(
            err,
            StoreError::QuotaExceeded {
                limit: 5,
                requested: 11
            }
        ));

        // Failed write leaves the previous value in place
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("1234"));
    }

    #[test]
    fn test_memory_store_quota_counts_other_slots() {
        let store = MemoryStore::with_quota(10);
        store.set_item("a", "1234").unwrap();
        assert!(store.set_item("b", "1234").is_ok());
        assert!(store.set_item("c", "1").is_err());
    }

    #[test]
    fn test_shared_store() {
        let store = Arc::new(MemoryStore::new());
        let other = Arc::clone(&store);
        store.set_item("k", "v").unwrap();
        assert_eq!(other.get_item("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_file_store_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());

        assert_eq!(store.get_item("savedJokes").unwrap(), None);

        store.set_item("savedJokes", r#"[{"a":1}]"#).unwrap();
        assert_eq!(
            store.get_item("savedJokes").unwrap().as_deref(),
            Some(r#"[{"a":1}]"#)
        );

        store.set_item("savedJokes", "[]").unwrap();
        assert_eq!(store.get_item("savedJokes").unwrap().as_deref(), Some("[]"));

        store.remove_item("savedJokes").unwrap();
        assert_eq!(store.get_item("savedJokes").unwrap(), None);
        assert!(store.remove_item("savedJokes").is_ok());
    }

    #[test]
    fn test_file_store_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("nested").join("data"));

        store.set_item("k", "v").unwrap();
        assert!(store.dir().join("k.json").exists());
    }

    #[test]
    fn test_file_store_no_tmp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());

        store.set_item("savedJokes", "[]").unwrap();

        assert!(temp_dir.path().join("savedJokes.json").exists());
        assert!(!temp_dir.path().join("savedJokes.tmp").exists());
    }

    #[test]
    fn test_file_store_failed_rename_cleans_up_tmp() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());

        // a directory squatting on the slot path makes the rename fail
        let slot = temp_dir.path().join("savedJokes.json");
        fs::create_dir(&slot).unwrap();
        fs::write(slot.join("keep"), "x").unwrap();

        let err = store.set_item("savedJokes", "[]").unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
        assert!(!temp_dir.path().join("savedJokes.tmp").exists());
        assert!(slot.join("keep").exists());
    }

    #[test]
    fn test_file_store_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());

        for key in ["", "../escape", "a/b", "with space", "dot.json"] {
            assert!(
                matches!(store.set_item(key, "x"), Err(StoreError::InvalidKey(_))),
                "key {key:?} should be rejected"
            );
        }
    }
}
