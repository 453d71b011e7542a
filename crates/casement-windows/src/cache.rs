//! Key-value stores with per-entry expiry, used for group persistence.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use casement_common::PersistenceError;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// A cache whose entries disappear after their time-to-live.
pub trait TtlCache: Send {
    fn set(&mut self, key: &str, value: Value, ttl: Duration) -> Result<(), PersistenceError>;

    /// `None` for missing and expired entries alike.
    fn get(&self, key: &str) -> Result<Option<Value>, PersistenceError>;

    /// Returns whether a live entry was removed.
    fn delete(&mut self, key: &str) -> Result<bool, PersistenceError>;
}

/// Process-local cache. Contents die with the process.
///
/// A TTL too long to represent as an `Instant` never expires.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: HashMap<String, (Value, Option<Instant>)>,
}

fn is_live(expires: Option<Instant>) -> bool {
    expires.is_none_or(|at| Instant::now() < at)
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TtlCache for MemoryCache {
    fn set(&mut self, key: &str, value: Value, ttl: Duration) -> Result<(), PersistenceError> {
        let expires = Instant::now().checked_add(ttl);
        self.entries.insert(key.to_string(), (value, expires));
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<Value>, PersistenceError> {
        Ok(self
            .entries
            .get(key)
            .filter(|(_, expires)| is_live(*expires))
            .map(|(value, _)| value.clone()))
    }

    fn delete(&mut self, key: &str) -> Result<bool, PersistenceError> {
        Ok(self
            .entries
            .remove(key)
            .is_some_and(|(_, expires)| is_live(expires)))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FileEntry {
    value: Value,
    /// Unix milliseconds.
    expires_at: i64,
}

impl FileEntry {
    fn is_live(&self) -> bool {
        Utc::now().timestamp_millis() < self.expires_at
    }
}

/// Cache backed by one JSON file, surviving process restarts.
///
/// Every operation re-reads the file, so two instances on the same path
/// see each other's writes (last writer wins).
#[derive(Debug, Clone)]
pub struct FileCache {
    path: PathBuf,
}

impl FileCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<cache dir>/casement/cache.json`.
    pub fn default_path() -> Result<PathBuf, PersistenceError> {
        let base = dirs::cache_dir()
            .ok_or_else(|| PersistenceError::Path("could not determine cache directory".into()))?;
        Ok(base.join("casement").join("cache.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<HashMap<String, FileEntry>, PersistenceError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(HashMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, entries: &HashMap<String, FileEntry>) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, content)?;
        debug!(path = %self.path.display(), entries = entries.len(), "cache file written");
        Ok(())
    }
}

impl TtlCache for FileCache {
    fn set(&mut self, key: &str, value: Value, ttl: Duration) -> Result<(), PersistenceError> {
        let mut entries = self.read()?;
        entries.retain(|_, entry| entry.is_live());
        let ttl_ms = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);
        let expires_at = Utc::now().timestamp_millis().saturating_add(ttl_ms);
        entries.insert(key.to_string(), FileEntry { value, expires_at });
        self.write(&entries)
    }

    fn get(&self, key: &str) -> Result<Option<Value>, PersistenceError> {
        let entries = self.read()?;
        Ok(entries
            .get(key)
            .filter(|entry| entry.is_live())
            .map(|entry| entry.value.clone()))
    }

    fn delete(&mut self, key: &str) -> Result<bool, PersistenceError> {
        let mut entries = self.read()?;
        match entries.remove(key) {
            Some(entry) => {
                self.write(&entries)?;
                Ok(entry.is_live())
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const HOUR: Duration = Duration::from_secs(3600);

    #[test]
    fn memory_cache_set_get_delete() {
        let mut cache = MemoryCache::new();
        cache.set("k", json!({"a": 1}), HOUR).unwrap();
        assert_eq!(cache.get("k").unwrap(), Some(json!({"a": 1})));
        assert!(cache.delete("k").unwrap());
        assert_eq!(cache.get("k").unwrap(), None);
        assert!(!cache.delete("k").unwrap());
    }

    #[test]
    fn memory_cache_expires() {
        let mut cache = MemoryCache::new();
        cache.set("k", json!(1), Duration::ZERO).unwrap();
        assert_eq!(cache.get("k").unwrap(), None);
    }

    #[test]
    fn memory_cache_unbounded_ttl_never_expires() {
        let mut cache = MemoryCache::new();
        cache.set("k", json!("kept"), Duration::MAX).unwrap();
        assert_eq!(cache.get("k").unwrap(), Some(json!("kept")));
        assert!(cache.delete("k").unwrap());
    }

    #[test]
    fn file_cache_unbounded_ttl_saturates() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = FileCache::new(dir.path().join("cache.json"));
        cache.set("k", json!("kept"), Duration::MAX).unwrap();
        assert_eq!(cache.get("k").unwrap(), Some(json!("kept")));
    }

    #[test]
    fn file_cache_survives_new_instance() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("cache.json");
        let mut cache = FileCache::new(&path);
        cache.set("groups", json!(["x"]), HOUR).unwrap();
        assert!(path.exists());

        let reopened = FileCache::new(&path);
        assert_eq!(reopened.get("groups").unwrap(), Some(json!(["x"])));
    }

    #[test]
    fn file_cache_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let cache = FileCache::new(dir.path().join("absent.json"));
        assert_eq!(cache.get("anything").unwrap(), None);
    }

    #[test]
    fn file_cache_expired_entry_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = FileCache::new(dir.path().join("cache.json"));
        cache.set("k", json!(true), Duration::ZERO).unwrap();
        assert_eq!(cache.get("k").unwrap(), None);
    }

    #[test]
    fn file_cache_delete() {
        let dir = tempfile::tempdir().unwrap();
        let mut cache = FileCache::new(dir.path().join("cache.json"));
        cache.set("a", json!(1), HOUR).unwrap();
        cache.set("b", json!(2), HOUR).unwrap();
        assert!(cache.delete("a").unwrap());
        assert!(!cache.delete("a").unwrap());
        assert_eq!(cache.get("b").unwrap(), Some(json!(2)));
    }

    #[test]
    fn file_cache_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        std::fs::write(&path, "{not json").unwrap();
        let cache = FileCache::new(&path);
        assert!(matches!(cache.get("k"), Err(PersistenceError::Json(_))));
    }
}
