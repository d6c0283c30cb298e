use crate::error::{Result, StoreError};
use catalog_config::{Config, PathManager};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

/// Durable string key-value storage shared by every store.
///
/// Each key is an independent record; implementations must make a single
/// `set` or `remove` atomic with respect to a later `get`.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

pub type SharedStore = Arc<dyn KeyValueStore>;

/// In-process storage, used by tests and one-shot sessions.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        entries.remove(key);
        Ok(())
    }
}

/// File-backed storage: one `<key>.json` file per key inside `dir`.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Storage directory from config, falling back to the platform data dir.
    pub fn from_config(path_manager: &PathManager, config: &Config) -> Self {
        let dir = config
            .storage
            .dir
            .clone()
            .unwrap_or_else(|| path_manager.storage_dir());
        Self::new(dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(|c: char| c == '/' || c == '\\') || key.starts_with('.') {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Read {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let write_err = |source| StoreError::Write {
            key: key.to_string(),
            source,
        };

        std::fs::create_dir_all(&self.dir).map_err(write_err)?;

        // Atomic write: write to temp file, then rename
        let temp_path = path.with_extension("json.tmp");
        std::fs::write(&temp_path, value).map_err(write_err)?;
        std::fs::rename(&temp_path, &path).map_err(write_err)?;

        debug!("Storage saved: {} ({} bytes)", key, value.len());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => {
                debug!("Storage removed: {}", key);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Write {
                key: key.to_string(),
                source,
            }),
        }
    }
}

/// Read and decode a JSON value. Missing, unreadable or unparsable values
/// all come back as `None`; the last two are logged.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("Storage miss: {}", key);
            return None;
        }
        Err(e) => {
            warn!("Failed to read {}: {}. Treating as empty.", key, e);
            return None;
        }
    };

    match serde_json::from_str::<T>(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Corrupt value for {}: {}. Treating as empty.", key, e);
            None
        }
    }
}

pub fn save_json<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<()> {
    let json = serde_json::to_string(value).map_err(|source| StoreError::Serialize {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "[1,2]").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("[1,2]".to_string()));

        store.remove("k").unwrap();
        assert!(!store.contains_key("k"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("storage"));

        assert_eq!(store.get("flixvibe-watchlist").unwrap(), None);
        store.set("flixvibe-watchlist", "[5]").unwrap();
        assert!(dir.path().join("storage/flixvibe-watchlist.json").exists());
        assert!(!dir.path().join("storage/flixvibe-watchlist.json.tmp").exists());
        assert_eq!(store.get("flixvibe-watchlist").unwrap(), Some("[5]".to_string()));

        store.remove("flixvibe-watchlist").unwrap();
        assert_eq!(store.get("flixvibe-watchlist").unwrap(), None);
    }

    #[test]
    fn test_file_store_remove_missing_key_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert!(store.remove("never-written").is_ok());
    }

    #[test]
    fn test_file_store_rejects_path_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert!(matches!(store.set("../escape", "x"), Err(StoreError::InvalidKey(_))));
        assert!(matches!(store.get(""), Err(StoreError::InvalidKey(_))));
    }

    #[test]
    fn test_load_json_soft_fails() {
        let store = MemoryStore::new();
        store.set("bad", "{not json").unwrap();
        assert_eq!(load_json::<Vec<u32>>(&store, "bad"), None);
        assert_eq!(load_json::<Vec<u32>>(&store, "missing"), None);

        save_json(&store, "good", &vec![3u32, 1]).unwrap();
        assert_eq!(load_json::<Vec<u32>>(&store, "good"), Some(vec![3, 1]));
    }
}
