//! The key-value blob store.

use log::warn;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tally_core::Result;
use tempfile::NamedTempFile;

use crate::errors::StorageError;

/// Contract the repositories (and the core behind them) rely on: JSON
/// values stored under string keys, written through synchronously.
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value, or `None` when the key has never been
    /// saved or its blob cannot be decoded (corrupt data must degrade to
    /// the empty default, not fail the load).
    fn load(&self, key: &str) -> Result<Option<Value>>;
    fn save(&self, key: &str, value: &Value) -> Result<()>;
}

/// File-backed store: one `<key>.json` file per key inside a data
/// directory. Saves replace the file atomically (write to a temp file in
/// the same directory, then rename) so a crash mid-write never leaves a
/// half-written blob behind.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(StorageError::Io)?;
        Ok(FileStore { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<Value>> {
        let path = self.blob_path(key);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::Io(e).into()),
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!(
                    "Stored blob '{}' is corrupt ({}); treating as empty",
                    key, e
                );
                Ok(None)
            }
        }
    }

    fn save(&self, key: &str, value: &Value) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(value).map_err(StorageError::Serialization)?;

        let mut temp = NamedTempFile::new_in(&self.dir)
            .map_err(|e| StorageError::PersistFailed(e.to_string()))?;
        temp.write_all(&bytes)
            .map_err(|e| StorageError::PersistFailed(e.to_string()))?;
        temp.persist(self.blob_path(key))
            .map_err(|e| StorageError::PersistFailed(e.to_string()))?;
        Ok(())
    }
}

/// Loads and decodes a collection blob, degrading to the empty default
/// when the key is absent or its shape no longer matches the model.
pub(crate) fn load_collection<T>(store: &dyn KeyValueStore, key: &str) -> Result<T>
where
    T: serde::de::DeserializeOwned + Default,
{
    match store.load(key)? {
        Some(value) => match serde_json::from_value(value) {
            Ok(collection) => Ok(collection),
            Err(e) => {
                warn!("Blob '{}' does not match the expected shape ({})", key, e);
                Ok(T::default())
            }
        },
        None => Ok(T::default()),
    }
}

/// Encodes and writes a collection through to the store.
pub(crate) fn save_collection<T: serde::Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    collection: &T,
) -> Result<()> {
    let value = serde_json::to_value(collection).map_err(StorageError::Serialization)?;
    store.save(key, &value)
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStore {
    cells: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.cells.read().unwrap().get(key).cloned())
    }

    fn save(&self, key: &str, value: &Value) -> Result<()> {
        self.cells
            .write()
            .unwrap()
            .insert(key.to_string(), value.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        assert!(store.load("transactions").unwrap().is_none());

        store.save("transactions", &json!([{"id": 1}])).unwrap();
        let loaded = store.load("transactions").unwrap().unwrap();
        assert_eq!(loaded, json!([{"id": 1}]));
    }

    #[test]
    fn test_file_store_corrupt_blob_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        fs::write(dir.path().join("budgets.json"), b"{oops").unwrap();
        assert!(store.load("budgets").unwrap().is_none());

        // A subsequent save repairs the blob.
        store.save("budgets", &json!({"food": "50"})).unwrap();
        assert!(store.load("budgets").unwrap().is_some());
    }

    #[test]
    fn test_keys_are_independent_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        store.save("goals", &json!([])).unwrap();
        assert!(dir.path().join("goals.json").exists());
        assert!(!dir.path().join("transactions.json").exists());
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert!(store.load("settings").unwrap().is_none());
        store.save("settings", &json!({"theme": "dark"})).unwrap();
        assert_eq!(
            store.load("settings").unwrap().unwrap(),
            json!({"theme": "dark"})
        );
    }
}
