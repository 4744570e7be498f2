use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::types::FrequencyRecord;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Durable key-value persistence for the two user-owned collections: the
/// favorite id list and user-added records. Reads never fail; a missing or
/// unreadable document is an empty collection.
pub trait Store: Send + Sync {
    fn favorites(&self) -> Vec<String>;
    fn custom_records(&self) -> Vec<FrequencyRecord>;

    /// Remove the id if present, append it otherwise. One durable write;
    /// returns the resulting list.
    fn toggle_favorite(&self, id: &str) -> Result<Vec<String>, StorageError>;

    fn append_custom(&self, record: &FrequencyRecord) -> Result<(), StorageError>;
}

pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        FileStore { base }
    }

    fn favorites_path(&self) -> PathBuf {
        self.base.join("favorites.json")
    }

    fn custom_path(&self) -> PathBuf {
        self.base.join("custom-frequencies.json")
    }

    fn write_json<T: Serialize>(&self, path: &Path, value: &T) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.base)?;
        let content = serde_json::to_string_pretty(value)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Parse failure or a type mismatch in a persisted document is recovered as
/// an empty collection, never surfaced to the caller.
fn read_json_or_empty<T: DeserializeOwned + Default>(path: &Path) -> T {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return T::default(),
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            return T::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            warn!("Malformed JSON in {}: {}", path.display(), e);
            T::default()
        }
    }
}

impl Store for FileStore {
    fn favorites(&self) -> Vec<String> {
        read_json_or_empty(&self.favorites_path())
    }

    fn custom_records(&self) -> Vec<FrequencyRecord> {
        read_json_or_empty(&self.custom_path())
    }

    fn toggle_favorite(&self, id: &str) -> Result<Vec<String>, StorageError> {
        let mut favorites = self.favorites();
        match favorites.iter().position(|f| f == id) {
            Some(index) => {
                favorites.remove(index);
            }
            None => favorites.push(id.to_string()),
        }
        self.write_json(&self.favorites_path(), &favorites)?;
        Ok(favorites)
    }

    fn append_custom(&self, record: &FrequencyRecord) -> Result<(), StorageError> {
        let mut records = self.custom_records();
        records.push(record.clone());
        self.write_json(&self.custom_path(), &records)
    }
}

/// In-memory stand-in for tests; same toggle/append semantics, no disk.
#[cfg(test)]
pub struct MemoryStore {
    favorites: std::sync::Mutex<Vec<String>>,
    custom: std::sync::Mutex<Vec<FrequencyRecord>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            favorites: std::sync::Mutex::new(Vec::new()),
            custom: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[cfg(test)]
impl Store for MemoryStore {
    fn favorites(&self) -> Vec<String> {
        self.favorites.lock().unwrap().clone()
    }

    fn custom_records(&self) -> Vec<FrequencyRecord> {
        self.custom.lock().unwrap().clone()
    }

    fn toggle_favorite(&self, id: &str) -> Result<Vec<String>, StorageError> {
        let mut favorites = self.favorites.lock().unwrap();
        match favorites.iter().position(|f| f == id) {
            Some(index) => {
                favorites.remove(index);
            }
            None => favorites.push(id.to_string()),
        }
        Ok(favorites.clone())
    }

    fn append_custom(&self, record: &FrequencyRecord) -> Result<(), StorageError> {
        self.custom.lock().unwrap().push(record.clone());
        Ok(())
    }
}
