//! Key-value storage seam
//!
//! Small string-slot store behind a trait so app state that must survive
//! restarts (favorites, for now) can be backed by files in production and by
//! memory in tests.

use std::collections::HashMap;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from slot storage
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Encode error: {0}")]
    Encode(String),
}

/// String slots keyed by name. `get` of a never-written slot is `Ok(None)`.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn put(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

// =============================================================================
// File-backed store
// =============================================================================

/// One file per slot under a data directory, e.g. `<dir>/favorites.json`.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Platform data directory for podtui, e.g. `~/.local/share/podtui`.
    pub fn default_dir() -> Option<PathBuf> {
        dirs::data_dir().map(|p| p.join("podtui"))
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(path)?))
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.slot_path(key), value)?;
        Ok(())
    }
}

// =============================================================================
// In-memory store
// =============================================================================

/// Memory-backed store. Used by tests and anywhere persistence is unwanted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a slot, e.g. to simulate an earlier session.
    pub fn with_slot(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.slots.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
