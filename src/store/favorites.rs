//! Favorites store
//!
//! The set of favourited show ids, written through to storage on every
//! toggle. Storage trouble never reaches the user: an unreadable or garbled
//! slot loads as an empty set, and a failed write rolls the toggle back so
//! the in-memory set always matches what is on disk.

use std::collections::BTreeSet;

use crate::store::kv::{KeyValueStore, StorageError};

/// Slot name the favorites set is persisted under.
pub const FAVORITES_SLOT: &str = "favorites";

/// Persisted set of favourited show ids
pub struct FavoritesStore {
    store: Box<dyn KeyValueStore>,
    set: BTreeSet<u64>,
}

impl FavoritesStore {
    /// Load the persisted set from `store`. A missing, unreadable, or
    /// malformed slot yields an empty set rather than an error.
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let set = match store.get(FAVORITES_SLOT) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<u64>>(&raw) {
                Ok(ids) => ids.into_iter().collect(),
                Err(e) => {
                    tracing::warn!(error = %e, "malformed favorites slot, starting empty");
                    BTreeSet::new()
                }
            },
            Ok(None) => BTreeSet::new(),
            Err(e) => {
                tracing::warn!(error = %e, "unreadable favorites slot, starting empty");
                BTreeSet::new()
            }
        };
        Self { store, set }
    }

    /// Flip membership of `id` and write the new set through to storage.
    /// If the write fails the flip is rolled back, so the returned set is
    /// always the one storage holds.
    pub fn toggle(&mut self, id: u64) -> &BTreeSet<u64> {
        self.flip(id);
        if let Err(e) = self.persist() {
            tracing::error!(error = %e, show_id = id, "favorites write failed, reverting toggle");
            self.flip(id);
        }
        &self.set
    }

    pub fn contains(&self, id: u64) -> bool {
        self.set.contains(&id)
    }

    pub fn ids(&self) -> &BTreeSet<u64> {
        &self.set
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    fn flip(&mut self, id: u64) {
        if !self.set.insert(id) {
            self.set.remove(&id);
        }
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        // BTreeSet iterates in ascending order, so the slot content is
        // deterministic for a given set.
        let ids: Vec<u64> = self.set.iter().copied().collect();
        let encoded =
            serde_json::to_string(&ids).map_err(|e| StorageError::Encode(e.to_string()))?;
        self.store.put(FAVORITES_SLOT, &encoded)
    }
}
