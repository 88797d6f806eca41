//! Local persistence
//!
//! - KeyValueStore: the slot-based storage seam (file-backed in production)
//! - FavoritesStore: the persisted set of favourited show ids

pub mod favorites;
pub mod kv;

pub use favorites::{FavoritesStore, FAVORITES_SLOT};
pub use kv::{FileStore, KeyValueStore, MemoryStore, StorageError};
