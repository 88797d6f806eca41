//! podtui - terminal dashboard for the Audio Horizon podcast directory
//!
//! Browse the show catalog, filter and sort it, keep favorites across runs,
//! and play episodes through mpv. One binary, two faces: an interactive TUI
//! and a scriptable CLI.
//!
//! # Modules
//!
//! - `models` - Shows, seasons, episodes, genres, sort keys
//! - `api` - Directory API client
//! - `filter` - Pure filter/sort over the catalog
//! - `store` - Favorites persistence behind a key-value seam
//! - `playback` - Single-session audio control over mpv
//! - `app` - TUI state machine
//! - `ui` - TUI components
//! - `cli` / `commands` - Scriptable command surface
//! - `config` / `logging` - Ambient plumbing

pub mod api;
pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod filter;
pub mod logging;
pub mod models;
pub mod playback;
pub mod store;
pub mod ui;

// Re-export commonly used types
pub use api::{CatalogClient, FetchError};
pub use app::{App, Command, FetchOutcome, View};
pub use models::{Episode, Season, Show, ShowDetail, SortKey};
pub use playback::{AudioOutput, MpvAudioOutput, PlaybackController, PlaybackError};
pub use store::{FavoritesStore, FileStore, KeyValueStore, MemoryStore, StorageError};
