//! API clients for external services
//!
//! - Catalog: the Audio Horizon podcast directory (show list + show detail)

pub mod catalog;

pub use catalog::{CatalogClient, FetchError};
