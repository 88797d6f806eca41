//! Podcast directory client
//!
//! Fetches the show catalog and per-show detail from the Audio Horizon
//! directory API. Requests are made exactly once: a failed fetch is reported
//! to the caller, never retried or cached here.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::models::{parse_updated, Episode, Season, Show, ShowDetail};

/// Production base URL of the directory API.
const DEFAULT_BASE_URL: &str = "https://podcast-api.netlify.app";

/// Errors from the directory API
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Show not found (404)")]
    NotFound,

    #[error("Directory returned HTTP {0}")]
    HttpStatus(u16),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
}

/// Directory API client
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    client: reqwest::Client,
}

impl CatalogClient {
    /// Create a client against the production directory.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client with a custom base URL (config override, tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Fetch the full show catalog (summaries, no seasons).
    pub async fn fetch_shows(&self) -> Result<Vec<Show>, FetchError> {
        let url = format!("{}/shows", self.base_url);
        let body = self.fetch_body(&url).await?;

        let raw: Vec<ShowRaw> = serde_json::from_str(&body)
            .map_err(|e| FetchError::InvalidResponse(format!("JSON parse error: {}", e)))?;

        Ok(raw.into_iter().map(ShowRaw::into_show).collect())
    }

    /// Fetch one show in full, including seasons and episodes.
    pub async fn fetch_show_detail(&self, show_id: u64) -> Result<ShowDetail, FetchError> {
        let url = format!("{}/id/{}", self.base_url, show_id);
        let body = self.fetch_body(&url).await?;

        let raw: ShowDetailRaw = serde_json::from_str(&body)
            .map_err(|e| FetchError::InvalidResponse(format!("JSON parse error: {}", e)))?;

        Ok(raw.into_show_detail())
    }

    /// One GET, one status check, body as text. No retries.
    async fn fetch_body(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status.as_u16() == 404 {
            return Err(FetchError::NotFound);
        }
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Raw API Types
// =============================================================================

/// Show summary as sent by the listing endpoint.
#[derive(Debug, Deserialize)]
struct ShowRaw {
    #[serde(deserialize_with = "de_id")]
    id: u64,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    genres: Vec<u32>,
    #[serde(default)]
    updated: Option<String>,
}

impl ShowRaw {
    fn into_show(self) -> Show {
        Show {
            id: self.id,
            title: self.title,
            description: self.description,
            image: self.image,
            genres: self.genres,
            updated: parse_updated(self.updated.as_deref().unwrap_or_default()),
        }
    }
}

/// Full show as sent by the detail endpoint. Unlike the listing, genres may
/// be absent here.
#[derive(Debug, Deserialize)]
struct ShowDetailRaw {
    #[serde(deserialize_with = "de_id")]
    id: u64,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    genres: Vec<u32>,
    #[serde(default)]
    seasons: Vec<SeasonRaw>,
}

impl ShowDetailRaw {
    fn into_show_detail(self) -> ShowDetail {
        ShowDetail {
            id: self.id,
            title: self.title,
            description: self.description,
            image: self.image,
            genres: self.genres,
            seasons: self.seasons.into_iter().map(SeasonRaw::into_season).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SeasonRaw {
    // The wire field is "season"; accept "id" from older payloads too.
    #[serde(alias = "season", deserialize_with = "de_id")]
    id: u64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    episodes: Vec<EpisodeRaw>,
}

impl SeasonRaw {
    fn into_season(self) -> Season {
        let title = if self.title.is_empty() {
            format!("Season {}", self.id)
        } else {
            self.title
        };
        Season {
            id: self.id,
            title,
            image: self.image,
            episodes: self.episodes.into_iter().map(EpisodeRaw::into_episode).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct EpisodeRaw {
    #[serde(alias = "episode", deserialize_with = "de_id")]
    id: u64,
    title: String,
    #[serde(default)]
    description: String,
    file: String,
}

impl EpisodeRaw {
    fn into_episode(self) -> Episode {
        Episode {
            id: self.id,
            title: self.title,
            description: self.description,
            file: self.file,
        }
    }
}

/// The directory has served ids both as JSON numbers and as numeric strings
/// depending on endpoint version; accept either.
fn de_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        Num(u64),
        Text(String),
    }

    match IdRepr::deserialize(deserializer)? {
        IdRepr::Num(n) => Ok(n),
        IdRepr::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
