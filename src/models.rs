//! Data structures and types for podtui
//!
//! Contains the shared models used across the application organized by domain:
//! - **Catalog**: show summaries from the directory listing endpoint
//! - **Detail**: full show records with nested seasons and episodes
//! - **Genres**: the fixed numeric-code-to-name table used by the directory
//! - **Sorting**: the sort keys the browse view cycles through

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Genres
// =============================================================================

/// Genre code table used by the directory API. The listing endpoint tags each
/// show with numeric codes; names are never sent over the wire.
pub const GENRES: [(u32, &str); 9] = [
    (1, "Personal Growth"),
    (2, "True Crime and Investigative Journalism"),
    (3, "History"),
    (4, "Comedy"),
    (5, "Entertainment"),
    (6, "Business"),
    (7, "Fiction"),
    (8, "News"),
    (9, "Kids and Family"),
];

/// Resolve a genre code to its display name. Unknown codes map to `None`.
pub fn genre_name(code: u32) -> Option<&'static str> {
    GENRES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

// =============================================================================
// Catalog Models
// =============================================================================

/// Show summary from the directory listing endpoint.
///
/// Seasons and episodes are not part of the summary; they arrive only with a
/// per-show detail fetch (see [`ShowDetail`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Show {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub image: String,
    pub genres: Vec<u32>,
    pub updated: DateTime<Utc>,
}

impl Show {
    /// Display names for this show's genre codes, skipping unknown codes.
    pub fn genre_names(&self) -> Vec<&'static str> {
        self.genres.iter().filter_map(|c| genre_name(*c)).collect()
    }
}

impl fmt::Display for Show {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (updated {})",
            self.title,
            self.updated.format("%Y-%m-%d")
        )?;
        let names = self.genre_names();
        if !names.is_empty() {
            write!(f, " [{}]", names.join(", "))?;
        }
        Ok(())
    }
}

/// Full show record from the per-show detail endpoint, including seasons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowDetail {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub image: String,
    pub genres: Vec<u32>,
    pub seasons: Vec<Season>,
}

impl ShowDetail {
    pub fn genre_names(&self) -> Vec<&'static str> {
        self.genres.iter().filter_map(|c| genre_name(*c)).collect()
    }

    /// Total episode count across all seasons.
    pub fn episode_count(&self) -> usize {
        self.seasons.iter().map(|s| s.episodes.len()).sum()
    }
}

impl fmt::Display for ShowDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} seasons, {} episodes)",
            self.title,
            self.seasons.len(),
            self.episode_count()
        )
    }
}

/// One season of a show. Numbered per show, starting at 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Season {
    pub id: u64,
    pub title: String,
    pub image: String,
    pub episodes: Vec<Episode>,
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} episodes)", self.title, self.episodes.len())
    }
}

/// One playable episode. `file` is the audio stream URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Episode {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub file: String,
}

impl fmt::Display for Episode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}. {}", self.id, self.title)
    }
}

// =============================================================================
// Sorting
// =============================================================================

/// Sort keys for the browse view. `None` leaves catalog order untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    None,
    TitleAsc,
    TitleDesc,
    DateAsc,
    DateDesc,
}

impl SortKey {
    /// Next key in the cycle driven by the sort hotkey.
    pub fn cycle(self) -> Self {
        match self {
            SortKey::None => SortKey::TitleAsc,
            SortKey::TitleAsc => SortKey::TitleDesc,
            SortKey::TitleDesc => SortKey::DateAsc,
            SortKey::DateAsc => SortKey::DateDesc,
            SortKey::DateDesc => SortKey::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::None => "none",
            SortKey::TitleAsc => "title-asc",
            SortKey::TitleDesc => "title-desc",
            SortKey::DateAsc => "date-asc",
            SortKey::DateDesc => "date-desc",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Timestamp Parsing
// =============================================================================

/// Parse the `updated` timestamp from the directory API.
///
/// The live service sends RFC 3339 with a time component; some archived
/// payloads carry bare dates. Anything unparseable falls back to the epoch so
/// one bad record cannot sink a whole catalog response.
pub(crate) fn parse_updated(raw: &str) -> DateTime<Utc> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Utc);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Utc.from_utc_datetime(&midnight);
        }
    }
    DateTime::UNIX_EPOCH
}

// =============================================================================
// Tests
// =============================================================================
