//! CLI Command Handlers
//!
//! Implements all CLI commands by calling the same backend the TUI uses.
//! Each handler takes its args, the loaded config, and Output, and returns
//! an ExitCode.

use serde::Serialize;

use crate::api::{CatalogClient, FetchError};
use crate::cli::{ExitCode, FavoritesCmd, GenresCmd, InfoCmd, Output, PlayCmd, ShowsCmd};
use crate::config::Config;
use crate::filter;
use crate::models::{Show, GENRES};
use crate::playback::{AudioOutput, MpvAudioOutput};
use crate::store::{FavoritesStore, FileStore};

fn catalog_client(config: &Config) -> CatalogClient {
    match &config.api_base {
        Some(base) => CatalogClient::with_base_url(base.clone()),
        None => CatalogClient::new(),
    }
}

fn favorites_store(config: &Config) -> FavoritesStore {
    FavoritesStore::load(Box::new(FileStore::new(config.data_dir())))
}

// =============================================================================
// Shows Command
// =============================================================================

pub async fn shows_cmd(cmd: ShowsCmd, config: &Config, output: &Output) -> ExitCode {
    let client = catalog_client(config);

    output.info("Fetching catalog...");

    match client.fetch_shows().await {
        Ok(shows) => {
            let favorites = favorites_store(config);
            let mut rows: Vec<Show> = filter::apply(
                &shows,
                cmd.search.as_deref().unwrap_or(""),
                cmd.sort.into(),
            );
            if cmd.favorites_only {
                rows.retain(|show| favorites.contains(show.id));
            }
            rows.truncate(cmd.limit);

            if output.json {
                if let Err(e) = output.print(&rows) {
                    return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
                }
            } else {
                for show in &rows {
                    let marker = if favorites.contains(show.id) { "★" } else { " " };
                    output.line(format!("{} {:>6}  {}", marker, show.id, show));
                }
            }
            ExitCode::Success
        }
        Err(e) => output.error(format!("Catalog fetch failed: {}", e), ExitCode::NetworkError),
    }
}

// =============================================================================
// Info Command
// =============================================================================

pub async fn info_cmd(cmd: InfoCmd, config: &Config, output: &Output) -> ExitCode {
    let client = catalog_client(config);

    output.info(format!("Fetching show {}...", cmd.id));

    match client.fetch_show_detail(cmd.id).await {
        Ok(detail) => {
            if output.json {
                if let Err(e) = output.print(&detail) {
                    return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
                }
            } else {
                output.line(&detail);
                if !detail.description.is_empty() {
                    output.line(&detail.description);
                }
                for season in &detail.seasons {
                    output.line(format!("  {}", season));
                    for episode in &season.episodes {
                        output.line(format!("    {}", episode));
                    }
                }
            }
            ExitCode::Success
        }
        Err(FetchError::NotFound) => {
            output.error(format!("No show with id {}", cmd.id), ExitCode::NotFound)
        }
        Err(e) => output.error(format!("Detail fetch failed: {}", e), ExitCode::NetworkError),
    }
}

// =============================================================================
// Favorites Command
// =============================================================================

pub async fn favorites_cmd(cmd: FavoritesCmd, config: &Config, output: &Output) -> ExitCode {
    let mut favorites = favorites_store(config);

    if let Some(id) = cmd.toggle {
        let now_favorite = !favorites.contains(id);
        favorites.toggle(id);
        output.info(if now_favorite {
            format!("Added {} to favorites", id)
        } else {
            format!("Removed {} from favorites", id)
        });
    }

    let ids: Vec<u64> = favorites.ids().iter().copied().collect();
    if output.json {
        if let Err(e) = output.print(&ids) {
            return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
        }
    } else {
        for id in &ids {
            output.line(id);
        }
    }
    ExitCode::Success
}

// =============================================================================
// Genres Command
// =============================================================================

/// One row of the genre table, for JSON output
#[derive(Debug, Serialize)]
struct GenreRow {
    code: u32,
    name: &'static str,
}

pub async fn genres_cmd(_cmd: GenresCmd, output: &Output) -> ExitCode {
    if output.json {
        let rows: Vec<GenreRow> = GENRES
            .iter()
            .map(|(code, name)| GenreRow { code: *code, name })
            .collect();
        if let Err(e) = output.print(&rows) {
            return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
        }
    } else {
        for (code, name) in GENRES {
            output.line(format!("{}  {}", code, name));
        }
    }
    ExitCode::Success
}

// =============================================================================
// Play Command
// =============================================================================

pub async fn play_cmd(cmd: PlayCmd, config: &Config, output: &Output) -> ExitCode {
    let client = catalog_client(config);

    output.info(format!("Fetching show {}...", cmd.show_id));

    let detail = match client.fetch_show_detail(cmd.show_id).await {
        Ok(detail) => detail,
        Err(FetchError::NotFound) => {
            return output.error(
                format!("No show with id {}", cmd.show_id),
                ExitCode::NotFound,
            )
        }
        Err(e) => {
            return output.error(format!("Detail fetch failed: {}", e), ExitCode::NetworkError)
        }
    };

    let Some(season) = detail.seasons.iter().find(|s| s.id == cmd.season) else {
        return output.error(
            format!("{} has no season {}", detail.title, cmd.season),
            ExitCode::NotFound,
        );
    };
    let Some(episode) = season.episodes.iter().find(|e| e.id == cmd.episode) else {
        return output.error(
            format!("{} has no episode {}", season.title, cmd.episode),
            ExitCode::NotFound,
        );
    };

    let player = cmd
        .player
        .as_deref()
        .unwrap_or_else(|| config.player_command());
    let mut audio = MpvAudioOutput::new(player);

    output.info(format!(
        "Playing {} S{:02}E{:02} - {}",
        detail.title, season.id, episode.id, episode.title
    ));

    if let Err(e) = audio.start(&episode.file) {
        return output.error(format!("{}", e), ExitCode::PlaybackFailed);
    }
    if let Err(e) = audio.wait().await {
        return output.error(format!("{}", e), ExitCode::PlaybackFailed);
    }

    ExitCode::Success
}
