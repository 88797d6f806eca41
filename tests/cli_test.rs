//! CLI command handler tests
//!
//! Runs the command handlers against a mocked directory and a temp data
//! directory, asserting the semantic exit codes scripts branch on. Flag
//! parsing itself is covered by the unit tests next to the Cli definition.

use mockito::Server;
use podtui::cli::{ExitCode, FavoritesCmd, GenresCmd, InfoCmd, Output, PlayCmd, ShowsCmd, SortArg};
use podtui::commands;
use podtui::config::Config;

fn quiet_output() -> Output {
    Output {
        json: false,
        quiet: true,
    }
}

fn test_config(api_base: &str, data_dir: &tempfile::TempDir) -> Config {
    Config {
        api_base: Some(api_base.to_string()),
        player: None,
        data_dir: Some(data_dir.path().to_path_buf()),
    }
}

fn shows_cmd_args() -> ShowsCmd {
    ShowsCmd {
        search: None,
        sort: SortArg::None,
        favorites_only: false,
        limit: 50,
    }
}

// =============================================================================
// shows
// =============================================================================

#[tokio::test]
async fn test_shows_succeeds_against_live_catalog() {
    let mut server = Server::new_async().await;
    let dir = tempfile::tempdir().unwrap();

    let mock = server
        .mock("GET", "/shows")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id": "1", "title": "Morning Brief", "genres": [8], "updated": "2023-06-01T00:00:00.000Z"}]"#)
        .create_async()
        .await;

    let config = test_config(&server.url(), &dir);
    let code = commands::shows_cmd(shows_cmd_args(), &config, &quiet_output()).await;

    mock.assert_async().await;
    assert_eq!(code, ExitCode::Success);
}

#[tokio::test]
async fn test_shows_maps_catalog_failure_to_network_error() {
    let mut server = Server::new_async().await;
    let dir = tempfile::tempdir().unwrap();

    let mock = server
        .mock("GET", "/shows")
        .with_status(500)
        .with_body("Internal Server Error")
        .expect(1)
        .create_async()
        .await;

    let config = test_config(&server.url(), &dir);
    let code = commands::shows_cmd(shows_cmd_args(), &config, &quiet_output()).await;

    mock.assert_async().await;
    assert_eq!(code, ExitCode::NetworkError);
}

// =============================================================================
// info
// =============================================================================

#[tokio::test]
async fn test_info_unknown_show_maps_to_not_found() {
    let mut server = Server::new_async().await;
    let dir = tempfile::tempdir().unwrap();

    let mock = server
        .mock("GET", "/id/424242")
        .with_status(404)
        .with_body("Not Found")
        .create_async()
        .await;

    let config = test_config(&server.url(), &dir);
    let code = commands::info_cmd(InfoCmd { id: 424242 }, &config, &quiet_output()).await;

    mock.assert_async().await;
    assert_eq!(code, ExitCode::NotFound);
}

#[tokio::test]
async fn test_info_server_error_maps_to_network_error() {
    let mut server = Server::new_async().await;
    let dir = tempfile::tempdir().unwrap();

    let mock = server
        .mock("GET", "/id/7")
        .with_status(502)
        .with_body("Bad Gateway")
        .create_async()
        .await;

    let config = test_config(&server.url(), &dir);
    let code = commands::info_cmd(InfoCmd { id: 7 }, &config, &quiet_output()).await;

    mock.assert_async().await;
    assert_eq!(code, ExitCode::NetworkError);
}

// =============================================================================
// favorites
// =============================================================================

#[tokio::test]
async fn test_favorites_toggle_writes_into_configured_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        api_base: None,
        player: None,
        data_dir: Some(dir.path().to_path_buf()),
    };

    let code =
        commands::favorites_cmd(FavoritesCmd { toggle: Some(42) }, &config, &quiet_output()).await;
    assert_eq!(code, ExitCode::Success);

    let slot = std::fs::read_to_string(dir.path().join("favorites.json")).unwrap();
    assert_eq!(slot, "[42]");

    // Toggling again removes it
    let code =
        commands::favorites_cmd(FavoritesCmd { toggle: Some(42) }, &config, &quiet_output()).await;
    assert_eq!(code, ExitCode::Success);

    let slot = std::fs::read_to_string(dir.path().join("favorites.json")).unwrap();
    assert_eq!(slot, "[]");
}

#[tokio::test]
async fn test_favorites_listing_needs_no_network() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        api_base: None,
        player: None,
        data_dir: Some(dir.path().to_path_buf()),
    };

    let code = commands::favorites_cmd(FavoritesCmd { toggle: None }, &config, &quiet_output()).await;
    assert_eq!(code, ExitCode::Success);
}

// =============================================================================
// genres
// =============================================================================

#[tokio::test]
async fn test_genres_always_succeeds() {
    let code = commands::genres_cmd(GenresCmd {}, &quiet_output()).await;
    assert_eq!(code, ExitCode::Success);
}

// =============================================================================
// play
// =============================================================================

fn play_detail_body() -> &'static str {
    r#"{
        "id": 7,
        "title": "Night Signals",
        "seasons": [
            {
                "season": 1,
                "title": "Season 1",
                "episodes": [
                    {"episode": 1, "title": "Pilot", "file": "https://example.com/7-1-1.mp3"}
                ]
            }
        ]
    }"#
}

#[tokio::test]
async fn test_play_unknown_season_maps_to_not_found() {
    let mut server = Server::new_async().await;
    let dir = tempfile::tempdir().unwrap();

    let mock = server
        .mock("GET", "/id/7")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(play_detail_body())
        .create_async()
        .await;

    let config = test_config(&server.url(), &dir);
    let cmd = PlayCmd {
        show_id: 7,
        season: 9,
        episode: 1,
        player: None,
    };
    let code = commands::play_cmd(cmd, &config, &quiet_output()).await;

    mock.assert_async().await;
    assert_eq!(code, ExitCode::NotFound);
}

#[tokio::test]
async fn test_play_unknown_episode_maps_to_not_found() {
    let mut server = Server::new_async().await;
    let dir = tempfile::tempdir().unwrap();

    let mock = server
        .mock("GET", "/id/7")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(play_detail_body())
        .create_async()
        .await;

    let config = test_config(&server.url(), &dir);
    let cmd = PlayCmd {
        show_id: 7,
        season: 1,
        episode: 99,
        player: None,
    };
    let code = commands::play_cmd(cmd, &config, &quiet_output()).await;

    mock.assert_async().await;
    assert_eq!(code, ExitCode::NotFound);
}

#[tokio::test]
async fn test_play_missing_player_maps_to_playback_failed() {
    let mut server = Server::new_async().await;
    let dir = tempfile::tempdir().unwrap();

    let mock = server
        .mock("GET", "/id/7")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(play_detail_body())
        .create_async()
        .await;

    let config = test_config(&server.url(), &dir);
    let cmd = PlayCmd {
        show_id: 7,
        season: 1,
        episode: 1,
        player: Some("definitely-not-a-real-player-xyz".to_string()),
    };
    let code = commands::play_cmd(cmd, &config, &quiet_output()).await;

    mock.assert_async().await;
    assert_eq!(code, ExitCode::PlaybackFailed);
}

#[tokio::test]
async fn test_play_unknown_show_maps_to_not_found() {
    let mut server = Server::new_async().await;
    let dir = tempfile::tempdir().unwrap();

    let mock = server
        .mock("GET", "/id/404404")
        .with_status(404)
        .with_body("Not Found")
        .create_async()
        .await;

    let config = test_config(&server.url(), &dir);
    let cmd = PlayCmd {
        show_id: 404404,
        season: 1,
        episode: 1,
        player: Some("definitely-not-a-real-player-xyz".to_string()),
    };
    let code = commands::play_cmd(cmd, &config, &quiet_output()).await;

    mock.assert_async().await;
    assert_eq!(code, ExitCode::NotFound);
}
