//! Directory API client tests
//!
//! Tests catalog listing, per-show detail retrieval, and error handling.
//! The directory is mocked; every test also asserts how many requests were
//! made, since the client must fetch exactly once per call (no retries, no
//! caching).

use chrono::{TimeZone, Utc};
use mockito::Server;
use podtui::api::{CatalogClient, FetchError};
use tokio_test::{assert_err, assert_ok};

// =============================================================================
// Mock Response Fixtures
// =============================================================================

fn mock_catalog_response() -> &'static str {
    // Ids arrive as numeric strings on this endpoint
    r#"[
        {
            "id": "10716",
            "title": "Something Was Wrong",
            "description": "An award-winning true-crime docuseries.",
            "image": "https://content.production.cdn.example.com/10716.jpg",
            "genres": [1, 2],
            "updated": "2022-11-03T07:00:00.000Z"
        },
        {
            "id": "5279",
            "title": "This Is Actually Happening",
            "description": "Uninterrupted first-person stories.",
            "image": "https://content.production.cdn.example.com/5279.jpg",
            "genres": [2],
            "updated": "2022-10-28T07:00:00.000Z"
        },
        {
            "id": "6756",
            "title": "Mostly Nitpicking",
            "description": "A show about nitpicking.",
            "image": "https://content.production.cdn.example.com/6756.jpg",
            "genres": [4, 5],
            "updated": "2022-11-01T12:30:00.000Z"
        }
    ]"#
}

fn mock_detail_response() -> &'static str {
    // The detail endpoint names nested ids "season" and "episode"
    r#"{
        "id": "10716",
        "title": "Something Was Wrong",
        "description": "An award-winning true-crime docuseries.",
        "image": "https://content.production.cdn.example.com/10716.jpg",
        "seasons": [
            {
                "season": 1,
                "title": "Season 1",
                "image": "https://content.production.cdn.example.com/10716-1.jpg",
                "episodes": [
                    {
                        "episode": 1,
                        "title": "You Up?",
                        "description": "Sara meets someone new.",
                        "file": "https://podcast-api.example.com/placeholder-audio.mp3"
                    },
                    {
                        "episode": 2,
                        "title": "Sickness",
                        "description": "Things begin to unravel.",
                        "file": "https://podcast-api.example.com/placeholder-audio.mp3"
                    }
                ]
            },
            {
                "season": 2,
                "title": "Season 2",
                "image": "https://content.production.cdn.example.com/10716-2.jpg",
                "episodes": [
                    {
                        "episode": 1,
                        "title": "A New Story",
                        "description": "",
                        "file": "https://podcast-api.example.com/placeholder-audio.mp3"
                    }
                ]
            }
        ]
    }"#
}

// =============================================================================
// Catalog Listing Tests
// =============================================================================

#[tokio::test]
async fn test_fetch_shows_parses_catalog() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/shows")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(mock_catalog_response())
        .create_async()
        .await;

    let client = CatalogClient::with_base_url(server.url());
    let shows = assert_ok!(client.fetch_shows().await);

    mock.assert_async().await;

    assert_eq!(shows.len(), 3);

    // String ids from the wire become numbers
    assert_eq!(shows[0].id, 10716);
    assert_eq!(shows[0].title, "Something Was Wrong");
    assert_eq!(shows[0].genres, vec![1, 2]);
    assert_eq!(
        shows[0].genre_names(),
        vec!["Personal Growth", "True Crime and Investigative Journalism"]
    );
    assert_eq!(
        shows[0].updated,
        Utc.with_ymd_and_hms(2022, 11, 3, 7, 0, 0).unwrap()
    );

    // Catalog order is preserved
    assert_eq!(shows[1].id, 5279);
    assert_eq!(shows[2].id, 6756);
}

#[tokio::test]
async fn test_fetch_shows_accepts_numeric_ids() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/shows")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id": 42, "title": "Numeric Id Show", "genres": [3], "updated": "2023-05-01T00:00:00.000Z"}]"#)
        .create_async()
        .await;

    let client = CatalogClient::with_base_url(server.url());
    let shows = assert_ok!(client.fetch_shows().await);

    mock.assert_async().await;

    assert_eq!(shows.len(), 1);
    assert_eq!(shows[0].id, 42);
}

#[tokio::test]
async fn test_fetch_shows_empty_catalog() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/shows")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let client = CatalogClient::with_base_url(server.url());
    let shows = assert_ok!(client.fetch_shows().await);

    mock.assert_async().await;
    assert!(shows.is_empty());
}

#[tokio::test]
async fn test_fetch_shows_server_error_is_reported_after_one_attempt() {
    let mut server = Server::new_async().await;

    // expect(1): a failed fetch must not be retried
    let mock = server
        .mock("GET", "/shows")
        .with_status(500)
        .with_body("Internal Server Error")
        .expect(1)
        .create_async()
        .await;

    let client = CatalogClient::with_base_url(server.url());
    let result = client.fetch_shows().await;

    mock.assert_async().await;

    match result {
        Err(FetchError::HttpStatus(status)) => assert_eq!(status, 500),
        other => panic!("expected HttpStatus(500), got {:?}", other.err()),
    }
}

#[tokio::test]
async fn test_fetch_shows_invalid_json() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/shows")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("not valid json {{{")
        .create_async()
        .await;

    let client = CatalogClient::with_base_url(server.url());
    let result = client.fetch_shows().await;

    mock.assert_async().await;

    let err = assert_err!(result);
    assert!(matches!(err, FetchError::InvalidResponse(_)));
}

// =============================================================================
// Show Detail Tests
// =============================================================================

#[tokio::test]
async fn test_fetch_detail_parses_nested_seasons() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/id/10716")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(mock_detail_response())
        .create_async()
        .await;

    let client = CatalogClient::with_base_url(server.url());
    let detail = assert_ok!(client.fetch_show_detail(10716).await);

    mock.assert_async().await;

    assert_eq!(detail.id, 10716);
    assert_eq!(detail.title, "Something Was Wrong");
    assert_eq!(detail.seasons.len(), 2);
    assert_eq!(detail.episode_count(), 3);

    let season = &detail.seasons[0];
    assert_eq!(season.id, 1);
    assert_eq!(season.title, "Season 1");
    assert_eq!(season.episodes.len(), 2);
    assert_eq!(season.episodes[0].id, 1);
    assert_eq!(season.episodes[0].title, "You Up?");
    assert!(season.episodes[0].file.ends_with("placeholder-audio.mp3"));

    assert_eq!(detail.seasons[1].id, 2);
    assert_eq!(detail.seasons[1].episodes.len(), 1);
}

#[tokio::test]
async fn test_fetch_detail_tolerates_missing_optional_fields() {
    let mut server = Server::new_async().await;

    // No description, image, genres, or seasons: still a valid show
    let mock = server
        .mock("GET", "/id/99")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": 99, "title": "Sparse Show"}"#)
        .create_async()
        .await;

    let client = CatalogClient::with_base_url(server.url());
    let detail = assert_ok!(client.fetch_show_detail(99).await);

    mock.assert_async().await;

    assert_eq!(detail.id, 99);
    assert_eq!(detail.title, "Sparse Show");
    assert!(detail.description.is_empty());
    assert!(detail.seasons.is_empty());
    assert_eq!(detail.episode_count(), 0);
}

#[tokio::test]
async fn test_fetch_detail_not_found() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/id/99999999")
        .with_status(404)
        .with_body("Not Found")
        .create_async()
        .await;

    let client = CatalogClient::with_base_url(server.url());
    let result = client.fetch_show_detail(99999999).await;

    mock.assert_async().await;

    let err = assert_err!(result);
    assert!(matches!(err, FetchError::NotFound));
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn test_fetch_detail_server_error_status_is_surfaced() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/id/7")
        .with_status(503)
        .with_body("Service Unavailable")
        .expect(1)
        .create_async()
        .await;

    let client = CatalogClient::with_base_url(server.url());
    let result = client.fetch_show_detail(7).await;

    mock.assert_async().await;

    match result {
        Err(FetchError::HttpStatus(503)) => {}
        other => panic!("expected HttpStatus(503), got {:?}", other.err()),
    }
}

#[tokio::test]
async fn test_fetch_detail_refetches_on_every_call() {
    let mut server = Server::new_async().await;

    // Nothing is cached: two calls mean two requests
    let mock = server
        .mock("GET", "/id/10716")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(mock_detail_response())
        .expect(2)
        .create_async()
        .await;

    let client = CatalogClient::with_base_url(server.url());
    let first = assert_ok!(client.fetch_show_detail(10716).await);
    let second = assert_ok!(client.fetch_show_detail(10716).await);

    mock.assert_async().await;

    assert_eq!(first.id, second.id);
    assert_eq!(first.seasons.len(), second.seasons.len());
}
