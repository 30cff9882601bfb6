//! HTTP surface tests, run against the in-memory store adapter.

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use galleria_core::{ArtworkCatalog, MemoryArtworkRepository};
use galleria_server::{AppState, create_app, infra::config::Config};
use serde_json::{Value, json};

fn test_server() -> TestServer {
    let repository = Arc::new(MemoryArtworkRepository::new());
    let catalog = Arc::new(ArtworkCatalog::new(repository));
    let state = AppState::new(catalog, Arc::new(Config::default()));
    TestServer::new(create_app(state)).expect("failed to build test server")
}

async fn create_artwork(server: &TestServer, title: &str, artist: &str, tags: &[&str]) -> Value {
    let response = server
        .post("/api/v1/artworks")
        .json(&json!({
            "title": title,
            "artist": artist,
            "description": format!("{title} description"),
            "image_url": format!("https://img.example/{}.jpg", title.to_lowercase()),
            "tags": tags,
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()
}

#[tokio::test]
async fn create_returns_record_with_zeroed_counters() {
    let server = test_server();
    let created = create_artwork(&server, "Ocean Dreams", "Sarah Chen", &["Abstract", "Blue"]).await;

    assert_eq!(created["title"], "Ocean Dreams");
    assert_eq!(created["likes"], 0);
    assert_eq!(created["views"], 0);
    assert_eq!(created["width"], 400);
    assert_eq!(created["height"], 600);
    assert!(created["id"].as_str().is_some());
    assert!(created["created_at"].as_str().is_some());
}

#[tokio::test]
async fn create_with_missing_title_is_bad_request() {
    let server = test_server();
    let response = server
        .post("/api/v1/artworks")
        .json(&json!({
            "title": "",
            "artist": "Sarah Chen",
            "image_url": "https://img.example/a.jpg",
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["error"]["status"], 400);
    assert!(body["error"]["message"].as_str().is_some());
}

#[tokio::test]
async fn list_supports_search_and_tag_filters() {
    let server = test_server();
    create_artwork(&server, "Ocean Dreams", "Sarah Chen", &["Abstract", "Blue"]).await;
    create_artwork(&server, "Urban Symphony", "Marcus Rodriguez", &["Urban"]).await;

    let all = server.get("/api/v1/artworks").await.json::<Value>();
    assert_eq!(all["total"], 2);
    assert_eq!(all["matched"], 2);
    // Newest first.
    assert_eq!(all["artworks"][0]["title"], "Urban Symphony");

    let searched = server
        .get("/api/v1/artworks")
        .add_query_param("search", "urban")
        .await
        .json::<Value>();
    assert_eq!(searched["matched"], 1);
    assert_eq!(searched["total"], 2);
    assert_eq!(searched["artworks"][0]["title"], "Urban Symphony");

    let tagged = server
        .get("/api/v1/artworks")
        .add_query_param("tag", "Blue")
        .await
        .json::<Value>();
    assert_eq!(tagged["matched"], 1);
    assert_eq!(tagged["artworks"][0]["title"], "Ocean Dreams");

    let none = server
        .get("/api/v1/artworks")
        .add_query_param("search", "zzz")
        .await
        .json::<Value>();
    assert_eq!(none["matched"], 0);
    assert_eq!(none["artworks"], json!([]));
}

#[tokio::test]
async fn tags_endpoint_returns_distinct_vocabulary() {
    let server = test_server();
    create_artwork(&server, "Ocean Dreams", "Sarah Chen", &["Abstract", "Blue"]).await;
    create_artwork(&server, "Warm Abstractions", "Jordan Lee", &["Abstract", "Warm"]).await;

    let tags = server.get("/api/v1/tags").await.json::<Vec<String>>();
    assert_eq!(tags.len(), 3);
    assert!(tags.contains(&"Abstract".to_string()));
    assert!(tags.contains(&"Blue".to_string()));
    assert!(tags.contains(&"Warm".to_string()));
}

#[tokio::test]
async fn patch_edits_fields_and_ignores_counter_keys() {
    let server = test_server();
    let created = create_artwork(&server, "Ocean Dreams", "Sarah Chen", &[]).await;
    let id = created["id"].as_str().unwrap();

    let response = server
        .patch(&format!("/api/v1/artworks/{id}"))
        .json(&json!({
            "description": "Reworked",
            "likes": 9000,
            "views": 9000,
        }))
        .await;
    response.assert_status_ok();

    let updated = response.json::<Value>();
    assert_eq!(updated["description"], "Reworked");
    assert_eq!(updated["title"], "Ocean Dreams");
    // Counter keys in the payload never reach the record.
    assert_eq!(updated["likes"], 0);
    assert_eq!(updated["views"], 0);
}

#[tokio::test]
async fn patch_unknown_id_is_not_found() {
    let server = test_server();
    let response = server
        .patch("/api/v1/artworks/00000000-0000-7000-8000-000000000000")
        .json(&json!({ "title": "Renamed" }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_patch_is_bad_request() {
    let server = test_server();
    let created = create_artwork(&server, "Ocean Dreams", "Sarah Chen", &[]).await;
    let id = created["id"].as_str().unwrap();

    let response = server
        .patch(&format!("/api/v1/artworks/{id}"))
        .json(&json!({}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_removes_record_and_is_not_idempotent() {
    let server = test_server();
    let created = create_artwork(&server, "Ocean Dreams", "Sarah Chen", &[]).await;
    let id = created["id"].as_str().unwrap();

    server
        .delete(&format!("/api/v1/artworks/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let listed = server.get("/api/v1/artworks").await.json::<Value>();
    assert_eq!(listed["total"], 0);

    server
        .delete(&format!("/api/v1/artworks/{id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn view_bumps_accumulate_and_show_up_in_list() {
    let server = test_server();
    let created = create_artwork(&server, "Ocean Dreams", "Sarah Chen", &[]).await;
    let id = created["id"].as_str().unwrap();

    for _ in 0..3 {
        server
            .post(&format!("/api/v1/artworks/{id}/views"))
            .await
            .assert_status(StatusCode::ACCEPTED);
    }

    let listed = server.get("/api/v1/artworks").await.json::<Value>();
    assert_eq!(listed["artworks"][0]["views"], 3);
    // Narrow RPC: no edit-timestamp refresh.
    assert_eq!(listed["artworks"][0]["updated_at"], created["updated_at"]);
}

#[tokio::test]
async fn view_bump_on_unknown_id_is_still_accepted() {
    // Best-effort contract: a failed counter write never blocks the viewer.
    let server = test_server();
    server
        .post("/api/v1/artworks/00000000-0000-7000-8000-000000000000/views")
        .await
        .assert_status(StatusCode::ACCEPTED);
}

#[tokio::test]
async fn likes_accumulate_and_unknown_id_is_not_found() {
    let server = test_server();
    let created = create_artwork(&server, "Ocean Dreams", "Sarah Chen", &[]).await;
    let id = created["id"].as_str().unwrap();

    server
        .post(&format!("/api/v1/artworks/{id}/likes"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let listed = server.get("/api/v1/artworks").await.json::<Value>();
    assert_eq!(listed["artworks"][0]["likes"], 1);

    server
        .post("/api/v1/artworks/00000000-0000-7000-8000-000000000000/likes")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn stats_reflect_catalog_contents() {
    let server = test_server();
    create_artwork(&server, "Ocean Dreams", "Sarah Chen", &["Abstract", "Blue"]).await;
    let second = create_artwork(&server, "Urban Symphony", "Marcus Rodriguez", &["Urban"]).await;
    let id = second["id"].as_str().unwrap();
    server
        .post(&format!("/api/v1/artworks/{id}/likes"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let stats = server.get("/api/v1/stats").await.json::<Value>();
    assert_eq!(stats["total_artworks"], 2);
    assert_eq!(stats["total_artists"], 2);
    assert_eq!(stats["total_likes"], 1);
    assert_eq!(stats["top_artworks"][0]["title"], "Urban Symphony");
}
