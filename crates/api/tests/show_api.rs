//! HTTP-level integration tests for the show list and show listings.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_artist, create_show, create_venue, get, post_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_show_returns_201_with_notice(pool: PgPool) {
    let artist = create_artist(&pool, "Guns N Petals").await;
    let venue = create_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/shows/create",
        serde_json::json!({
            "artist_id": artist,
            "venue_id": venue,
            "start_time": "2035-04-01T20:00:00Z",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Show was successfully listed!");
    assert_eq!(json["data"]["artist_id"], artist);
    assert_eq!(json["data"]["venue_id"], venue);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn show_for_missing_artist_returns_422(pool: PgPool) {
    let venue = create_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/shows/create",
        serde_json::json!({
            "artist_id": 999999,
            "venue_id": venue,
            "start_time": "2035-04-01T20:00:00Z",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["error"], "An error occurred. Show could not be listed.");

    let shows: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM shows")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(shows.0, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn show_with_zero_ids_fails_validation(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/shows/create",
        serde_json::json!({
            "artist_id": 0,
            "venue_id": 0,
            "start_time": "2035-04-01T20:00:00Z",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn show_without_start_time_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/shows/create",
        serde_json::json!({"artist_id": 1, "venue_id": 1}),
    )
    .await;

    assert!(response.status().is_client_error());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn show_list_joins_artist_and_venue(pool: PgPool) {
    let artist = create_artist(&pool, "Guns N Petals").await;
    let hop = create_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;
    let park = create_venue(&pool, "Park Square Live Music & Coffee", "San Francisco", "CA").await;
    create_show(&pool, artist, park, 48).await;
    create_show(&pool, artist, hop, -48).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/shows").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let shows = json["data"].as_array().unwrap();
    assert_eq!(shows.len(), 2);
    assert_eq!(shows[0]["venue_name"], "The Musical Hop");
    assert_eq!(shows[1]["venue_name"], "Park Square Live Music & Coffee");
    assert_eq!(shows[0]["artist_name"], "Guns N Petals");
    assert!(shows[0]["start_time"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_form_starts_now(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/shows/create").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"]["form"]["start_time"].is_string());
    assert!(json["data"].get("genre_choices").is_none());
}
