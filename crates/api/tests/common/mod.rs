#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use booking_api::config::ServerConfig;
use booking_api::router::build_app_router;
use booking_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 5,
    }
}

/// Build the full application router, middleware included, on the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn venue_body(name: &str, city: &str, state: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "genres": ["Jazz", "Blues"],
        "address": "1015 Folsom Street",
        "city": city,
        "state": state,
        "phone": "123-123-1234",
        "website_link": "https://www.themusicalhop.com",
        "seeking_talent": true,
        "seeking_description": "Looking for local artists"
    })
}

pub fn artist_body(name: &str, city: &str, state: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "genres": ["Rock"],
        "city": city,
        "state": state,
        "seeking_venue": false
    })
}

/// Create a venue through the API and return its id.
pub async fn create_venue(pool: &PgPool, name: &str, city: &str, state: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(app, "/venues/create", venue_body(name, city, state)).await;
    let json = body_json(response).await;
    json["data"]["id"].as_i64().unwrap()
}

/// Create an artist through the API and return its id.
pub async fn create_artist(pool: &PgPool, name: &str) -> i64 {
    let app = build_test_app(pool.clone());
    let response = post_json(app, "/artists/create", artist_body(name, "San Francisco", "CA")).await;
    let json = body_json(response).await;
    json["data"]["id"].as_i64().unwrap()
}

/// Create a show through the API, starting `hours` from now.
pub async fn create_show(pool: &PgPool, artist_id: i64, venue_id: i64, hours: i64) {
    let start_time = chrono::Utc::now() + chrono::Duration::hours(hours);
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/shows/create",
        serde_json::json!({
            "artist_id": artist_id,
            "venue_id": venue_id,
            "start_time": start_time,
        }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
}
