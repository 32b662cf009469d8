//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use common::{body_json, get};
use axum::http::StatusCode;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_returns_ok_with_json(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["database"], "ok");
    assert!(json["version"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_route_returns_404_json(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn response_contains_x_request_id_header(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );
    assert_eq!(request_id.unwrap().to_str().unwrap().len(), 36);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn home_page_lists_recent_listings_newest_first(pool: PgPool) {
    common::create_venue(&pool, "The Musical Hop", "San Francisco", "CA").await;
    common::create_venue(&pool, "The Dueling Pianos Bar", "New York", "NY").await;
    common::create_artist(&pool, "Guns N Petals").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["venues"][0]["name"], "The Dueling Pianos Bar");
    assert_eq!(json["data"]["venues"][1]["name"], "The Musical Hop");
    assert_eq!(json["data"]["artists"][0]["name"], "Guns N Petals");
}
