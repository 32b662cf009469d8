use axum::routing::{get, post};
use axum::Router;

use crate::handlers::venue;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/venues", get(venue::list))
        .route("/venues/search", post(venue::search))
        .route("/venues/create", get(venue::create_form).post(venue::create))
        .route("/venues/{id}", get(venue::get_by_id).delete(venue::delete))
        .route("/venues/{id}/edit", get(venue::edit_form).post(venue::update))
}
