use axum::routing::{get, post};
use axum::Router;

use crate::handlers::artist;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/artists", get(artist::list))
        .route("/artists/search", post(artist::search))
        .route("/artists/create", get(artist::create_form).post(artist::create))
        .route("/artists/{id}", get(artist::get_by_id).delete(artist::delete))
        .route("/artists/{id}/edit", get(artist::edit_form).post(artist::update))
}
