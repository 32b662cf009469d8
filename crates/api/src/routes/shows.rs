use axum::routing::get;
use axum::Router;

use crate::handlers::show;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/shows", get(show::list))
        .route("/shows/create", get(show::create_form).post(show::create))
}
