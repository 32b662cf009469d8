pub mod artists;
pub mod health;
pub mod shows;
pub mod venues;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Every page route, mounted at the root.
///
/// ```text
/// GET    /                       home page
///
/// /venues, /artists:
/// GET    /{kind}                 directory
/// POST   /{kind}/search          search by name, city or state
/// GET    /{kind}/create          blank form
/// POST   /{kind}/create          create listing
/// GET    /{kind}/{id}            detail page
/// DELETE /{kind}/{id}            delete listing
/// GET    /{kind}/{id}/edit       pre-populated form
/// POST   /{kind}/{id}/edit       update listing
///
/// /shows:
/// GET    /shows                  all shows
/// GET    /shows/create           blank form
/// POST   /shows/create           create listing
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::home::index))
        .merge(venues::router())
        .merge(artists::router())
        .merge(shows::router())
}
