//! Request-scoped database connection extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sqlx::pool::PoolConnection;
use sqlx::Postgres;

use crate::error::AppError;
use crate::state::AppState;

/// A pooled connection checked out for the lifetime of one request.
///
/// The connection returns to the pool when the handler drops it, so no
/// handler holds database state beyond its own request:
///
/// ```ignore
/// async fn my_handler(DbConn(mut conn): DbConn) -> AppResult<Json<i64>> {
///     Ok(Json(VenueRepo::count(&mut conn).await?))
/// }
/// ```
pub struct DbConn(pub PoolConnection<Postgres>);

impl FromRequestParts<AppState> for DbConn {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let conn = state.pool.acquire().await?;
        Ok(DbConn(conn))
    }
}
