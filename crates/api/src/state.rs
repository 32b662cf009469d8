use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// Page handlers do not query the pool directly; they take a [`DbConn`]
/// scoped to the request.
///
/// [`DbConn`]: crate::db_conn::DbConn
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: booking_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
