//! Persistence layer for the booking directory.
//!
//! Schema changes live in versioned migrations under `db/migrations` and are
//! applied by [`run_migrations`]; nothing in this crate touches the schema as
//! a side effect of connecting.

pub mod models;
pub mod repositories;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Embedded migration set.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../db/migrations");

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    tracing::debug!(max_connections, "Connecting to database");
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply every pending migration.
pub async fn run_migrations(pool: &DbPool) -> Result<(), MigrateError> {
    for migration in MIGRATOR.iter() {
        tracing::debug!(version = migration.version, description = %migration.description, "Known migration");
    }
    MIGRATOR.run(pool).await
}
