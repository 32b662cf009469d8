//! Applies pending schema migrations and exits.
//!
//! Run once per deployment before starting `booking-api`.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "booking_migrate=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = booking_db::create_pool(&database_url, 1)
        .await
        .context("Failed to connect to database")?;

    booking_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!(
        migrations = booking_db::MIGRATOR.iter().count(),
        "Database schema is up to date"
    );
    pool.close().await;
    Ok(())
}
