use anyhow::{Context, Result};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use tracing::info;

use crate::config::Config;

fn pool_options(config: &Config) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.database_max_connections.max(1))
        .min_connections(0)
        .acquire_timeout(Duration::from_secs(config.database_acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(60))
}

pub async fn create_pool(config: &Config) -> Result<PgPool> {
    let pool = pool_options(config)
        .connect(&config.database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to PostgreSQL (max {} connections)",
                config.database_max_connections
            )
        })?;

    info!(
        max_connections = config.database_max_connections,
        "Connected to PostgreSQL database"
    );
    Ok(pool)
}
