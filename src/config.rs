use std::env;
use anyhow::{Context, Result};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,
    pub rust_log: String,

    // Database
    pub database_url: String,
    pub database_max_connections: u32,
    pub database_acquire_timeout_secs: u64,

    // Session tokens
    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,

    // Ticket pages
    pub domain_rows_per_page: i64,
    pub landing_page: String,

    // CORS
    pub cors_allowed_origins: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let database_url = get_env("DATABASE_URL").unwrap_or_else(|_| {
            format!(
                "postgresql://{}:{}@{}:{}/{}",
                get_env_or_default("POSTGRES_USER", ""),
                get_env_or_default("POSTGRES_PASSWORD", ""),
                get_env_or_default("POSTGRES_HOST", "localhost"),
                get_env_or_default("POSTGRES_PORT", "5432"),
                get_env_or_default("POSTGRES_DB", "panel")
            )
        });

        Ok(Self {
            // Server
            port: get_env_or_default("PORT", "8080").parse().unwrap_or(8080),
            rust_log: get_env_or_default("RUST_LOG", "info"),

            // Database
            database_url,
            database_max_connections: get_env_or_default("DATABASE_MAX_CONNECTIONS", "10")
                .parse()
                .unwrap_or(10),
            database_acquire_timeout_secs: get_env_or_default("DATABASE_ACQUIRE_TIMEOUT_SECS", "5")
                .parse()
                .unwrap_or(5),

            // Session tokens
            jwt_secret: get_env("JWT_SECRET").context("JWT_SECRET is required")?,
            jwt_expiry_hours: get_env_or_default("JWT_EXPIRY_HOURS", "24").parse().unwrap_or(24),

            // Ticket pages. Not clamped here: a non-positive value is reported by the lister.
            domain_rows_per_page: get_env_or_default("DOMAIN_ROWS_PER_PAGE", "10")
                .parse()
                .context("DOMAIN_ROWS_PER_PAGE must be an integer")?,
            landing_page: get_env_or_default("LANDING_PAGE", "/index"),

            // CORS
            cors_allowed_origins: get_env_or_default(
                "CORS_ALLOWED_ORIGINS",
                "http://localhost:3000,http://localhost:8080",
            ),
        })
    }
}

fn get_env(key: &str) -> Result<String> {
    env::var(key).with_context(|| format!("Missing environment variable: {}", key))
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
