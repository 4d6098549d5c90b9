use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod database;
mod error;
mod handlers;
mod middleware;
mod models;
mod repository;
mod services;
mod utils;

use config::Config;
use database::create_pool;
use repository::{AccountStore, TicketStore};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Arc::new(Config::from_env().context("Failed to load configuration")?);

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting ticket backend on port {} ({} rows per page)",
        config.port, config.domain_rows_per_page
    );

    // Initialize database pool
    let db_pool = create_pool(&config).await?;

    // Run migrations
    database::run_migrations(&db_pool)
        .await
        .context("Failed to run migrations")?;

    // Initialize repositories
    let account_repo: Arc<dyn AccountStore> =
        Arc::new(repository::AccountRepository::new(db_pool.clone()));
    let ticket_repo: Arc<dyn TicketStore> =
        Arc::new(repository::TicketRepository::new(db_pool.clone()));

    // Initialize services
    let ticket_service = Arc::new(services::TicketService::new(
        ticket_repo,
        account_repo.clone(),
    ));
    let access_guard = Arc::new(services::AccessGuard::new(
        account_repo,
        config.landing_page.clone(),
    ));

    // Create application state
    let app_state = web::Data::new(handlers::AppState {
        config: config.clone(),
        ticket_service,
        access_guard,
    });

    let server_port = config.port;
    let cors_origins = config.cors_allowed_origins.clone();
    let jwt_manager = Arc::new(utils::JwtManager::new(
        &config.jwt_secret,
        config.jwt_expiry_hours,
    ));

    HttpServer::new(move || {
        let cors_origins_inner = cors_origins.clone();
        let cors = Cors::default()
            .allowed_origin_fn(move |origin, _req_head| {
                let origin_str = origin.to_str().unwrap_or("");
                if cors_origins_inner == "*" {
                    return true;
                }
                cors_origins_inner
                    .split(',')
                    .any(|o| o.trim() == origin_str)
            })
            .allowed_methods(vec!["GET", "OPTIONS"])
            .allowed_headers(vec!["Authorization", "Content-Type", "Accept"])
            .supports_credentials()
            .max_age(3600);

        App::new()
            .app_data(app_state.clone())
            .wrap(Logger::default())
            .wrap(cors)
            .configure(handlers::configure(jwt_manager.clone()))
    })
    .bind(format!("0.0.0.0:{}", server_port))?
    .run()
    .await?;

    Ok(())
}
