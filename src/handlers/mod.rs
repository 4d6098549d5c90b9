pub mod tickets;

use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::config::Config;
use crate::middleware::AuthMiddleware;
use crate::services::{AccessGuard, TicketService};
use crate::utils::{ApiResponse, JwtManager};

/// Application state shared across all handlers
pub struct AppState {
    pub config: Arc<Config>,
    pub ticket_service: Arc<TicketService>,
    pub access_guard: Arc<AccessGuard>,
}

/// Health check endpoint
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(
        serde_json::json!({
            "status": "healthy",
            "service": "Panel Tickets Backend (Rust/Actix)",
            "version": env!("CARGO_PKG_VERSION"),
        }),
        "Service is healthy",
    ))
}

/// Registers every route. Shared by the server and the handler tests.
pub fn configure(jwt_manager: Arc<JwtManager>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.route("/health", web::get().to(health_check)).service(
            web::scope("/api/v1")
                .wrap(AuthMiddleware::new(jwt_manager))
                .route(
                    "/client/tickets/{status}",
                    web::get().to(tickets::client_tickets),
                )
                .route(
                    "/reseller/tickets/{status}",
                    web::get().to(tickets::reseller_tickets),
                )
                .route(
                    "/admin/tickets/{status}",
                    web::get().to(tickets::admin_tickets),
                ),
        );
    }
}

#[cfg(test)]
mod tests;
