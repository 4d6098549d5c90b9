use actix_web::{http::header, http::StatusCode, test, web, App};
use serde_json::Value;
use std::sync::Arc;

use super::{configure, AppState};
use crate::config::Config;
use crate::models::{Account, TicketStatus};
use crate::services::tests::fixtures::{ticket, MemoryTickets, Panel};
use crate::services::{AccessGuard, TicketService};
use crate::utils::JwtManager;

const SECRET: &str = "handler-test-secret";

fn test_config(rows_per_page: i64) -> Config {
    Config {
        port: 0,
        rust_log: "debug".to_string(),
        database_url: String::new(),
        database_max_connections: 1,
        database_acquire_timeout_secs: 1,
        jwt_secret: SECRET.to_string(),
        jwt_expiry_hours: 1,
        domain_rows_per_page: rows_per_page,
        landing_page: "/index".to_string(),
        cors_allowed_origins: "*".to_string(),
    }
}

fn app_state(panel: &Panel, rows_per_page: i64) -> web::Data<AppState> {
    let accounts = Arc::new(panel.accounts());
    let tickets = Arc::new(MemoryTickets {
        tickets: vec![
            ticket(1, &panel.client_a, panel.reseller.id, TicketStatus::Closed, 10),
            ticket(2, &panel.client_b, panel.reseller.id, TicketStatus::Closed, 20),
            ticket(3, &panel.client_a, panel.reseller.id, TicketStatus::Closed, 30),
            ticket(4, &panel.client_a, panel.reseller.id, TicketStatus::Open, 40),
        ],
    });

    web::Data::new(AppState {
        config: Arc::new(test_config(rows_per_page)),
        ticket_service: Arc::new(TicketService::new(tickets, accounts.clone())),
        access_guard: Arc::new(AccessGuard::new(accounts, "/index")),
    })
}

fn bearer(account: &Account, logged_from: Option<&str>) -> (header::HeaderName, String) {
    let token = JwtManager::new(SECRET, 1)
        .generate_access_token(account, logged_from)
        .unwrap();
    (header::AUTHORIZATION, format!("Bearer {}", token))
}

#[actix_web::test]
async fn reseller_lists_closed_tickets_page_by_page() {
    let panel = Panel::new();
    let app = test::init_service(
        App::new()
            .app_data(app_state(&panel, 2))
            .configure(configure(Arc::new(JwtManager::new(SECRET, 1)))),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/reseller/tickets/closed")
        .insert_header(bearer(&panel.reseller, Some("admin")))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "closed");
    assert_eq!(body["data"]["logged_from"], "admin");
    let ids: Vec<i64> = body["data"]["tickets"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![3, 2]);
    assert_eq!(body["data"]["tickets"][1]["owner_name"], "client-b");
    assert_eq!(body["pagination"]["has_prev"], false);
    assert_eq!(body["pagination"]["has_next"], true);
    assert_eq!(body["pagination"]["next_offset"], 2);
    assert_eq!(body["pagination"]["total"], 3);

    let req = test::TestRequest::get()
        .uri("/api/v1/reseller/tickets/closed?psi=2")
        .insert_header(bearer(&panel.reseller, None))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"]["tickets"][0]["id"], 1);
    assert_eq!(body["pagination"]["has_prev"], true);
    assert_eq!(body["pagination"]["has_next"], false);
    assert_eq!(body["pagination"]["prev_offset"], 0);
    assert!(body["data"].get("logged_from").is_none());
}

#[actix_web::test]
async fn malformed_psi_falls_back_to_first_page() {
    let panel = Panel::new();
    let app = test::init_service(
        App::new()
            .app_data(app_state(&panel, 2))
            .configure(configure(Arc::new(JwtManager::new(SECRET, 1)))),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/reseller/tickets/closed?psi=abc")
        .insert_header(bearer(&panel.reseller, None))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["pagination"]["offset"], 0);
    assert_eq!(body["data"]["tickets"][0]["id"], 3);
}

#[actix_web::test]
async fn missing_token_is_unauthorized() {
    let panel = Panel::new();
    let app = test::init_service(
        App::new()
            .app_data(app_state(&panel, 2))
            .configure(configure(Arc::new(JwtManager::new(SECRET, 1)))),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/reseller/tickets/closed")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn guard_refusal_redirects_to_landing_page() {
    let mut panel = Panel::new();
    panel.admin.support_system = false;
    let app = test::init_service(
        App::new()
            .app_data(app_state(&panel, 2))
            .configure(configure(Arc::new(JwtManager::new(SECRET, 1)))),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/reseller/tickets/closed")
        .insert_header(bearer(&panel.reseller, None))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/index");
}

#[actix_web::test]
async fn client_session_cannot_open_reseller_page() {
    let panel = Panel::new();
    let app = test::init_service(
        App::new()
            .app_data(app_state(&panel, 2))
            .configure(configure(Arc::new(JwtManager::new(SECRET, 1)))),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/reseller/tickets/closed")
        .insert_header(bearer(&panel.client_a, None))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
}

#[actix_web::test]
async fn client_sees_only_own_tickets() {
    let panel = Panel::new();
    let app = test::init_service(
        App::new()
            .app_data(app_state(&panel, 10))
            .configure(configure(Arc::new(JwtManager::new(SECRET, 1)))),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/client/tickets/closed")
        .insert_header(bearer(&panel.client_b, None))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"]["role"], "client");
    assert_eq!(body["data"]["tickets"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"]["tickets"][0]["id"], 2);
}

#[actix_web::test]
async fn unknown_status_segment_is_bad_request() {
    let panel = Panel::new();
    let app = test::init_service(
        App::new()
            .app_data(app_state(&panel, 2))
            .configure(configure(Arc::new(JwtManager::new(SECRET, 1)))),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/reseller/tickets/archived")
        .insert_header(bearer(&panel.reseller, None))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn misconfigured_page_size_surfaces_as_invalid_argument() {
    let panel = Panel::new();
    let app = test::init_service(
        App::new()
            .app_data(app_state(&panel, 0))
            .configure(configure(Arc::new(JwtManager::new(SECRET, 1)))),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/reseller/tickets/open")
        .insert_header(bearer(&panel.reseller, None))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "INVALID_ARGUMENT");
}

#[actix_web::test]
async fn health_needs_no_session() {
    let panel = Panel::new();
    let app = test::init_service(
        App::new()
            .app_data(app_state(&panel, 2))
            .configure(configure(Arc::new(JwtManager::new(SECRET, 1)))),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn largest_psi_returns_empty_last_page() {
    let panel = Panel::new();
    let app = test::init_service(
        App::new()
            .app_data(app_state(&panel, 2))
            .configure(configure(Arc::new(JwtManager::new(SECRET, 1)))),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/reseller/tickets/closed?psi=9223372036854775807")
        .insert_header(bearer(&panel.reseller, None))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["pagination"]["offset"], i64::MAX);
    assert_eq!(body["pagination"]["has_prev"], true);
    assert_eq!(body["pagination"]["has_next"], false);
    assert!(body["pagination"].get("next_offset").is_none());
    assert!(body["data"]["tickets"].as_array().unwrap().is_empty());
}
