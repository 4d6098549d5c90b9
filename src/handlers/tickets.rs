use actix_web::{http::header, web, HttpMessage, HttpRequest, HttpResponse};

use super::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{Role, Session, TicketListQuery, TicketListView, TicketStatus};
use crate::services::AccessDecision;
use crate::utils::{ApiResponse, Claims, PaginationMeta};

fn get_session(req: &HttpRequest) -> AppResult<Session> {
    req.extensions()
        .get::<Claims>()
        .ok_or_else(|| AppError::Unauthorized("User not authenticated".to_string()))?
        .session()
}

/// GET /api/v1/client/tickets/{status}
pub async fn client_tickets(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    query: web::Query<TicketListQuery>,
) -> AppResult<HttpResponse> {
    list_for_role(state, req, Role::Client, &path, &query).await
}

/// GET /api/v1/reseller/tickets/{status}
pub async fn reseller_tickets(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    query: web::Query<TicketListQuery>,
) -> AppResult<HttpResponse> {
    list_for_role(state, req, Role::Reseller, &path, &query).await
}

/// GET /api/v1/admin/tickets/{status}
pub async fn admin_tickets(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    query: web::Query<TicketListQuery>,
) -> AppResult<HttpResponse> {
    list_for_role(state, req, Role::Admin, &path, &query).await
}

async fn list_for_role(
    state: web::Data<AppState>,
    req: HttpRequest,
    role: Role,
    status: &str,
    query: &TicketListQuery,
) -> AppResult<HttpResponse> {
    let status: TicketStatus = status.parse()?;
    let session = get_session(&req)?;

    let account = match state.access_guard.authorize(&session, role).await? {
        AccessDecision::Authorized(account) => account,
        AccessDecision::Redirected { location } => {
            return Ok(HttpResponse::SeeOther()
                .insert_header((header::LOCATION, location))
                .finish());
        }
    };

    let page = state
        .ticket_service
        .list_tickets(
            account.user_id,
            query.start_index(),
            state.config.domain_rows_per_page,
            role,
            status,
        )
        .await?;

    let pagination = PaginationMeta::from(&page);
    let view = TicketListView {
        role,
        status,
        logged_from: account.logged_from,
        tickets: page.items,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::paginated(view, pagination)))
}
