use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{Role, Ticket, TicketStatus};

/// Read access to tickets, filtered by what `viewer` may see in `role`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketStore: Send + Sync {
    async fn count_visible(&self, viewer: Uuid, role: Role, status: TicketStatus)
        -> AppResult<i64>;

    /// Most recent reply first, ties broken by id descending.
    async fn find_visible(
        &self,
        viewer: Uuid,
        role: Role,
        status: TicketStatus,
        offset: i64,
        limit: i64,
    ) -> AppResult<Vec<Ticket>>;
}

#[derive(Clone)]
pub struct TicketRepository {
    pool: PgPool,
}

impl TicketRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Clients see their own tickets, resellers the ones addressed to them plus
/// the ones they raised, admins the ones addressed to them.
fn visibility_clause(role: Role) -> &'static str {
    match role {
        Role::Client => "t.owner_id = $1",
        Role::Reseller => "(t.admin_id = $1 OR t.owner_id = $1)",
        Role::Admin => "t.admin_id = $1",
    }
}

fn count_sql(role: Role) -> String {
    format!(
        "SELECT COUNT(*) FROM tickets t WHERE {} AND t.status = $2",
        visibility_clause(role)
    )
}

/// Binds: $1 viewer, $2 status, $3 limit, $4 offset.
fn slice_sql(role: Role) -> String {
    format!(
        r#"
        SELECT t.id, t.owner_id, t.admin_id, t.status, t.priority, t.subject,
               t.last_reply_at, u.username AS owner_name
        FROM tickets t
        JOIN users u ON u.id = t.owner_id
        WHERE {} AND t.status = $2
        ORDER BY t.last_reply_at DESC, t.id DESC
        LIMIT $3 OFFSET $4
        "#,
        visibility_clause(role)
    )
}

#[async_trait]
impl TicketStore for TicketRepository {
    async fn count_visible(
        &self,
        viewer: Uuid,
        role: Role,
        status: TicketStatus,
    ) -> AppResult<i64> {
        let sql = count_sql(role);

        let total: (i64,) = sqlx::query_as(&sql)
            .bind(viewer)
            .bind(status)
            .fetch_one(&self.pool)
            .await?;

        Ok(total.0)
    }

    async fn find_visible(
        &self,
        viewer: Uuid,
        role: Role,
        status: TicketStatus,
        offset: i64,
        limit: i64,
    ) -> AppResult<Vec<Ticket>> {
        let sql = slice_sql(role);

        let tickets = sqlx::query_as::<_, Ticket>(&sql)
            .bind(viewer)
            .bind(status)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(tickets)
    }
}
