use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::Account;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Account>>;

    /// False for unknown accounts.
    async fn has_ticket_system(&self, admin_id: Uuid) -> AppResult<bool>;
}

#[derive(Clone)]
pub struct AccountRepository {
    pool: PgPool,
}

impl AccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for AccountRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Account>> {
        let account = sqlx::query_as::<_, Account>(
            "SELECT id, username, role, created_by, support_system, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    async fn has_ticket_system(&self, admin_id: Uuid) -> AppResult<bool> {
        let enabled: Option<(bool,)> =
            sqlx::query_as("SELECT support_system FROM users WHERE id = $1")
                .bind(admin_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(enabled.map(|row| row.0).unwrap_or(false))
    }
}
