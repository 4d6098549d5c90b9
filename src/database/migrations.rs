use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::{debug, info};

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    let migrations = vec![
        // Accounts: admins create resellers, resellers create clients
        r#"CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY,
            username VARCHAR(64) UNIQUE NOT NULL,
            role VARCHAR(20) NOT NULL CHECK (role IN ('client', 'reseller', 'admin')),
            created_by UUID REFERENCES users(id) ON DELETE SET NULL,
            support_system BOOLEAN NOT NULL DEFAULT true,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        );"#,

        // Support tickets
        r#"CREATE TABLE IF NOT EXISTS tickets (
            id BIGSERIAL PRIMARY KEY,
            owner_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            admin_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            status VARCHAR(10) NOT NULL DEFAULT 'open' CHECK (status IN ('open', 'closed')),
            priority SMALLINT NOT NULL DEFAULT 2 CHECK (priority BETWEEN 1 AND 4),
            subject TEXT NOT NULL,
            last_reply_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        );"#,

        // Listing indexes, matching the ORDER BY of the ticket lister
        r#"CREATE INDEX IF NOT EXISTS idx_tickets_admin_status
            ON tickets(admin_id, status, last_reply_at DESC, id DESC);"#,
        r#"CREATE INDEX IF NOT EXISTS idx_tickets_owner_status
            ON tickets(owner_id, status, last_reply_at DESC, id DESC);"#,
    ];

    for (i, migration) in migrations.iter().enumerate() {
        sqlx::query(migration)
            .execute(pool)
            .await
            .with_context(|| format!("Migration {} failed", i + 1))?;
        debug!("Migration {} applied", i + 1);
    }

    info!("All {} migrations completed successfully", migrations.len());
    Ok(())
}
