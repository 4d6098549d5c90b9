use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{Role, Session};
use crate::repository::AccountStore;

/// Account cleared to use a ticket page.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorizedAccount {
    pub user_id: Uuid,
    pub role: Role,
    /// Account that runs the ticket system for this one. Admins run their own.
    pub admin_id: Uuid,
    pub logged_from: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AccessDecision {
    Authorized(AuthorizedAccount),
    Redirected { location: String },
}

pub struct AccessGuard {
    account_repo: Arc<dyn AccountStore>,
    landing_page: String,
}

impl AccessGuard {
    pub fn new(account_repo: Arc<dyn AccountStore>, landing_page: impl Into<String>) -> Self {
        Self {
            account_repo,
            landing_page: landing_page.into(),
        }
    }

    /// Checks that `session` may open the `role` ticket pages. A refusal is
    /// a redirect, only store failures are errors.
    pub async fn authorize(&self, session: &Session, role: Role) -> AppResult<AccessDecision> {
        if session.role != role {
            info!(
                user_id = %session.user_id,
                username = %session.username,
                session_role = %session.role,
                page_role = %role,
                "Session role does not match ticket page"
            );
            return Ok(self.redirect());
        }

        let admin_id = match role {
            Role::Admin => session.user_id,
            Role::Client | Role::Reseller => match session.created_by {
                Some(parent) => parent,
                None => {
                    info!(user_id = %session.user_id, "Session has no parent account");
                    return Ok(self.redirect());
                }
            },
        };

        if role != Role::Admin && !self.account_repo.has_ticket_system(admin_id).await? {
            info!(user_id = %session.user_id, %admin_id, "Ticket system disabled by parent");
            return Ok(self.redirect());
        }

        Ok(AccessDecision::Authorized(AuthorizedAccount {
            user_id: session.user_id,
            role,
            admin_id,
            logged_from: session.logged_from.clone(),
        }))
    }

    fn redirect(&self) -> AccessDecision {
        AccessDecision::Redirected {
            location: self.landing_page.clone(),
        }
    }
}
