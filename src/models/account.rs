use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::AppError;

/// Account tier. Admins create resellers, resellers create clients.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type, Default)]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Client,
    Reseller,
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Client => write!(f, "client"),
            Role::Reseller => write!(f, "reseller"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "client" => Ok(Role::Client),
            "reseller" => Ok(Role::Reseller),
            "admin" => Ok(Role::Admin),
            other => Err(AppError::BadRequest(format!("Unknown role: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Account {
    pub id: Uuid,
    pub username: String,
    pub role: Role,
    /// Parent account: a client's reseller or a reseller's admin.
    pub created_by: Option<Uuid>,
    /// Whether the ticket system is offered to the accounts this one created.
    pub support_system: bool,
    pub created_at: DateTime<Utc>,
}

/// Identity carried by an authenticated request.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user_id: Uuid,
    pub username: String,
    pub role: Role,
    pub created_by: Option<Uuid>,
    pub logged_from: Option<String>,
}
