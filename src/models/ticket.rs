use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::Role;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Open,
    Closed,
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TicketStatus::Open => write!(f, "open"),
            TicketStatus::Closed => write!(f, "closed"),
        }
    }
}

impl std::str::FromStr for TicketStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(TicketStatus::Open),
            "closed" => Ok(TicketStatus::Closed),
            other => Err(AppError::BadRequest(format!("Unknown ticket status: {}", other))),
        }
    }
}

/// Urgency levels, stored as 1..=4.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, sqlx::Type,
)]
#[repr(i16)]
#[serde(rename_all = "snake_case")]
pub enum TicketPriority {
    Low = 1,
    Medium = 2,
    High = 3,
    VeryHigh = 4,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Ticket {
    pub id: i64,
    pub owner_id: Uuid,
    pub admin_id: Uuid,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub subject: String,
    pub last_reply_at: DateTime<Utc>,
    /// Username of the owner ("From" column).
    pub owner_name: String,
    /// Role the producing query was scoped to; filled in by the lister.
    #[sqlx(skip)]
    pub role_scope: Role,
}

/// Payload of a ticket page response.
#[derive(Debug, Serialize)]
pub struct TicketListView {
    pub role: Role,
    pub status: TicketStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logged_from: Option<String>,
    pub tickets: Vec<Ticket>,
}
