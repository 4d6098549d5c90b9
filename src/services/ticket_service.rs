use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Page, Role, Ticket, TicketStatus};
use crate::repository::{AccountStore, TicketStore};

pub struct TicketService {
    ticket_repo: Arc<dyn TicketStore>,
    account_repo: Arc<dyn AccountStore>,
}

impl TicketService {
    pub fn new(ticket_repo: Arc<dyn TicketStore>, account_repo: Arc<dyn AccountStore>) -> Self {
        Self {
            ticket_repo,
            account_repo,
        }
    }

    /// Returns the tickets in `[offset, offset + page_size)` of everything
    /// `owner_id` may see in `role` with the given status.
    pub async fn list_tickets(
        &self,
        owner_id: Uuid,
        offset: i64,
        page_size: i64,
        role: Role,
        status: TicketStatus,
    ) -> AppResult<Page<Ticket>> {
        if page_size <= 0 {
            return Err(AppError::InvalidArgument(format!(
                "page_size must be positive, got {}",
                page_size
            )));
        }

        if self.account_repo.find_by_id(owner_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Account {} not found", owner_id)));
        }

        let offset = offset.max(0);
        let total = self
            .ticket_repo
            .count_visible(owner_id, role, status)
            .await?;

        debug!(
            %owner_id, %role, %status, offset, page_size, total,
            "Listing tickets"
        );

        if offset >= total {
            return Ok(Page::empty(offset, page_size, total));
        }

        let mut items = self
            .ticket_repo
            .find_visible(owner_id, role, status, offset, page_size)
            .await?;
        for ticket in items.iter_mut() {
            ticket.role_scope = role;
        }

        Ok(Page::new(items, offset, page_size, total))
    }
}
