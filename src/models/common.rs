use serde::{Deserialize, Serialize};

/// Query string of the ticket pages. `psi` is the page start index.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TicketListQuery {
    pub psi: Option<String>,
}

impl TicketListQuery {
    /// Absent, non-numeric or negative values fall back to 0.
    pub fn start_index(&self) -> i64 {
        self.psi
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .map(|start| start.max(0))
            .unwrap_or(0)
    }
}

/// A bounded, ordered slice of a larger result set.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub offset: i64,
    pub page_size: i64,
    pub total: i64,
    pub items: Vec<T>,
    pub has_prev: bool,
    pub has_next: bool,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, offset: i64, page_size: i64, total: i64) -> Self {
        Self {
            has_prev: offset > 0,
            has_next: offset.saturating_add(page_size) < total,
            offset,
            page_size,
            total,
            items,
        }
    }

    pub fn empty(offset: i64, page_size: i64, total: i64) -> Self {
        Self::new(Vec::new(), offset, page_size, total)
    }

    /// Start index of the previous page link.
    pub fn prev_offset(&self) -> Option<i64> {
        self.has_prev
            .then(|| self.offset.saturating_sub(self.page_size).max(0))
    }

    /// Start index of the next page link.
    pub fn next_offset(&self) -> Option<i64> {
        self.has_next
            .then(|| self.offset.saturating_add(self.page_size))
    }
}
