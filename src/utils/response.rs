use serde::Serialize;

use crate::models::Page;

/// Unified API Response struct
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationMeta>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

/// Offset-based navigation for a page of results.
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub offset: i64,
    pub page_size: i64,
    pub total: i64,
    pub has_prev: bool,
    pub has_next: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_offset: Option<i64>,
}

impl<T> From<&Page<T>> for PaginationMeta {
    fn from(page: &Page<T>) -> Self {
        Self {
            offset: page.offset,
            page_size: page.page_size,
            total: page.total,
            has_prev: page.has_prev,
            has_next: page.has_next,
            prev_offset: page.prev_offset(),
            next_offset: page.next_offset(),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    /// Success response with data
    pub fn success(data: T, message: &str) -> Self {
        Self {
            success: true,
            message: Some(message.to_string()),
            data: Some(data),
            error: None,
            pagination: None,
        }
    }

    /// Paginated response with data and navigation metadata
    pub fn paginated(data: T, pagination: PaginationMeta) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            error: None,
            pagination: Some(pagination),
        }
    }
}

impl ApiResponse<()> {
    /// Error response with custom code
    pub fn error_with_code(code: &str, message: &str) -> Self {
        Self {
            success: false,
            message: None,
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
            }),
            pagination: None,
        }
    }
}
