use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Pagination metadata returned alongside every paginated list.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginationDto {
    /// 1-based page number that was returned.
    pub page: u64,
    pub limit: u64,
    /// Total number of matching items across all pages.
    pub total: u64,
    pub total_pages: u64,
}
