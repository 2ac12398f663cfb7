//! Pagination parameters and paginated results.
//!
//! Page numbers are 1-based at every layer above the repository. Query string
//! values are coerced leniently: anything that is not a positive integer falls
//! back to the default instead of producing an error, and a page beyond
//! `MAX_PAGE` is clamped so the row offset always fits in an `i64`.

use crate::{model::api::PaginationDto, server::util::parse::parse_positive_u64};

/// Page used when the query string has none or an unusable one.
pub const DEFAULT_PAGE: u64 = 1;
/// Page size used when the query string has none or an unusable one.
pub const DEFAULT_LIMIT: u64 = 10;
/// Largest page size a caller can request.
pub const MAX_LIMIT: u64 = 100;
/// Largest page number; `(MAX_PAGE - 1) * MAX_LIMIT` stays below `i64::MAX`.
pub const MAX_PAGE: u64 = i64::MAX as u64 / MAX_LIMIT;

/// Normalized page request.
///
/// Always holds `page >= 1` and `1 <= limit <= MAX_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    limit: u64,
}

impl PageRequest {
    /// Creates a page request, clamping out-of-range values.
    ///
    /// - `page` of 0 becomes 1, values above `MAX_PAGE` are capped
    /// - `limit` of 0 becomes `DEFAULT_LIMIT`, values above `MAX_LIMIT` are capped
    pub fn new(page: u64, limit: u64) -> Self {
        let page = page.clamp(DEFAULT_PAGE, MAX_PAGE);
        let limit = match limit {
            0 => DEFAULT_LIMIT,
            limit => limit.min(MAX_LIMIT),
        };

        Self { page, limit }
    }

    /// Builds a page request from raw query string values.
    ///
    /// # Arguments
    /// - `page` - Raw `page` query value, if present
    /// - `limit` - Raw `limit` query value, if present
    ///
    /// # Returns
    /// - `PageRequest` - Normalized request; unusable values fall back to defaults
    pub fn from_query(page: Option<&str>, limit: Option<&str>) -> Self {
        Self::new(
            parse_positive_u64(page).unwrap_or(DEFAULT_PAGE),
            parse_positive_u64(limit).unwrap_or(DEFAULT_LIMIT),
        )
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Zero-based page index as expected by SeaORM paginators.
    pub fn page_index(&self) -> u64 {
        self.page - 1
    }

    /// Number of rows skipped before this page, `(page - 1) * limit`.
    pub fn offset(&self) -> u64 {
        self.page_index() * self.limit
    }

    /// Number of pages needed to hold `total` items.
    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_LIMIT)
    }
}

/// One page of domain models plus the metadata needed to render pagination.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub request: PageRequest,
    /// Total number of matching items across all pages.
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            items,
            request,
            total,
        }
    }

    /// Converts the pagination metadata into its API representation.
    pub fn pagination_dto(&self) -> PaginationDto {
        PaginationDto {
            page: self.request.page(),
            limit: self.request.limit(),
            total: self.total,
            total_pages: self.request.total_pages(self.total),
        }
    }
}
