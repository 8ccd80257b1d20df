//! Page requests and pagination metadata shared by every listing path.

use crate::constants::{DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use serde::{Deserialize, Serialize};

/// A requested window of results.
///
/// Construction clamps the inputs: `page` below 1 becomes 1, and a `limit`
/// outside `1..=100` becomes 10. Both fields are therefore always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    limit: u64,
}

impl PageRequest {
    /// Build a clamped page request from raw client values.
    pub fn new(page: i64, limit: i64) -> Self {
        let page = u64::try_from(page).ok().filter(|page| *page > 0).unwrap_or(1);
        let limit = u64::try_from(limit)
            .ok()
            .filter(|limit| (1..=MAX_PAGE_LIMIT).contains(limit))
            .unwrap_or(DEFAULT_PAGE_LIMIT);
        Self { page, limit }
    }

    /// One-based page number.
    pub fn page(&self) -> u64 {
        self.page
    }

    /// Page size, always in `1..=100`.
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Number of rows skipped before this page.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

/// Pagination metadata attached to list responses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Compute metadata for `total` matching rows.
    ///
    /// `has_prev` depends only on the requested page, so a page past the end of
    /// an empty result set still reports a previous page.
    pub fn new(request: PageRequest, total: u64) -> Self {
        let total_pages = if total == 0 {
            0
        } else {
            total.div_ceil(request.limit)
        };
        Self {
            page: request.page,
            limit: request.limit,
            total,
            total_pages,
            has_next: request.page < total_pages,
            has_prev: request.page > 1,
        }
    }
}

/// One page of results plus its metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageResult<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}
