//! Pagination types for list queries.

use serde::{Deserialize, Serialize};

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: u64 = 15;

/// Maximum allowed items per page to prevent excessive queries
pub const MAX_PAGE_SIZE: u64 = 100;

/// Default starting page number (1-indexed)
pub const DEFAULT_PAGE_NUMBER: u64 = 1;

/// Pagination query parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PaginationParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_page() -> u64 {
    DEFAULT_PAGE_NUMBER
}

fn default_per_page() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl PaginationParams {
    pub fn new(page: u64, per_page: u64) -> Self {
        Self { page, per_page }
    }

    /// 1-indexed page, never below the first
    pub fn page(&self) -> u64 {
        self.page.max(DEFAULT_PAGE_NUMBER)
    }

    /// Calculate offset for database query
    pub fn offset(&self) -> u64 {
        (self.page().saturating_sub(1)) * self.limit()
    }

    /// Get limit capped at maximum, never zero
    pub fn limit(&self) -> u64 {
        self.per_page.clamp(1, MAX_PAGE_SIZE)
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of records plus the metadata needed for pagination controls
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    /// Create new paginated response
    pub fn new(data: Vec<T>, page: u64, per_page: u64, total: u64) -> Self {
        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        Self {
            data,
            meta: PaginationMeta {
                page,
                per_page,
                total,
                total_pages,
            },
        }
    }

    pub fn has_more_pages(&self) -> bool {
        self.meta.page < self.meta.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_and_limit() {
        let params = PaginationParams::new(3, 20);
        assert_eq!(params.offset(), 40);
        assert_eq!(params.limit(), 20);
    }

    #[test]
    fn test_limit_is_capped() {
        assert_eq!(PaginationParams::new(1, 10_000).limit(), MAX_PAGE_SIZE);
        assert_eq!(PaginationParams::new(1, 0).limit(), 1);
    }

    #[test]
    fn test_page_zero_is_first_page() {
        let params = PaginationParams::new(0, 10);
        assert_eq!(params.page(), 1);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_total_pages() {
        let page = Paginated::new(vec![1, 2], 1, 2, 5);
        assert_eq!(page.meta.total_pages, 3);
        assert!(page.has_more_pages());

        let last = Paginated::new(vec![5], 3, 2, 5);
        assert!(!last.has_more_pages());

        let empty: Paginated<i32> = Paginated::new(vec![], 1, 10, 0);
        assert_eq!(empty.meta.total_pages, 0);
    }

    #[test]
    fn test_params_deserialize_defaults() {
        let params: PaginationParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params, PaginationParams::default());
    }
}
