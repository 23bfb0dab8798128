//! Pagination request parameters and result pages

use serde::{Deserialize, Serialize};

/// Default page size when the caller does not specify one
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Upper bound on a single page to keep queries bounded
pub const MAX_PAGE_SIZE: u32 = 100;

/// Pagination parameters supplied by a caller (1-indexed pages)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageParams {
    #[serde(default = "default_page")]
    pub page: u32,

    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl PageParams {
    /// Both values must be positive integers
    pub fn is_valid(&self) -> bool {
        self.page >= 1 && self.limit >= 1 && self.limit <= MAX_PAGE_SIZE
    }

    /// Number of records to skip for this page
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }
}

/// A single page of results with totals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total matching records across all pages
    pub total: u64,

    /// Total number of pages at the requested limit
    pub total_pages: u64,

    /// The page these items belong to
    pub page: u32,

    /// Items on this page
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// Build a page, deriving `total_pages` from the limit
    pub fn new(items: Vec<T>, total: u64, params: PageParams) -> Self {
        let limit = u64::from(params.limit.max(1));
        Self {
            total,
            total_pages: total.div_ceil(limit),
            page: params.page,
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = PageParams::default();
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, DEFAULT_PAGE_SIZE);
        assert!(params.is_valid());
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_offset_math() {
        let params = PageParams { page: 3, limit: 10 };
        assert_eq!(params.offset(), 20);
    }

    #[test]
    fn test_rejects_zero_page() {
        let params = PageParams { page: 0, limit: 10 };
        assert!(!params.is_valid());
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let page = Page::new(vec![1, 2, 3], 23, PageParams { page: 1, limit: 10 });
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total, 23);
    }
}
