//! Page of results returned by list queries.

use serde::Serialize;

/// Rows per page when the caller has no configured size.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// One page of a larger ordered result set. Pages are 1-based.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    /// Rows on this page
    pub items: Vec<T>,
    /// Page number, starting at 1
    pub page: u64,
    /// Page size used for the query
    pub per_page: u64,
    /// Rows across all pages
    pub total_items: u64,
    /// Number of pages (0 when there are no rows)
    pub total_pages: u64,
}

impl<T> Page<T> {
    /// Whether a later page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether an earlier page exists.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.page > 1
    }
}

/// Clamps a requested page number to 1 or more.
#[must_use]
pub const fn normalize_page(page: u64) -> u64 {
    if page == 0 { 1 } else { page }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_page() {
        assert_eq!(normalize_page(0), 1);
        assert_eq!(normalize_page(1), 1);
        assert_eq!(normalize_page(7), 7);
    }

    #[test]
    fn test_navigation_flags() {
        let page = Page {
            items: vec![1, 2],
            page: 2,
            per_page: 2,
            total_items: 5,
            total_pages: 3,
        };
        assert!(page.has_prev());
        assert!(page.has_next());

        let last = Page { page: 3, ..page };
        assert!(!last.has_next());
    }
}
