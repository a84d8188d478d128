/// Pagination query parameters
#[derive(Debug, Clone, Copy)]
pub struct PaginationParams {
    pub page: u32,
    pub limit: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self { page: 1, limit: 20 }
    }
}

/// Paginated result wrapper
#[derive(Debug)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total: u64, page: u32, limit: u32) -> Self {
        let total_pages = ((total as f64) / (limit.max(1) as f64)).ceil() as u32;
        Self {
            items,
            total,
            page,
            limit,
            total_pages,
        }
    }

    /// Slice an already-ordered list into the requested page.
    pub fn from_slice(all: &[T], params: PaginationParams) -> Self
    where
        T: Clone,
    {
        let (page, limit) = crate::shared::validate_pagination(Some(params.page), Some(params.limit));
        let start = (page as usize - 1).saturating_mul(limit as usize);
        let items = all
            .iter()
            .skip(start)
            .take(limit as usize)
            .cloned()
            .collect();
        Self::new(items, all.len() as u64, page, limit)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slice_second_page() {
        let all: Vec<u32> = (1..=45).collect();
        let page = PaginatedResult::from_slice(&all, PaginationParams { page: 2, limit: 20 });
        assert_eq!(page.items.first(), Some(&21));
        assert_eq!(page.items.len(), 20);
        assert_eq!(page.total, 45);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn from_slice_past_the_end_is_empty() {
        let all = vec!["a", "b"];
        let page = PaginatedResult::from_slice(&all, PaginationParams { page: 5, limit: 10 });
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn from_slice_huge_page_is_empty() {
        let all = vec![1, 2, 3];
        let page = PaginatedResult::from_slice(&all, PaginationParams { page: u32::MAX, limit: 100 });
        assert!(page.items.is_empty());
        assert_eq!(page.page, u32::MAX);
        assert_eq!(page.total, 3);
    }
}
