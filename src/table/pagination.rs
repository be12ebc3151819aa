//! Page index bookkeeping.

use std::fmt;

/// Current page and page size. A page size of zero disables paging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    /// Current page number (0-based)
    pub page_index: usize,
    /// Rows per page
    pub page_size: usize,
}

impl PaginationState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size,
        }
    }

    /// Number of pages for `total` rows. Always at least 1.
    pub fn page_count(&self, total: usize) -> usize {
        if self.page_size == 0 {
            return 1;
        }
        total.div_ceil(self.page_size).max(1)
    }

    /// Page index limited to the valid range for `total` rows.
    pub fn clamped_index(&self, total: usize) -> usize {
        self.page_index.min(self.page_count(total) - 1)
    }

    /// Pull `page_index` back inside the valid range for `total` rows.
    pub fn clamp(&mut self, total: usize) {
        self.page_index = self.clamped_index(total);
    }

    pub fn can_previous(&self, total: usize) -> bool {
        self.clamped_index(total) > 0
    }

    pub fn can_next(&self, total: usize) -> bool {
        self.clamped_index(total) + 1 < self.page_count(total)
    }

    /// Move to the next page. No-op on the last page.
    pub fn next_page(&mut self, total: usize) {
        self.clamp(total);
        if self.can_next(total) {
            self.page_index += 1;
        }
    }

    /// Move to the previous page. No-op on the first page.
    pub fn previous_page(&mut self, total: usize) {
        self.clamp(total);
        if self.can_previous(total) {
            self.page_index -= 1;
        }
    }

    pub fn first_page(&mut self) {
        self.page_index = 0;
    }

    pub fn last_page(&mut self, total: usize) {
        self.page_index = self.page_count(total) - 1;
    }

    /// Change the page size, keeping the page index valid.
    pub fn set_page_size(&mut self, page_size: usize, total: usize) {
        self.page_size = page_size;
        self.clamp(total);
    }

    /// Source positions `[start, end)` covered by the current page.
    pub fn bounds(&self, total: usize) -> (usize, usize) {
        if self.page_size == 0 {
            return (0, total);
        }
        let start = (self.clamped_index(total) * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        (start, end)
    }

    /// Display range for the current page.
    pub fn range(&self, total: usize) -> RowRange {
        let (start, end) = self.bounds(total);
        RowRange {
            first: if total == 0 { 0 } else { start + 1 },
            last: end,
            total,
        }
    }
}

/// 1-based inclusive range of rows shown on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

impl fmt::Display for RowRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {} to {} of {}", self.first, self.last, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        let state = PaginationState::new(10);
        assert_eq!(state.page_count(0), 1);
        assert_eq!(state.page_count(10), 1);
        assert_eq!(state.page_count(11), 2);
        assert_eq!(state.page_count(25), 3);
    }

    #[test]
    fn test_zero_page_size_is_single_page() {
        let state = PaginationState::new(0);
        assert_eq!(state.page_count(100), 1);
        assert_eq!(state.bounds(100), (0, 100));
        assert!(!state.can_next(100));
    }

    #[test]
    fn test_navigation_bounds() {
        let mut state = PaginationState::new(10);
        assert!(!state.can_previous(25));
        state.previous_page(25);
        assert_eq!(state.page_index, 0);

        state.next_page(25);
        state.next_page(25);
        assert_eq!(state.page_index, 2);
        assert!(!state.can_next(25));

        state.next_page(25);
        assert_eq!(state.page_index, 2);

        state.first_page();
        assert_eq!(state.page_index, 0);
        state.last_page(25);
        assert_eq!(state.page_index, 2);
    }

    #[test]
    fn test_range_label() {
        let mut state = PaginationState::new(10);
        assert_eq!(state.range(25).to_string(), "Showing 1 to 10 of 25");

        state.last_page(25);
        let range = state.range(25);
        assert_eq!((range.first, range.last, range.total), (21, 25, 25));
    }

    #[test]
    fn test_set_page_size_clamps_index() {
        let mut state = PaginationState::new(5);
        state.last_page(25);
        assert_eq!(state.page_index, 4);

        state.set_page_size(10, 25);
        assert_eq!(state.page_index, 2);
    }

    #[test]
    fn test_clamp_after_data_shrinks() {
        let mut state = PaginationState::new(10);
        state.last_page(50);
        state.clamp(12);
        assert_eq!(state.page_index, 1);
        state.clamp(0);
        assert_eq!(state.page_index, 0);
    }
}
