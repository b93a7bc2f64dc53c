//! Pagination engine
//!
//! [`Pagination`] owns the item list it pages over. Every mutation of that
//! list (or of the page size) goes through a recompute hook that clamps the
//! current page back into range, so removing items from the last page never
//! leaves the view pointing past the end.

/// Items shown per page unless configured otherwise
pub const DEFAULT_ITEMS_PER_PAGE: usize = 5;
/// Page buttons shown in the sliding window
pub const DEFAULT_VISIBLE_PAGES: usize = 5;
/// Pages are 1-indexed
pub const DEFAULT_INITIAL_PAGE: usize = 1;

/// Construction options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationOptions {
    pub items_per_page: usize,
    pub initial_page: usize,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            initial_page: DEFAULT_INITIAL_PAGE,
        }
    }
}

/// Page state over an owned item list
#[derive(Debug, Clone)]
pub struct Pagination<T> {
    items: Vec<T>,
    items_per_page: usize,
    current_page: usize,
}

impl<T> Default for Pagination<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> Pagination<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self::with_options(items, PaginationOptions::default())
    }

    pub fn with_options(items: Vec<T>, options: PaginationOptions) -> Self {
        let mut pagination = Self {
            items,
            items_per_page: options.items_per_page.max(1),
            current_page: options.initial_page.max(1),
        };
        pagination.on_items_changed();
        pagination
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// `ceil(item_count / items_per_page)`, never below 1
    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.items_per_page).max(1)
    }

    /// Items on the current page
    pub fn paginated_items(&self) -> &[T] {
        let start = (self.current_page - 1) * self.items_per_page;
        if start >= self.items.len() {
            return &[];
        }
        let end = (start + self.items_per_page).min(self.items.len());
        &self.items[start..end]
    }

    /// Sliding window of page numbers around the current page
    pub fn visible_page_numbers(&self, visible_count: usize) -> Vec<usize> {
        visible_page_numbers(self.current_page, self.total_pages(), visible_count)
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn has_prev_page(&self) -> bool {
        self.current_page > 1
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Jump to `page`. Out-of-range pages are ignored; returns whether the
    /// page was accepted.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page < 1 || page > self.total_pages() {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn next_page(&mut self) -> bool {
        if !self.has_next_page() {
            return false;
        }
        self.current_page += 1;
        true
    }

    pub fn prev_page(&mut self) -> bool {
        if !self.has_prev_page() {
            return false;
        }
        self.current_page -= 1;
        true
    }

    pub fn reset_page(&mut self) {
        self.current_page = DEFAULT_INITIAL_PAGE;
    }

    // ========================================================================
    // Mutation (all paths run the recompute hook)
    // ========================================================================

    /// Replace the underlying list
    pub fn replace_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.on_items_changed();
    }

    /// Drop items that do not satisfy `keep`
    pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) {
        self.items.retain(keep);
        self.on_items_changed();
    }

    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.items_per_page = items_per_page.max(1);
        self.on_items_changed();
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    fn on_items_changed(&mut self) {
        let max_page = self.total_pages();
        if self.current_page > max_page {
            tracing::debug!(
                from = self.current_page,
                to = max_page,
                item_count = self.items.len(),
                "Current page clamped after list change"
            );
            self.current_page = max_page;
        }
    }
}

/// Sliding-window page numbers
///
/// Shows every page when they all fit; otherwise a run of `visible_count`
/// pages roughly centred on `current_page`, pinned to the last page near the
/// end of the range.
pub fn visible_page_numbers(
    current_page: usize,
    total_pages: usize,
    visible_count: usize,
) -> Vec<usize> {
    if total_pages <= visible_count {
        return (1..=total_pages).collect();
    }

    let mut start_page = current_page.saturating_sub(visible_count / 2).max(1);
    if start_page + visible_count > total_pages + 1 {
        start_page = total_pages - visible_count + 1;
    }

    (start_page..start_page + visible_count)
        .filter(|&page| page <= total_pages)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(count: usize) -> Vec<usize> {
        (1..=count).collect()
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(Pagination::<usize>::new(vec![]).total_pages(), 1);
        assert_eq!(Pagination::new(numbered(5)).total_pages(), 1);
        assert_eq!(Pagination::new(numbered(6)).total_pages(), 2);
        assert_eq!(Pagination::new(numbered(12)).total_pages(), 3);
    }

    #[test]
    fn test_paginated_items() {
        let mut pagination = Pagination::new(numbered(12));
        assert_eq!(pagination.paginated_items(), &[1, 2, 3, 4, 5]);

        assert!(pagination.go_to_page(3));
        assert_eq!(pagination.paginated_items(), &[11, 12]);
    }

    #[test]
    fn test_paginated_items_empty_list() {
        let pagination = Pagination::<usize>::new(vec![]);
        assert_eq!(pagination.current_page(), 1);
        assert!(pagination.paginated_items().is_empty());
    }

    #[test]
    fn test_go_to_page_out_of_range_is_noop() {
        let mut pagination = Pagination::new(numbered(12));
        assert!(!pagination.go_to_page(0));
        assert!(!pagination.go_to_page(4));
        assert_eq!(pagination.current_page(), 1);

        assert!(pagination.go_to_page(2));
        assert_eq!(pagination.current_page(), 2);
    }

    #[test]
    fn test_next_prev_clamp_at_boundaries() {
        let mut pagination = Pagination::new(numbered(12));
        assert!(!pagination.prev_page());
        assert_eq!(pagination.current_page(), 1);

        assert!(pagination.next_page());
        assert!(pagination.next_page());
        assert!(!pagination.next_page());
        assert_eq!(pagination.current_page(), 3);

        assert!(pagination.prev_page());
        assert_eq!(pagination.current_page(), 2);
    }

    #[test]
    fn test_reset_page() {
        let mut pagination = Pagination::new(numbered(12));
        pagination.go_to_page(3);
        pagination.reset_page();
        assert_eq!(pagination.current_page(), 1);
    }

    #[test]
    fn test_clamp_when_items_removed() {
        let mut pagination = Pagination::new(numbered(12));
        pagination.go_to_page(3);
        assert_eq!(pagination.total_pages(), 3);

        // remove 8 items, 4 remain
        pagination.retain(|&n| n <= 4);
        assert_eq!(pagination.total_pages(), 1);
        assert_eq!(pagination.current_page(), 1);
        assert_eq!(pagination.paginated_items(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_clamp_on_replace_to_empty() {
        let mut pagination = Pagination::new(numbered(12));
        pagination.go_to_page(2);
        pagination.replace_items(vec![]);
        assert_eq!(pagination.current_page(), 1);
    }

    #[test]
    fn test_growth_keeps_current_page() {
        let mut pagination = Pagination::new(numbered(12));
        pagination.go_to_page(2);
        pagination.replace_items(numbered(30));
        assert_eq!(pagination.current_page(), 2);
    }

    #[test]
    fn test_clamp_when_page_size_grows() {
        let mut pagination = Pagination::new(numbered(12));
        pagination.go_to_page(3);
        pagination.set_items_per_page(10);
        assert_eq!(pagination.total_pages(), 2);
        assert_eq!(pagination.current_page(), 2);
    }

    #[test]
    fn test_options() {
        let options = PaginationOptions {
            items_per_page: 0,
            initial_page: 9,
        };
        let pagination = Pagination::with_options(numbered(12), options);
        assert_eq!(pagination.items_per_page(), 1);
        assert_eq!(pagination.current_page(), 9);

        let options = PaginationOptions {
            items_per_page: 5,
            initial_page: 9,
        };
        let pagination = Pagination::with_options(numbered(12), options);
        assert_eq!(pagination.current_page(), 3);
    }

    #[test]
    fn test_visible_page_numbers_all_fit() {
        assert_eq!(visible_page_numbers(1, 3, 5), vec![1, 2, 3]);
        assert_eq!(visible_page_numbers(1, 5, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(visible_page_numbers(1, 1, 5), vec![1]);
    }

    #[test]
    fn test_visible_page_numbers_sliding() {
        assert_eq!(visible_page_numbers(10, 20, 5), vec![8, 9, 10, 11, 12]);
        assert_eq!(visible_page_numbers(1, 20, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(visible_page_numbers(2, 20, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(visible_page_numbers(4, 20, 5), vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_visible_page_numbers_pinned_to_end() {
        assert_eq!(visible_page_numbers(20, 20, 5), vec![16, 17, 18, 19, 20]);
        assert_eq!(visible_page_numbers(19, 20, 5), vec![16, 17, 18, 19, 20]);
    }

    #[test]
    fn test_visible_page_numbers_even_window() {
        assert_eq!(visible_page_numbers(5, 10, 4), vec![3, 4, 5, 6]);
    }

    #[test]
    fn test_visible_page_numbers_from_state() {
        let mut pagination = Pagination::new(numbered(100));
        pagination.go_to_page(10);
        assert_eq!(
            pagination.visible_page_numbers(DEFAULT_VISIBLE_PAGES),
            vec![8, 9, 10, 11, 12]
        );
    }
}
