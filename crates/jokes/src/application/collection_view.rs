//! Collection View
//!
//! Filter, sort and page state for browsing the saved collection.

use crate::application::config::JokesConfig;
use crate::domain::entities::Joke;
use crate::domain::services::apply_filters;
use crate::domain::value_objects::SortOption;
use platform::pagination::{Pagination, PaginationOptions};

/// Browsing state over the saved collection
///
/// Holds the last source list so changing a filter can re-run the pipeline
/// without going back to storage. The configured initial page is applied on
/// the first `refresh`, once there are items to page over.
#[derive(Debug, Clone)]
pub struct CollectionView {
    search_query: String,
    min_rating: u8,
    sort_option: SortOption,
    visible_pages: usize,
    pending_page: Option<usize>,
    source: Vec<Joke>,
    pagination: Pagination<Joke>,
}

impl Default for CollectionView {
    fn default() -> Self {
        Self::new(PaginationOptions::default(), platform::pagination::DEFAULT_VISIBLE_PAGES)
    }
}

impl CollectionView {
    pub fn new(options: PaginationOptions, visible_pages: usize) -> Self {
        Self {
            search_query: String::new(),
            min_rating: 0,
            sort_option: SortOption::default(),
            visible_pages,
            pending_page: Some(options.initial_page),
            source: Vec::new(),
            pagination: Pagination::with_options(Vec::new(), options),
        }
    }

    pub fn from_config(config: &JokesConfig) -> Self {
        Self::new(config.pagination_options(), config.visible_pages)
    }

    /// Load a fresh source list, keeping the current page when it still exists
    pub fn refresh(&mut self, jokes: Vec<Joke>) {
        self.source = jokes;
        self.recompute();
        if let Some(page) = self.pending_page.take() {
            self.pagination.go_to_page(page);
        }
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.recompute_from_first_page();
    }

    pub fn set_min_rating(&mut self, min_rating: u8) {
        self.min_rating = min_rating;
        self.recompute_from_first_page();
    }

    pub fn set_sort_option(&mut self, option: SortOption) {
        self.sort_option = option;
        self.recompute_from_first_page();
    }

    pub fn reset_filters(&mut self) {
        self.search_query.clear();
        self.min_rating = 0;
        self.sort_option = SortOption::default();
        self.recompute_from_first_page();
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn min_rating(&self) -> u8 {
        self.min_rating
    }

    pub fn sort_option(&self) -> SortOption {
        self.sort_option
    }

    /// Every joke passing the current filters, sorted
    pub fn filtered_jokes(&self) -> &[Joke] {
        self.pagination.items()
    }

    /// Jokes on the current page
    pub fn page(&self) -> &[Joke] {
        self.pagination.paginated_items()
    }

    pub fn pagination(&self) -> &Pagination<Joke> {
        &self.pagination
    }

    pub fn pagination_mut(&mut self) -> &mut Pagination<Joke> {
        &mut self.pagination
    }

    pub fn visible_page_numbers(&self) -> Vec<usize> {
        self.pagination.visible_page_numbers(self.visible_pages)
    }

    fn recompute(&mut self) {
        let filtered = apply_filters(
            &self.source,
            &self.search_query,
            self.min_rating,
            self.sort_option,
        );
        self.pagination.replace_items(filtered);
    }

    fn recompute_from_first_page(&mut self) {
        self.pending_page = None;
        self.recompute();
        self.pagination.reset_page();
    }
}
