//! Page, page size and search term of a server-paginated list.

use contracts::shared::PageQuery;

pub const PAGE_SIZE_OPTIONS: [usize; 3] = [10, 25, 50];
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Inputs of a list fetch. Every change triggers a new request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryState {
    pub page: usize,
    pub page_size: usize,
    /// Empty for no filter. The approval dashboard puts a `DD MMM YYYY` date here.
    pub search_term: String,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            search_term: String::new(),
        }
    }
}

impl QueryState {
    /// Returns true when the state changed.
    pub fn set_page(&mut self, page: usize) -> bool {
        if self.page == page {
            return false;
        }
        self.page = page;
        true
    }

    /// Switches page size and goes back to the first page. Sizes outside
    /// [`PAGE_SIZE_OPTIONS`] are ignored.
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        if !PAGE_SIZE_OPTIONS.contains(&page_size) {
            log::warn!("ignoring unsupported page size {}", page_size);
            return false;
        }
        if self.page_size == page_size && self.page == 0 {
            return false;
        }
        self.page_size = page_size;
        self.page = 0;
        true
    }

    /// Keeps the page index; see [`Self::search_from_start`] for the resetting variant.
    pub fn set_search_term(&mut self, search_term: String) -> bool {
        if self.search_term == search_term {
            return false;
        }
        self.search_term = search_term;
        true
    }

    /// New free-text search, shown from the first page.
    pub fn search_from_start(&mut self, search_term: String) -> bool {
        let changed = self.set_search_term(search_term);
        changed | self.set_page(0)
    }

    /// After a row was removed from a page that held `rows_on_page` rows:
    /// moves to the previous page when the current one is now empty.
    pub fn step_back_after_removal(&mut self, rows_on_page: usize) -> bool {
        if rows_on_page > 1 || self.page == 0 {
            return false;
        }
        self.page -= 1;
        true
    }

    pub fn to_page_query(&self) -> PageQuery {
        PageQuery {
            page: self.page,
            page_size: self.page_size,
            search_term: self.search_term.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_change_resets_page() {
        let mut state = QueryState::default();
        state.set_page(4);
        assert!(state.set_page_size(25));
        assert_eq!(state.page, 0);
        assert_eq!(state.page_size, 25);
    }

    #[test]
    fn test_same_page_size_on_later_page_still_resets() {
        let mut state = QueryState::default();
        state.set_page(2);
        assert!(state.set_page_size(DEFAULT_PAGE_SIZE));
        assert_eq!(state.page, 0);
        assert!(!state.set_page_size(DEFAULT_PAGE_SIZE));
    }

    #[test]
    fn test_unsupported_page_size_is_ignored() {
        let mut state = QueryState::default();
        state.set_page(3);
        assert!(!state.set_page_size(100));
        assert_eq!(state.page, 3);
        assert_eq!(state.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_unchanged_inputs_report_no_change() {
        let mut state = QueryState::default();
        assert!(!state.set_page(0));
        assert!(!state.set_search_term(String::new()));
        assert!(state.set_search_term("01 Jan 2024".to_string()));
        assert_eq!(state.to_page_query().search_term, "01 Jan 2024");
    }

    #[test]
    fn test_search_from_start_resets_page() {
        let mut state = QueryState::default();
        state.set_page(5);
        assert!(state.search_from_start("budi".to_string()));
        assert_eq!(state.page, 0);
        assert_eq!(state.search_term, "budi");
        assert!(!state.search_from_start("budi".to_string()));
    }

    #[test]
    fn test_removing_last_row_of_page_steps_back() {
        let mut state = QueryState::default();
        state.set_page(3);
        assert!(state.step_back_after_removal(1));
        assert_eq!(state.page, 2);

        assert!(!state.step_back_after_removal(4));
        assert_eq!(state.page, 2);

        state.set_page(0);
        assert!(!state.step_back_after_removal(1));
        assert_eq!(state.page, 0);
    }
}
