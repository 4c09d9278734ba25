//! Filter state behind every paginated list view.

use std::fmt::Write as _;

/// `{page, page_size, search, category_id}` for one list view.
///
/// Changing the search text or the category always lands on page 1 in the
/// same mutation, so the next request never carries a page offset from the
/// previous result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    page: usize,
    page_size: usize,
    search: String,
    category_id: Option<String>,
}

impl FilterState {
    /// Fresh filter on page 1. A zero page size is bumped to one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            search: String::new(),
            category_id: None,
        }
    }

    /// Current 1-based page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Fixed page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Current search text (already trimmed).
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Selected category, `None` for "all categories".
    pub fn category_id(&self) -> Option<&str> {
        self.category_id.as_deref()
    }

    /// Replace the search text. Returns `true` when the filter changed.
    pub fn set_search(&mut self, text: &str) -> bool {
        let text = text.trim();
        if self.search == text {
            return false;
        }
        self.search = text.to_string();
        self.page = 1;
        true
    }

    /// Replace the category filter; empty ids mean "all". Returns `true`
    /// when the filter changed.
    pub fn set_category(&mut self, category_id: Option<String>) -> bool {
        let category_id = category_id.filter(|id| !id.trim().is_empty());
        if self.category_id == category_id {
            return false;
        }
        self.category_id = category_id;
        self.page = 1;
        true
    }

    /// Move to `page` (clamped to at least 1). Returns `true` when it moved.
    pub fn set_page(&mut self, page: usize) -> bool {
        let page = page.max(1);
        if self.page == page {
            return false;
        }
        self.page = page;
        true
    }

    /// Snapshot of the request this filter describes.
    pub fn query(&self) -> ListQuery {
        ListQuery {
            page: self.page,
            limit: self.page_size,
            search: Some(self.search.clone()).filter(|s| !s.is_empty()),
            category: self.category_id.clone(),
        }
    }
}

/// Query parameters of one listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-based page.
    pub page: usize,
    /// Page size.
    pub limit: usize,
    /// Search text, omitted when empty.
    pub search: Option<String>,
    /// Category id, omitted when unset.
    pub category: Option<String>,
}

impl ListQuery {
    /// Plain `page`/`limit` query, used by the category paginator.
    pub fn page(page: usize, limit: usize) -> Self {
        Self {
            page,
            limit,
            search: None,
            category: None,
        }
    }

    /// URL-encoded query string without the leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut out = format!("page={}&limit={}", self.page, self.limit);
        if let Some(search) = self.search.as_deref() {
            let _ = write!(out, "&search={}", urlencoding::encode(search));
        }
        if let Some(category) = self.category.as_deref() {
            let _ = write!(out, "&category={}", urlencoding::encode(category));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_change_resets_page() {
        let mut filter = FilterState::new(10);
        filter.set_page(5);
        assert!(filter.set_search("rust"));
        assert_eq!(filter.page(), 1);
    }

    #[test]
    fn category_change_resets_page() {
        let mut filter = FilterState::new(10);
        filter.set_page(4);
        assert!(filter.set_category(Some("3".into())));
        assert_eq!(filter.page(), 1);

        filter.set_page(2);
        assert!(filter.set_category(None));
        assert_eq!(filter.page(), 1);
    }

    #[test]
    fn unchanged_values_keep_page() {
        let mut filter = FilterState::new(10);
        filter.set_search("rust");
        filter.set_category(Some("3".into()));
        filter.set_page(3);

        assert!(!filter.set_search("  rust "));
        assert!(!filter.set_category(Some("3".into())));
        assert_eq!(filter.page(), 3);
    }

    #[test]
    fn every_filter_change_lands_on_page_one() {
        let searches = ["", "a", "ab", "abc", "x"];
        let categories = [None, Some("1"), Some("2")];
        for start_page in 1..6 {
            for search in searches {
                for category in categories {
                    let mut filter = FilterState::new(10);
                    filter.set_search("seed");
                    filter.set_category(Some("seed".into()));
                    filter.set_page(start_page);

                    let search_changed = filter.set_search(search);
                    let category_changed = filter.set_category(category.map(str::to_string));
                    if search_changed || category_changed {
                        assert_eq!(filter.page(), 1);
                    }
                }
            }
        }
    }

    #[test]
    fn blank_category_means_all() {
        let mut filter = FilterState::new(10);
        assert!(!filter.set_category(Some("  ".into())));
        assert_eq!(filter.category_id(), None);
    }

    #[test]
    fn page_is_never_zero() {
        let mut filter = FilterState::new(0);
        filter.set_page(0);
        assert_eq!(filter.page(), 1);
        assert_eq!(filter.page_size(), 1);
    }

    #[test]
    fn query_string_skips_empty_filters_and_encodes() {
        let mut filter = FilterState::new(10);
        assert_eq!(filter.query().to_query_string(), "page=1&limit=10");

        filter.set_search("rust & wasm");
        filter.set_category(Some("7".into()));
        filter.set_page(2);
        assert_eq!(
            filter.query().to_query_string(),
            "page=2&limit=10&search=rust%20%26%20wasm&category=7"
        );
    }
}
