//! Materialize a server-paginated collection into one flat list.
//!
//! Used for category dropdowns: the categories endpoint pages server-side
//! but the filter wants every category at once.

use async_trait::async_trait;

use crate::{error::ApiError, page::Page};

/// Anything that can serve numbered pages of `T`.
#[async_trait(?Send)]
pub trait PagedSource<T> {
    /// Fetch 1-based `page` with `limit` rows.
    async fn fetch_page(&self, page: usize, limit: usize) -> Result<Page<T>, ApiError>;
}

/// Result of [`collect_all_pages`].
#[derive(Debug, Clone, PartialEq)]
pub struct Collected<T> {
    /// Every item received, first page first, in response order.
    pub items: Vec<T>,
    /// Number of pages successfully fetched.
    pub pages_fetched: usize,
    /// The failure that stopped the loop early, if any.
    pub error: Option<ApiError>,
    /// Set when the loop stopped at `max_pages` while the server still
    /// reported more pages.
    pub truncated: bool,
}

impl<T> Collected<T> {
    /// Whether every reported page was fetched.
    pub fn is_complete(&self) -> bool {
        self.error.is_none() && !self.truncated
    }
}

/// Fetch pages 1, 2, ... until the server-reported page count is reached.
///
/// The page count is re-read from every response. The loop stops at the
/// first failed page (keeping what it already has) and never fetches more
/// than `max_pages` pages.
pub async fn collect_all_pages<T, S>(source: &S, page_size: usize, max_pages: usize) -> Collected<T>
where
    S: PagedSource<T> + ?Sized,
{
    let page_size = page_size.max(1);
    let max_pages = max_pages.max(1);
    let mut collected = Collected {
        items: Vec::new(),
        pages_fetched: 0,
        error: None,
        truncated: false,
    };

    let mut page = 1;
    let mut total_pages = 1;
    while page <= total_pages {
        if page > max_pages {
            tracing::warn!(
                max_pages,
                reported = total_pages,
                "stopping paged fetch at the page cap"
            );
            collected.truncated = true;
            break;
        }

        match source.fetch_page(page, page_size).await {
            Ok(response) => {
                total_pages = response.page_count(page_size);
                collected.items.extend(response.items);
                collected.pages_fetched = page;
                tracing::debug!(page, total_pages, "fetched page");
            },
            Err(err) => {
                tracing::warn!(page, error = %err, "paged fetch failed, keeping partial result");
                collected.error = Some(err);
                break;
            },
        }
        page += 1;
    }

    collected
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    struct FakeCategories {
        sizes: Vec<usize>,
        fail_on: Option<usize>,
        calls: RefCell<Vec<(usize, usize)>>,
    }

    impl FakeCategories {
        fn new(sizes: Vec<usize>) -> Self {
            Self {
                sizes,
                fail_on: None,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl PagedSource<String> for FakeCategories {
        async fn fetch_page(&self, page: usize, limit: usize) -> Result<Page<String>, ApiError> {
            self.calls.borrow_mut().push((page, limit));
            if self.fail_on == Some(page) {
                return Err(ApiError::Network("connection reset".into()));
            }
            let size = self.sizes.get(page - 1).copied().unwrap_or(0);
            let items = (0..size).map(|i| format!("p{page}-{i}")).collect();
            Ok(Page {
                items,
                total: self.sizes.iter().sum(),
                total_pages: Some(self.sizes.len()),
            })
        }
    }

    /// Reports one more page than it has served, forever.
    struct EverGrowing;

    #[async_trait(?Send)]
    impl PagedSource<u32> for EverGrowing {
        async fn fetch_page(&self, page: usize, _limit: usize) -> Result<Page<u32>, ApiError> {
            Ok(Page {
                items: vec![page as u32],
                total: page + 1,
                total_pages: Some(page + 1),
            })
        }
    }

    #[tokio::test]
    async fn collects_every_page_in_order() {
        let source = FakeCategories::new(vec![100, 100, 50]);
        let collected = collect_all_pages(&source, 100, 50).await;

        assert!(collected.is_complete());
        assert_eq!(collected.items.len(), 250);
        assert_eq!(collected.pages_fetched, 3);
        assert_eq!(collected.items.first().map(String::as_str), Some("p1-0"));
        assert_eq!(collected.items.get(100).map(String::as_str), Some("p2-0"));
        assert_eq!(collected.items.last().map(String::as_str), Some("p3-49"));
        assert_eq!(*source.calls.borrow(), vec![(1, 100), (2, 100), (3, 100)]);
    }

    #[tokio::test]
    async fn failure_keeps_partial_result() {
        let mut source = FakeCategories::new(vec![100, 100, 50]);
        source.fail_on = Some(2);
        let collected = collect_all_pages(&source, 100, 50).await;

        assert_eq!(collected.items.len(), 100);
        assert_eq!(collected.pages_fetched, 1);
        assert!(matches!(collected.error, Some(ApiError::Network(_))));
        assert!(!collected.is_complete());
        assert_eq!(source.calls.borrow().len(), 2);
    }

    #[tokio::test]
    async fn single_empty_page_stops_after_one_call() {
        let source = FakeCategories::new(vec![]);
        let collected = collect_all_pages(&source, 100, 50).await;

        assert!(collected.items.is_empty());
        assert!(collected.is_complete());
        assert_eq!(source.calls.borrow().len(), 1);
    }

    #[tokio::test]
    async fn ever_growing_total_is_capped() {
        let collected = collect_all_pages(&EverGrowing, 10, 5).await;

        assert!(collected.truncated);
        assert_eq!(collected.pages_fetched, 5);
        assert_eq!(collected.items, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn page_count_falls_back_to_total() {
        struct TotalOnly;

        #[async_trait(?Send)]
        impl PagedSource<u8> for TotalOnly {
            async fn fetch_page(&self, page: usize, _limit: usize) -> Result<Page<u8>, ApiError> {
                let items = if page < 3 { vec![0; 2] } else { vec![0; 1] };
                Ok(Page::new(items, 5))
            }
        }

        let collected = collect_all_pages(&TotalOnly, 2, 50).await;
        assert_eq!(collected.items.len(), 5);
        assert_eq!(collected.pages_fetched, 3);
    }
}
