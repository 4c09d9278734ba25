//! Last-request-wins coordination for paginated list views.
//!
//! Every fetch takes a ticket from a [`RequestSequencer`]; when the response
//! comes back it is applied only if its ticket is still the newest one. A
//! request overtaken by a later filter change is allowed to finish, but its
//! result is dropped on the floor.

use crate::{
    error::ApiError,
    filter::{FilterState, ListQuery},
    page::{page_count, Page},
};

/// Monotonic request ids for one list view.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    /// Issue the next id; it supersedes every id issued before it.
    pub fn next(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Whether `id` is still the newest issued id.
    pub fn is_current(&self, id: u64) -> bool {
        id == self.latest
    }
}

/// Handle for one in-flight request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    /// Sequence number compared at apply time.
    pub seq: u64,
    /// Query to send.
    pub query: ListQuery,
}

/// What [`ListController::apply`] did with a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Items and totals were replaced.
    Applied,
    /// The request failed; previous items were kept.
    Failed(ApiError),
    /// A newer request was issued meanwhile; nothing changed.
    Stale,
}

/// What the view should render.
#[derive(Debug, PartialEq)]
pub enum ListView<'a, T> {
    /// A request is outstanding and nothing has been shown yet, or the
    /// current filter's first result is still pending.
    Loading,
    /// The last applied result had no rows.
    Empty,
    /// Nothing has loaded successfully yet and the last request failed.
    Unavailable,
    /// Rows to render.
    Items(&'a [T]),
}

/// Filter state, request sequencing and the last applied result of one list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListController<T> {
    filter: FilterState,
    sequencer: RequestSequencer,
    items: Vec<T>,
    total: usize,
    loading: bool,
    loaded: bool,
    /// Page the visible rows came from; `None` until a request succeeds.
    shown_page: Option<usize>,
    revision: u64,
}

impl<T> ListController<T> {
    /// Empty controller on page 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            filter: FilterState::new(page_size),
            sequencer: RequestSequencer::default(),
            items: Vec::new(),
            total: 0,
            loading: false,
            loaded: false,
            shown_page: None,
            revision: 0,
        }
    }

    /// Current filter.
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Bumped whenever the list needs a new request: a filter change or an
    /// explicit reload.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the search text (resets to page 1 when it changed).
    pub fn set_search(&mut self, text: &str) -> bool {
        let changed = self.filter.set_search(text);
        self.bump_if(changed)
    }

    /// Replace the category filter (resets to page 1 when it changed).
    pub fn set_category(&mut self, category_id: Option<String>) -> bool {
        let changed = self.filter.set_category(category_id);
        self.bump_if(changed)
    }

    /// Move to `page`, clamped to the known page range.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let upper = self.total_pages().max(1);
        let changed = self.filter.set_page(page.clamp(1, upper));
        self.bump_if(changed)
    }

    /// Ask for the current filter to be fetched again.
    pub fn request_reload(&mut self) {
        self.revision += 1;
    }

    fn bump_if(&mut self, changed: bool) -> bool {
        if changed {
            self.revision += 1;
        }
        changed
    }

    /// Start a request for the current filter.
    pub fn begin(&mut self) -> FetchTicket {
        self.loading = true;
        FetchTicket {
            seq: self.sequencer.next(),
            query: self.filter.query(),
        }
    }

    /// Reconcile a response with visible state.
    pub fn apply(&mut self, ticket: &FetchTicket, result: Result<Page<T>, ApiError>) -> ApplyOutcome {
        if !self.sequencer.is_current(ticket.seq) {
            tracing::debug!(
                seq = ticket.seq,
                page = ticket.query.page,
                "dropping superseded list response"
            );
            return ApplyOutcome::Stale;
        }

        self.loading = false;
        match result {
            Ok(page) => {
                self.items = page.items;
                self.total = page.total;
                self.loaded = true;
                self.shown_page = Some(ticket.query.page);
                ApplyOutcome::Applied
            },
            Err(err) => {
                self.loaded = true;
                // The pager follows the rows that are still visible.
                if let Some(page) = self.shown_page {
                    self.filter.set_page(page);
                }
                ApplyOutcome::Failed(err)
            },
        }
    }

    /// Whether a request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Items of the last applied result.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Total row count of the last applied result.
    pub fn total(&self) -> usize {
        self.total
    }

    /// `ceil(total / page_size)`.
    pub fn total_pages(&self) -> usize {
        page_count(self.total, self.filter.page_size())
    }

    /// Render state.
    pub fn view(&self) -> ListView<'_, T> {
        if self.loading || !self.loaded {
            ListView::Loading
        } else if self.shown_page.is_none() {
            ListView::Unavailable
        } else if self.items.is_empty() {
            ListView::Empty
        } else {
            ListView::Items(&self.items)
        }
    }

    /// Drop rows matching `pred` after the server confirmed a delete.
    /// Returns how many rows went away.
    pub fn remove_where(&mut self, pred: impl Fn(&T) -> bool) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !pred(item));
        let removed = before - self.items.len();
        self.total = self.total.saturating_sub(removed);
        removed
    }

    /// Patch rows matching `pred` in place after a confirmed update.
    pub fn update_where(&mut self, pred: impl Fn(&T) -> bool, patch: impl Fn(&mut T)) -> usize {
        let mut touched = 0;
        for item in self.items.iter_mut().filter(|item| pred(item)) {
            patch(item);
            touched += 1;
        }
        touched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(items: &[&str], total: usize) -> Page<String> {
        Page::new(items.iter().map(|s| s.to_string()).collect(), total)
    }

    #[test]
    fn sequencer_is_monotonic() {
        let mut seq = RequestSequencer::default();
        let first = seq.next();
        let second = seq.next();
        assert!(second > first);
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn later_request_wins_even_when_it_resolves_first() {
        let mut list = ListController::<String>::new(10);
        let r1 = list.begin();
        list.set_search("rust");
        let r2 = list.begin();

        assert_eq!(list.apply(&r2, Ok(page(&["new"], 1))), ApplyOutcome::Applied);
        assert_eq!(list.apply(&r1, Ok(page(&["old-a", "old-b"], 2))), ApplyOutcome::Stale);

        assert_eq!(list.items(), ["new".to_string()]);
        assert_eq!(list.total(), 1);
        assert!(!list.is_loading());
    }

    #[test]
    fn stale_failure_is_ignored_too() {
        let mut list = ListController::<String>::new(10);
        let r1 = list.begin();
        let r2 = list.begin();
        assert_eq!(list.apply(&r1, Err(ApiError::Network("offline".into()))), ApplyOutcome::Stale);
        assert!(list.is_loading());
        assert_eq!(list.apply(&r2, Ok(page(&["a"], 1))), ApplyOutcome::Applied);
    }

    #[test]
    fn failure_keeps_previous_items() {
        let mut list = ListController::<String>::new(10);
        let ticket = list.begin();
        list.apply(&ticket, Ok(page(&["a", "b"], 12)));

        list.go_to_page(2);
        let ticket = list.begin();
        let outcome = list.apply(
            &ticket,
            Err(ApiError::Http {
                status: 500,
                message: None,
            }),
        );
        assert!(matches!(outcome, ApplyOutcome::Failed(_)));
        assert_eq!(list.items().len(), 2);
        assert_eq!(list.total(), 12);
        assert!(!list.is_loading());
    }

    #[test]
    fn empty_result_is_distinct_from_loading() {
        let mut list = ListController::<String>::new(10);
        assert_eq!(list.view(), ListView::Loading);

        let ticket = list.begin();
        assert_eq!(list.view(), ListView::Loading);

        let page: Page<String> =
            serde_json::from_str(r#"{"data":[],"total":0}"#).expect("page json");
        assert_eq!(list.apply(&ticket, Ok(page)), ApplyOutcome::Applied);
        assert_eq!(list.view(), ListView::Empty);
        assert_eq!(list.total_pages(), 0);
    }

    #[test]
    fn first_failure_does_not_spin_forever() {
        let mut list = ListController::<String>::new(10);
        let ticket = list.begin();
        list.apply(&ticket, Err(ApiError::Network("offline".into())));
        assert_eq!(list.view(), ListView::Unavailable);

        list.request_reload();
        let ticket = list.begin();
        assert_eq!(list.view(), ListView::Loading);
        list.apply(&ticket, Ok(page(&[], 0)));
        assert_eq!(list.view(), ListView::Empty);
    }

    #[test]
    fn failed_page_move_returns_to_visible_page() {
        let mut list = ListController::<String>::new(10);
        let ticket = list.begin();
        list.apply(&ticket, Ok(page(&["p1"], 25)));

        assert!(list.go_to_page(2));
        let ticket = list.begin();
        let outcome = list.apply(&ticket, Err(ApiError::Network("offline".into())));
        assert!(matches!(outcome, ApplyOutcome::Failed(_)));
        assert_eq!(list.filter().page(), 1);
        assert_eq!(list.items(), ["p1".to_string()]);

        let before = list.revision();
        assert!(list.go_to_page(2));
        assert!(list.revision() > before);
        assert_eq!(list.begin().query.page, 2);
    }

    #[test]
    fn restoring_page_does_not_request_again() {
        let mut list = ListController::<String>::new(10);
        let ticket = list.begin();
        list.apply(&ticket, Ok(page(&["p1"], 25)));
        list.go_to_page(3);
        let revision = list.revision();

        let ticket = list.begin();
        list.apply(&ticket, Err(ApiError::Network("offline".into())));
        assert_eq!(list.revision(), revision);
    }

    #[test]
    fn filter_changes_bump_revision() {
        let mut list = ListController::<String>::new(10);
        let start = list.revision();
        assert!(!list.set_search(""));
        assert_eq!(list.revision(), start);
        assert!(list.set_search("rust"));
        assert!(list.set_category(Some("2".into())));
        list.request_reload();
        assert_eq!(list.revision(), start + 3);
    }

    #[test]
    fn total_pages_is_ceiling() {
        let mut list = ListController::<String>::new(10);
        let ticket = list.begin();
        list.apply(&ticket, Ok(page(&["a"], 21)));
        assert_eq!(list.total_pages(), 3);
    }

    #[test]
    fn go_to_page_clamps_to_known_range() {
        let mut list = ListController::<String>::new(10);
        let ticket = list.begin();
        list.apply(&ticket, Ok(page(&["a"], 25)));

        assert!(list.go_to_page(9));
        assert_eq!(list.filter().page(), 3);
        assert!(list.go_to_page(0));
        assert_eq!(list.filter().page(), 1);
    }

    #[test]
    fn ticket_carries_filter_snapshot() {
        let mut list = ListController::<String>::new(10);
        list.set_category(Some("4".into()));
        let ticket = list.begin();
        assert_eq!(ticket.query.category.as_deref(), Some("4"));
        assert_eq!(ticket.query.page, 1);
    }

    #[test]
    fn optimistic_patches() {
        let mut list = ListController::<String>::new(10);
        let ticket = list.begin();
        list.apply(&ticket, Ok(page(&["a", "b", "c"], 3)));

        assert_eq!(list.remove_where(|item| item == "b"), 1);
        assert_eq!(list.total(), 2);

        assert_eq!(list.update_where(|item| item == "c", |item| *item = "C".into()), 1);
        assert_eq!(list.items(), ["a".to_string(), "C".to_string()]);
    }
}
