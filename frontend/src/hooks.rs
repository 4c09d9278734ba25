use std::{
    cell::{Ref, RefCell},
    rc::Rc,
};

use futures::future::LocalBoxFuture;
use gloo_timers::callback::Timeout;
use journal_shared::{
    debounce::Debouncer, paginator::collect_all_pages, ApiError, ApplyOutcome, Category,
    ListController, ListQuery, Page,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::use_location;

use crate::{
    api::CategoryPages,
    config::{CATEGORY_DROPDOWN_PAGE_SIZE, MAX_CATEGORY_PAGES},
    i18n::current::common as t,
    notify::use_notifier,
    utils::log_error,
};

/// Value that trails `value` until it has stopped changing for `delay_ms`.
///
/// Every change replaces the pending [`Timeout`]; dropping the old one
/// cancels it, so at most one propagation is scheduled at a time.
#[hook]
pub fn use_debounced<T>(value: T, delay_ms: u32) -> T
where
    T: Clone + PartialEq + 'static,
{
    let settled = use_state_eq(|| value.clone());
    let debouncer = use_mut_ref(|| Debouncer::<T>::new(delay_ms));
    let timer = use_mut_ref(|| None::<Timeout>);

    {
        let settled = settled.clone();
        let debouncer = debouncer.clone();
        let timer = timer.clone();
        use_effect_with(value, move |value| {
            let ticket = debouncer.borrow_mut().push(value.clone());
            let delay = debouncer.borrow().delay_ms();
            let pending = {
                let debouncer = debouncer.clone();
                Timeout::new(delay, move || {
                    if let Some(next) = debouncer.borrow_mut().fire(ticket) {
                        settled.set(next);
                    }
                })
            };
            *timer.borrow_mut() = Some(pending);
            || ()
        });
    }

    use_effect_with((), move |_| {
        move || {
            debouncer.borrow_mut().cancel();
            timer.borrow_mut().take();
        }
    });

    (*settled).clone()
}

/// Loads one page of `T` for a query.
pub type PageFetcher<T> = fn(ListQuery) -> LocalBoxFuture<'static, Result<Page<T>, ApiError>>;

/// Handle returned by [`use_list_controller`].
pub struct ListHandle<T> {
    controller: Rc<RefCell<ListController<T>>>,
    refresh: UseForceUpdateHandle,
}

impl<T> Clone for ListHandle<T> {
    fn clone(&self) -> Self {
        Self {
            controller: self.controller.clone(),
            refresh: self.refresh.clone(),
        }
    }
}

impl<T> ListHandle<T> {
    pub fn state(&self) -> Ref<'_, ListController<T>> {
        self.controller.borrow()
    }

    pub fn set_search(&self, text: &str) {
        if self.controller.borrow_mut().set_search(text) {
            self.refresh.force_update();
        }
    }

    pub fn set_category(&self, category_id: Option<String>) {
        if self.controller.borrow_mut().set_category(category_id) {
            self.refresh.force_update();
        }
    }

    pub fn go_to_page(&self, page: usize) {
        if self.controller.borrow_mut().go_to_page(page) {
            self.refresh.force_update();
        }
    }

    /// Fetch the current filter again.
    pub fn reload(&self) {
        self.controller.borrow_mut().request_reload();
        self.refresh.force_update();
    }

    pub fn remove_where(&self, pred: impl Fn(&T) -> bool) {
        if self.controller.borrow_mut().remove_where(pred) > 0 {
            self.refresh.force_update();
        }
    }

    pub fn update_where(&self, pred: impl Fn(&T) -> bool, patch: impl Fn(&mut T)) {
        if self.controller.borrow_mut().update_where(pred, patch) > 0 {
            self.refresh.force_update();
        }
    }
}

/// Paginated, filtered list backed by `fetcher`.
///
/// Exactly one request is issued per filter change (or per
/// [`ListHandle::reload`]); responses that arrive after a newer request was
/// issued are dropped. Failures keep the previous rows and raise an error
/// toast built from the server message or `failure_message`. A failed page
/// move puts the pager back on the page that is still shown.
#[hook]
pub fn use_list_controller<T>(
    page_size: usize,
    fetcher: PageFetcher<T>,
    failure_message: &'static str,
) -> ListHandle<T>
where
    T: 'static,
{
    let controller = use_mut_ref(|| ListController::<T>::new(page_size));
    let refresh = use_force_update();
    let notifier = use_notifier();

    let revision = controller.borrow().revision();
    {
        let controller = controller.clone();
        let refresh = refresh.clone();
        use_effect_with(revision, move |_| {
            let ticket = controller.borrow_mut().begin();
            refresh.force_update();

            spawn_local(async move {
                let result = fetcher(ticket.query.clone()).await;
                let outcome = controller.borrow_mut().apply(&ticket, result);
                match outcome {
                    ApplyOutcome::Applied => refresh.force_update(),
                    ApplyOutcome::Failed(err) => {
                        log_error("list", &err.to_string());
                        notifier.error(err.user_message(failure_message));
                        refresh.force_update();
                    },
                    ApplyOutcome::Stale => {},
                }
            });
            || ()
        });
    }

    ListHandle {
        controller,
        refresh,
    }
}

#[derive(Clone, PartialEq)]
pub struct CategoryOptions {
    pub items: Rc<Vec<Category>>,
    pub loading: bool,
}

/// Every category, gathered page by page for dropdowns.
#[hook]
pub fn use_all_categories() -> CategoryOptions {
    let state = use_state(|| CategoryOptions {
        items: Rc::new(Vec::new()),
        loading: true,
    });
    let notifier = use_notifier();

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let collected =
                    collect_all_pages(&CategoryPages, CATEGORY_DROPDOWN_PAGE_SIZE, MAX_CATEGORY_PAGES)
                        .await;
                if let Some(err) = collected.error.as_ref() {
                    log_error("categories", &err.to_string());
                    notifier.error(err.user_message(t::CATEGORIES_FAILED));
                }
                state.set(CategoryOptions {
                    items: Rc::new(collected.items),
                    loading: false,
                });
            });
            || ()
        });
    }

    (*state).clone()
}

/// Automatically scroll the viewport to the top whenever the current route
/// changes.
#[hook]
pub fn use_scroll_to_top() {
    let location = use_location();

    use_effect_with(location, move |location| {
        if location.is_some() {
            scroll_window_to_top();
        }

        || ()
    });
}

fn scroll_window_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
