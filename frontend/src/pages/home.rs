use futures::future::LocalBoxFuture;
use journal_shared::{ApiError, Article, ListQuery, ListView, Page};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::{
    api,
    components::{
        article_card::ArticleCard, category_select::CategorySelect,
        loading_spinner::LoadingSpinner, pagination::Pagination,
    },
    config::{ARTICLE_PAGE_SIZE, SEARCH_DEBOUNCE_MS},
    hooks::{use_all_categories, use_debounced, use_list_controller, use_scroll_to_top},
    i18n::current::{common, home as t},
};

fn fetch_feed(query: ListQuery) -> LocalBoxFuture<'static, Result<Page<Article>, ApiError>> {
    Box::pin(async move { api::fetch_articles(&query).await })
}

/// Public article feed with title search and a category filter.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    use_scroll_to_top();
    let list = use_list_controller(ARTICLE_PAGE_SIZE, fetch_feed, t::LOAD_FAILED);
    let categories = use_all_categories();
    let search_input = use_state(String::new);
    let search = use_debounced((*search_input).clone(), SEARCH_DEBOUNCE_MS);

    {
        let list = list.clone();
        use_effect_with(search, move |search| {
            list.set_search(search);
            || ()
        });
    }

    let on_search_input = {
        let search_input = search_input.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                search_input.set(target.value());
            }
        })
    };

    let on_category = {
        let list = list.clone();
        Callback::from(move |category: Option<String>| list.set_category(category))
    };

    let on_page_change = {
        let list = list.clone();
        Callback::from(move |page: usize| list.go_to_page(page))
    };

    let on_retry = {
        let list = list.clone();
        Callback::from(move |_: MouseEvent| list.reload())
    };

    let state = list.state();
    let body = match state.view() {
        ListView::Loading => html! { <LoadingSpinner /> },
        ListView::Empty => html! {
            <p class="py-16 text-center text-[var(--muted)]">{ t::NO_RESULTS }</p>
        },
        ListView::Unavailable => html! {
            <div class="py-16 text-center text-[var(--muted)]">
                <p class="mb-4">{ common::UNAVAILABLE }</p>
                <button type="button" class="btn-secondary" onclick={on_retry}>{ common::RETRY }</button>
            </div>
        },
        ListView::Items(items) => html! {
            <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                { for items.iter().map(|article| html! {
                    <ArticleCard key={article.id.clone()} article={article.clone()} />
                }) }
            </div>
        },
    };
    let current_page = state.filter().page();
    let total_pages = state.total_pages();
    let selected_category = state.filter().category_id().map(str::to_string);
    drop(state);

    html! {
        <main class="mx-auto max-w-6xl px-4 pb-16">
            <section class="py-12 text-center">
                <h1 class="text-4xl font-bold tracking-tight">{ t::HERO_TITLE }</h1>
                <p class="mt-3 text-[var(--muted)]">{ t::HERO_SUBTITLE }</p>
            </section>

            <div class="mb-8 flex flex-col gap-3 sm:flex-row">
                <input
                    type="search"
                    class="form-input flex-1"
                    placeholder={t::SEARCH_PLACEHOLDER}
                    value={(*search_input).clone()}
                    oninput={on_search_input}
                />
                <CategorySelect
                    class={classes!("sm:w-56")}
                    categories={categories.items.clone()}
                    value={selected_category}
                    placeholder={common::ALL_CATEGORIES}
                    disabled={categories.loading}
                    on_change={on_category}
                />
            </div>

            { body }

            <div class="mt-10">
                <Pagination
                    current_page={current_page}
                    total_pages={total_pages}
                    on_page_change={on_page_change}
                />
            </div>
        </main>
    }
}
