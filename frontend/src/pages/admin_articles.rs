use futures::future::LocalBoxFuture;
use journal_shared::{ApiError, Article, ListQuery, ListView, Page};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    api,
    components::{
        admin_layout::AdminLayout, category_select::CategorySelect,
        confirm_dialog::ConfirmDialog, loading_spinner::LoadingSpinner, pagination::Pagination,
    },
    config::{ARTICLE_PAGE_SIZE, CATEGORY_DEBOUNCE_MS, SEARCH_DEBOUNCE_MS},
    hooks::{use_all_categories, use_debounced, use_list_controller},
    i18n::{
        current::{admin_articles as t, common},
        fill_one,
    },
    notify::use_notifier,
    router::Route,
    session::use_session,
    utils::{format_date, log_error},
};

fn fetch_table(query: ListQuery) -> LocalBoxFuture<'static, Result<Page<Article>, ApiError>> {
    Box::pin(async move { api::fetch_articles(&query).await })
}

#[function_component(AdminArticlesPage)]
pub fn admin_articles_page() -> Html {
    html! {
        <AdminLayout>
            <ArticleTable />
        </AdminLayout>
    }
}

#[function_component(ArticleTable)]
fn article_table() -> Html {
    let session = use_session();
    let notifier = use_notifier();
    let list = use_list_controller(ARTICLE_PAGE_SIZE, fetch_table, t::LOAD_FAILED);
    let categories = use_all_categories();

    let search_input = use_state(String::new);
    let search = use_debounced((*search_input).clone(), SEARCH_DEBOUNCE_MS);
    let category_input = use_state(|| None::<String>);
    let category = use_debounced((*category_input).clone(), CATEGORY_DEBOUNCE_MS);

    let pending_delete = use_state(|| None::<Article>);
    let deleting = use_state(|| false);

    {
        let list = list.clone();
        use_effect_with(search, move |search| {
            list.set_search(search);
            || ()
        });
    }
    {
        let list = list.clone();
        use_effect_with(category, move |category| {
            list.set_category(category.clone());
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
        let category_input = category_input.clone();
        Callback::from(move |next: Option<String>| category_input.set(next))
    };
    let on_page_change = {
        let list = list.clone();
        Callback::from(move |page: usize| list.go_to_page(page))
    };

    let cancel_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_| pending_delete.set(None))
    };
    let confirm_delete = {
        let pending_delete = pending_delete.clone();
        let deleting = deleting.clone();
        let list = list.clone();
        Callback::from(move |_| {
            let Some(article) = (*pending_delete).clone() else {
                return;
            };
            if *deleting {
                return;
            }
            deleting.set(true);

            let session = session.clone();
            let notifier = notifier.clone();
            let pending_delete = pending_delete.clone();
            let deleting = deleting.clone();
            let list = list.clone();
            spawn_local(async move {
                match api::delete_article(&session, &article.id).await {
                    Ok(()) => {
                        list.remove_where(|item| item.id == article.id);
                        notifier.success(t::DELETED);
                        let (page, now_empty) = {
                            let state = list.state();
                            (state.filter().page(), state.items().is_empty())
                        };
                        if now_empty && page > 1 {
                            list.go_to_page(page - 1);
                        } else if now_empty {
                            list.reload();
                        }
                    },
                    Err(err) => {
                        log_error("articles", &err.to_string());
                        notifier.error(err.user_message(t::DELETE_FAILED));
                    },
                }
                deleting.set(false);
                pending_delete.set(None);
            });
        })
    };

    let on_retry = {
        let list = list.clone();
        Callback::from(move |_: MouseEvent| list.reload())
    };

    let state = list.state();
    let rows = match state.view() {
        ListView::Loading => html! {
            <tr><td colspan="5"><LoadingSpinner /></td></tr>
        },
        ListView::Empty => html! {
            <tr><td colspan="5" class="py-12 text-center text-[var(--muted)]">{ t::EMPTY }</td></tr>
        },
        ListView::Unavailable => html! {
            <tr>
                <td colspan="5" class="py-12 text-center text-[var(--muted)]">
                    <p class="mb-4">{ common::UNAVAILABLE }</p>
                    <button type="button" class="btn-secondary" onclick={on_retry}>{ common::RETRY }</button>
                </td>
            </tr>
        },
        ListView::Items(items) => html! {
            { for items.iter().map(|article| {
                let ask_delete = {
                    let pending_delete = pending_delete.clone();
                    let article = article.clone();
                    Callback::from(move |_: MouseEvent| pending_delete.set(Some(article.clone())))
                };
                html! {
                    <tr key={article.id.clone()} class="border-b border-[var(--border)] last:border-0">
                        <td class="p-3">
                            if let Some(image) = article.image_url.as_ref().filter(|url| !url.is_empty()) {
                                <img src={image.clone()} alt="" class="h-12 w-20 rounded-md object-cover" loading="lazy" />
                            }
                        </td>
                        <td class="p-3 font-medium">{ &article.title }</td>
                        <td class="p-3">{ article.category_name(common::UNCATEGORIZED) }</td>
                        <td class="p-3 text-[var(--muted)]">{ format_date(article.created_at.as_deref()) }</td>
                        <td class="p-3">
                            <div class="flex gap-2">
                                <Link<Route> to={Route::ArticleDetail { id: article.id.clone() }} classes={classes!("btn-secondary", "text-xs")}>
                                    { t::PREVIEW }
                                </Link<Route>>
                                <Link<Route> to={Route::EditArticle { id: article.id.clone() }} classes={classes!("btn-secondary", "text-xs")}>
                                    { t::EDIT }
                                </Link<Route>>
                                <button type="button" class="btn-danger text-xs" onclick={ask_delete}>
                                    { common::DELETE }
                                </button>
                            </div>
                        </td>
                    </tr>
                }
            }) }
        },
    };
    let total = state.total();
    let current_page = state.filter().page();
    let total_pages = state.total_pages();
    drop(state);

    html! {
        <>
            <div class="mb-6 flex flex-wrap items-center justify-between gap-4">
                <div>
                    <h1 class="text-2xl font-bold">{ t::TITLE }</h1>
                    <p class="text-sm text-[var(--muted)]">{ fill_one(t::TOTAL_TEMPLATE, total) }</p>
                </div>
                <Link<Route> to={Route::NewArticle} classes={classes!("btn-primary")}>{ t::NEW_ARTICLE }</Link<Route>>
            </div>

            <div class="mb-4 flex flex-col gap-3 sm:flex-row">
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
                    value={(*category_input).clone()}
                    placeholder={common::ALL_CATEGORIES}
                    disabled={categories.loading}
                    on_change={on_category}
                />
            </div>

            <div class="overflow-x-auto rounded-2xl border border-[var(--border)] bg-[var(--surface)]">
                <table class="w-full text-left text-sm">
                    <thead class="bg-[var(--surface-alt)] text-xs uppercase tracking-wide text-[var(--muted)]">
                        <tr>
                            <th class="p-3">{ t::COL_IMAGE }</th>
                            <th class="p-3">{ t::COL_TITLE }</th>
                            <th class="p-3">{ t::COL_CATEGORY }</th>
                            <th class="p-3">{ t::COL_CREATED }</th>
                            <th class="p-3">{ t::COL_ACTIONS }</th>
                        </tr>
                    </thead>
                    <tbody>{ rows }</tbody>
                </table>
            </div>

            <div class="mt-6">
                <Pagination current_page={current_page} total_pages={total_pages} on_page_change={on_page_change} />
            </div>

            if let Some(article) = (*pending_delete).as_ref() {
                <ConfirmDialog
                    title={t::DELETE_CONFIRM_TITLE}
                    message={format!("\"{}\": {}", article.title, t::DELETE_CONFIRM_BODY)}
                    busy={*deleting}
                    on_confirm={confirm_delete}
                    on_cancel={cancel_delete}
                />
            }
        </>
    }
}
