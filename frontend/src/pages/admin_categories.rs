use std::rc::Rc;

use futures::future::LocalBoxFuture;
use journal_shared::{
    forms::{submit_if_valid, CategoryForm, FieldErrors, SubmitGuard},
    ApiError, Category, ListQuery, ListView, Page,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::{
    api,
    components::{
        admin_layout::AdminLayout,
        confirm_dialog::{ConfirmDialog, Modal},
        loading_spinner::LoadingSpinner,
        pagination::Pagination,
    },
    config::{CATEGORY_PAGE_SIZE, SEARCH_DEBOUNCE_MS},
    hooks::{use_debounced, use_list_controller},
    i18n::current::{admin_categories as t, common},
    notify::use_notifier,
    session::use_session,
    utils::{format_date, log_error},
};

fn fetch_table(query: ListQuery) -> LocalBoxFuture<'static, Result<Page<Category>, ApiError>> {
    Box::pin(async move { api::fetch_categories(&query).await })
}

#[function_component(AdminCategoriesPage)]
pub fn admin_categories_page() -> Html {
    html! {
        <AdminLayout>
            <CategoryTable />
        </AdminLayout>
    }
}

#[derive(Clone, PartialEq)]
enum Editing {
    Closed,
    Adding,
    Renaming(Category),
}

#[function_component(CategoryTable)]
fn category_table() -> Html {
    let session = use_session();
    let notifier = use_notifier();
    let list = use_list_controller(CATEGORY_PAGE_SIZE, fetch_table, t::LOAD_FAILED);

    let search_input = use_state(String::new);
    let search = use_debounced((*search_input).clone(), SEARCH_DEBOUNCE_MS);

    let editing = use_state(|| Editing::Closed);
    let name_input = use_state(String::new);
    let errors = use_state(FieldErrors::default);
    let guard = use_mut_ref(SubmitGuard::default);
    let saving = use_state(|| false);

    let pending_delete = use_state(|| None::<Category>);
    let deleting = use_state(|| false);

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
    let on_page_change = {
        let list = list.clone();
        Callback::from(move |page: usize| list.go_to_page(page))
    };

    let open_editor = {
        let editing = editing.clone();
        let name_input = name_input.clone();
        let errors = errors.clone();
        Callback::from(move |next: Editing| {
            let name = match &next {
                Editing::Renaming(category) => category.name.clone(),
                Editing::Adding | Editing::Closed => String::new(),
            };
            name_input.set(name);
            errors.set(FieldErrors::default());
            editing.set(next);
        })
    };
    let close_editor = {
        let open_editor = open_editor.clone();
        let saving = saving.clone();
        Callback::from(move |_| {
            if !*saving {
                open_editor.emit(Editing::Closed);
            }
        })
    };
    let on_name = {
        let name_input = name_input.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                name_input.set(target.value());
            }
        })
    };

    let on_save = {
        let session = session.clone();
        let notifier = notifier.clone();
        let list = list.clone();
        let editing = editing.clone();
        let name_input = name_input.clone();
        let errors = errors.clone();
        let saving = saving.clone();
        let open_editor = open_editor.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let target = (*editing).clone();
            if target == Editing::Closed || !guard.borrow_mut().try_begin() {
                return;
            }
            let finish = {
                let guard = guard.clone();
                let saving = saving.clone();
                Rc::new(move || {
                    guard.borrow_mut().finish();
                    saving.set(false);
                })
            };

            let form = CategoryForm {
                name: (*name_input).clone(),
            };
            let submitted = submit_if_valid(&form, || {
                let payload = form.payload();
                let session = session.clone();
                let notifier = notifier.clone();
                let list = list.clone();
                let open_editor = open_editor.clone();
                let finish = finish.clone();
                spawn_local(async move {
                    let result = match &target {
                        Editing::Renaming(category) => {
                            api::update_category(&session, &category.id, &payload).await
                        },
                        Editing::Adding | Editing::Closed => {
                            api::create_category(&session, &payload).await
                        },
                    };
                    finish();
                    match (result, target) {
                        (Ok(()), Editing::Renaming(category)) => {
                            list.update_where(
                                |item| item.id == category.id,
                                |item| item.name = payload.name.clone(),
                            );
                            notifier.success(t::UPDATED);
                            open_editor.emit(Editing::Closed);
                        },
                        (Ok(()), _) => {
                            // The new row's position depends on server ordering.
                            list.reload();
                            notifier.success(t::CREATED);
                            open_editor.emit(Editing::Closed);
                        },
                        (Err(err), target) => {
                            log_error("categories", &err.to_string());
                            let fallback = match target {
                                Editing::Renaming(_) => t::UPDATE_FAILED,
                                Editing::Adding | Editing::Closed => t::CREATE_FAILED,
                            };
                            notifier.error(err.user_message(fallback));
                        },
                    }
                });
            });

            match submitted {
                Ok(()) => {
                    errors.set(FieldErrors::default());
                    saving.set(true);
                },
                Err(field_errors) => {
                    errors.set(field_errors);
                    finish();
                },
            }
        })
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
            let Some(category) = (*pending_delete).clone() else {
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
                match api::delete_category(&session, &category.id).await {
                    Ok(()) => {
                        list.remove_where(|item| item.id == category.id);
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
                        log_error("categories", &err.to_string());
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
    let offset = (state.filter().page() - 1) * state.filter().page_size();
    let rows = match state.view() {
        ListView::Loading => html! {
            <tr><td colspan="4"><LoadingSpinner /></td></tr>
        },
        ListView::Empty => html! {
            <tr><td colspan="4" class="py-12 text-center text-[var(--muted)]">{ t::EMPTY }</td></tr>
        },
        ListView::Unavailable => html! {
            <tr>
                <td colspan="4" class="py-12 text-center text-[var(--muted)]">
                    <p class="mb-4">{ common::UNAVAILABLE }</p>
                    <button type="button" class="btn-secondary" onclick={on_retry}>{ common::RETRY }</button>
                </td>
            </tr>
        },
        ListView::Items(items) => html! {
            { for items.iter().enumerate().map(|(index, category)| {
                let ask_rename = {
                    let open_editor = open_editor.clone();
                    let category = category.clone();
                    Callback::from(move |_: MouseEvent| open_editor.emit(Editing::Renaming(category.clone())))
                };
                let ask_delete = {
                    let pending_delete = pending_delete.clone();
                    let category = category.clone();
                    Callback::from(move |_: MouseEvent| pending_delete.set(Some(category.clone())))
                };
                html! {
                    <tr key={category.id.clone()} class="border-b border-[var(--border)] last:border-0">
                        <td class="p-3 text-[var(--muted)]">{ offset + index + 1 }</td>
                        <td class="p-3 font-medium">{ &category.name }</td>
                        <td class="p-3 text-[var(--muted)]">{ format_date(category.created_at.as_deref()) }</td>
                        <td class="p-3">
                            <div class="flex gap-2">
                                <button type="button" class="btn-secondary text-xs" onclick={ask_rename}>{ t::RENAME }</button>
                                <button type="button" class="btn-danger text-xs" onclick={ask_delete}>{ common::DELETE }</button>
                            </div>
                        </td>
                    </tr>
                }
            }) }
        },
    };
    let current_page = state.filter().page();
    let total_pages = state.total_pages();
    drop(state);

    let add_category = {
        let open_editor = open_editor.clone();
        Callback::from(move |_: MouseEvent| open_editor.emit(Editing::Adding))
    };

    let editor = match &*editing {
        Editing::Closed => Html::default(),
        mode => {
            let title = if matches!(mode, Editing::Renaming(_)) { t::RENAME_TITLE } else { t::ADD_TITLE };
            let cancel = {
                let close_editor = close_editor.clone();
                Callback::from(move |_: MouseEvent| close_editor.emit(()))
            };
            html! {
                <Modal title={title} on_close={close_editor.clone()}>
                    <form onsubmit={on_save}>
                        <label class="form-label" for="category-name">{ t::NAME_LABEL }</label>
                        <input
                            id="category-name"
                            class="form-input w-full"
                            value={(*name_input).clone()}
                            oninput={on_name}
                        />
                        if let Some(message) = errors.get("name") {
                            <p class="mt-1 text-xs text-red-600">{ message }</p>
                        }
                        <div class="mt-6 flex justify-end gap-3">
                            <button type="button" class="btn-secondary" onclick={cancel} disabled={*saving}>
                                { common::CANCEL }
                            </button>
                            <button type="submit" class="btn-primary" disabled={*saving}>
                                { if *saving { common::SAVING } else { common::SAVE } }
                            </button>
                        </div>
                    </form>
                </Modal>
            }
        },
    };

    html! {
        <>
            <div class="mb-6 flex flex-wrap items-center justify-between gap-4">
                <h1 class="text-2xl font-bold">{ t::TITLE }</h1>
                <button type="button" class="btn-primary" onclick={add_category}>{ t::ADD }</button>
            </div>

            <input
                type="search"
                class="form-input mb-4 w-full sm:w-80"
                placeholder={t::SEARCH_PLACEHOLDER}
                value={(*search_input).clone()}
                oninput={on_search_input}
            />

            <div class="overflow-x-auto rounded-2xl border border-[var(--border)] bg-[var(--surface)]">
                <table class="w-full text-left text-sm">
                    <thead class="bg-[var(--surface-alt)] text-xs uppercase tracking-wide text-[var(--muted)]">
                        <tr>
                            <th class="p-3">{"#"}</th>
                            <th class="p-3">{ t::COL_NAME }</th>
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

            { editor }

            if let Some(category) = (*pending_delete).as_ref() {
                <ConfirmDialog
                    title={t::DELETE_CONFIRM_TITLE}
                    message={format!("\"{}\": {}", category.name, t::DELETE_CONFIRM_BODY)}
                    busy={*deleting}
                    on_confirm={confirm_delete}
                    on_cancel={cancel_delete}
                />
            }
        </>
    }
}
