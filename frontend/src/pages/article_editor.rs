use std::rc::Rc;

use journal_shared::{
    forms::{submit_if_valid, validate_image_type, ArticleForm, FieldErrors, SubmitGuard},
    text::word_count,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, Url};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api,
    components::{
        admin_layout::AdminLayout, category_select::CategorySelect,
        loading_spinner::LoadingSpinner,
    },
    hooks::use_all_categories,
    i18n::{
        current::{article_editor as t, common},
        fill_one,
    },
    notify::use_notifier,
    router::Route,
    session::use_session,
    utils::log_error,
};

#[derive(Properties, PartialEq)]
pub struct ArticleEditorProps {
    /// Article being edited; `None` creates a new one.
    #[prop_or_default]
    pub id: Option<String>,
}

#[function_component(ArticleEditorPage)]
pub fn article_editor_page(props: &ArticleEditorProps) -> Html {
    html! {
        <AdminLayout>
            <ArticleEditor id={props.id.clone()} />
        </AdminLayout>
    }
}

#[derive(Clone, Copy, PartialEq)]
enum LoadState {
    Loading,
    Missing,
    Ready,
}

fn revoke(object_url: &mut Option<String>) {
    if let Some(url) = object_url.take() {
        let _ = Url::revoke_object_url(&url);
    }
}

#[function_component(ArticleEditor)]
fn article_editor(props: &ArticleEditorProps) -> Html {
    let session = use_session();
    let notifier = use_notifier();
    let navigator = use_navigator();
    let categories = use_all_categories();

    // Title, category and content; the image URL lives apart so a finished
    // upload never overwrites edits made while it was in flight.
    let form = use_state(ArticleForm::default);
    let image_url = use_state(|| None::<String>);
    let errors = use_state(FieldErrors::default);
    let load_state = use_state(|| {
        if props.id.is_some() {
            LoadState::Loading
        } else {
            LoadState::Ready
        }
    });
    let uploading = use_state(|| false);
    let saving = use_state(|| false);
    let guard = use_mut_ref(SubmitGuard::default);
    // Local preview shown while the upload is in flight.
    let preview = use_state(|| None::<String>);
    let object_url = use_mut_ref(|| None::<String>);

    {
        let form = form.clone();
        let image_url = image_url.clone();
        let load_state = load_state.clone();
        let notifier = notifier.clone();
        use_effect_with(props.id.clone(), move |id| {
            if let Some(id) = id.clone() {
                load_state.set(LoadState::Loading);
                spawn_local(async move {
                    match api::fetch_article(&id).await {
                        Ok(Some(article)) => {
                            form.set(ArticleForm {
                                category_id: article
                                    .resolved_category_id()
                                    .unwrap_or_default()
                                    .to_string(),
                                title: article.title,
                                content: article.content,
                                image_url: None,
                            });
                            image_url.set(article.image_url.filter(|url| !url.is_empty()));
                            load_state.set(LoadState::Ready);
                        },
                        Ok(None) => load_state.set(LoadState::Missing),
                        Err(err) => {
                            log_error("editor", &err.to_string());
                            notifier.error(err.user_message(t::LOAD_FAILED));
                            load_state.set(LoadState::Missing);
                        },
                    }
                });
            }
            || ()
        });
    }

    {
        let object_url = object_url.clone();
        use_effect_with((), move |_| move || revoke(&mut object_url.borrow_mut()));
    }

    let update = {
        let form = form.clone();
        move |edit: fn(&mut ArticleForm, String)| {
            let form = form.clone();
            move |value: String| {
                let mut next = (*form).clone();
                edit(&mut next, value);
                form.set(next);
            }
        }
    };

    let on_title = {
        let apply = update(|form, value| form.title = value);
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                apply(target.value());
            }
        })
    };
    let on_content = {
        let apply = update(|form, value| form.content = value);
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlTextAreaElement>() {
                apply(target.value());
            }
        })
    };
    let on_category = {
        let apply = update(|form, value| form.category_id = value);
        Callback::from(move |category: Option<String>| apply(category.unwrap_or_default()))
    };

    let on_file = {
        let session = session.clone();
        let notifier = notifier.clone();
        let image_url = image_url.clone();
        let uploading = uploading.clone();
        let preview = preview.clone();
        let object_url = object_url.clone();
        Callback::from(move |event: Event| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            input.set_value("");

            if let Err(message) = validate_image_type(&file.type_()) {
                notifier.error(message);
                return;
            }
            if *uploading {
                return;
            }

            revoke(&mut object_url.borrow_mut());
            match Url::create_object_url_with_blob(&file) {
                Ok(url) => {
                    *object_url.borrow_mut() = Some(url.clone());
                    preview.set(Some(url));
                },
                Err(err) => log_error("editor", &format!("{:?}", err)),
            }
            uploading.set(true);

            let session = session.clone();
            let notifier = notifier.clone();
            let image_url = image_url.clone();
            let uploading = uploading.clone();
            let preview = preview.clone();
            let object_url = object_url.clone();
            spawn_local(async move {
                match api::upload_image(&session, &file).await {
                    Ok(url) => {
                        image_url.set(Some(url));
                        notifier.success(t::UPLOADED);
                    },
                    Err(err) => {
                        log_error("editor", &err.to_string());
                        notifier.error(err.user_message(t::UPLOAD_FAILED));
                    },
                }
                revoke(&mut object_url.borrow_mut());
                preview.set(None);
                uploading.set(false);
            });
        })
    };

    let remove_image = {
        let image_url = image_url.clone();
        let notifier = notifier.clone();
        Callback::from(move |_: MouseEvent| {
            image_url.set(None);
            notifier.success(t::IMAGE_REMOVED);
        })
    };

    let on_submit = {
        let form = form.clone();
        let image_url = image_url.clone();
        let errors = errors.clone();
        let saving = saving.clone();
        let id = props.id.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if !guard.borrow_mut().try_begin() {
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

            let current = ArticleForm {
                image_url: (*image_url).clone(),
                ..(*form).clone()
            };
            let submitted = submit_if_valid(&current, || {
                let payload = current.payload();
                let session = session.clone();
                let notifier = notifier.clone();
                let navigator = navigator.clone();
                let id = id.clone();
                let finish = finish.clone();
                spawn_local(async move {
                    let result = match id.as_deref() {
                        Some(id) => api::update_article(&session, id, &payload).await,
                        None => api::create_article(&session, &payload).await,
                    };
                    finish();
                    match result {
                        Ok(()) => {
                            notifier.success(if id.is_some() { t::UPDATED } else { t::CREATED });
                            if let Some(navigator) = navigator.as_ref() {
                                navigator.push(&Route::AdminArticles);
                            }
                        },
                        Err(err) => {
                            log_error("editor", &err.to_string());
                            notifier.error(err.user_message(common::GENERIC_FAILURE));
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

    match *load_state {
        LoadState::Loading => return html! { <LoadingSpinner /> },
        LoadState::Missing => {
            return html! {
                <div class="py-16 text-center">
                    <p class="mb-6 text-[var(--muted)]">{ t::NOT_FOUND }</p>
                    <Link<Route> to={Route::AdminArticles} classes={classes!("btn-primary")}>{ t::BACK }</Link<Route>>
                </div>
            }
        },
        LoadState::Ready => {},
    }

    let field_error = |field: &str| match errors.get(field) {
        Some(message) => html! { <p class="mt-1 text-xs text-red-600">{ message }</p> },
        None => Html::default(),
    };
    let shown_image = (*preview).clone().or_else(|| (*image_url).clone());
    let words = word_count(&form.content);
    let selected_category = (!form.category_id.is_empty()).then(|| form.category_id.clone());
    let heading = if props.id.is_some() { t::EDIT_TITLE } else { t::CREATE_TITLE };

    html! {
        <form class="mx-auto max-w-3xl" onsubmit={on_submit}>
            <Link<Route> to={Route::AdminArticles} classes={classes!("text-sm", "text-[var(--muted)]", "hover:text-[var(--primary)]")}>
                { t::BACK }
            </Link<Route>>
            <h1 class="mb-6 mt-2 text-2xl font-bold">{ heading }</h1>

            <label class="form-label" for="article-title">{ t::TITLE_LABEL }</label>
            <input id="article-title" class="form-input w-full" value={form.title.clone()} oninput={on_title} />
            { field_error("title") }

            <label class="form-label mt-4" for="article-category">{ t::CATEGORY_LABEL }</label>
            <CategorySelect
                id="article-category"
                class={classes!("w-full")}
                categories={categories.items.clone()}
                value={selected_category}
                placeholder={common::SELECT_CATEGORY}
                disabled={categories.loading}
                on_change={on_category}
            />
            { field_error("category_id") }

            <span class="form-label mt-4 block">{ t::IMAGE_LABEL }</span>
            if let Some(image) = shown_image {
                <div class="relative mb-2">
                    <img src={image} alt="" class="max-h-64 w-full rounded-xl object-cover" />
                    if *uploading {
                        <div class="absolute inset-0 flex items-center justify-center rounded-xl bg-black/40 text-sm font-semibold text-white">
                            { t::UPLOADING }
                        </div>
                    } else {
                        <button type="button" class="btn-danger absolute right-2 top-2 text-xs" onclick={remove_image}>
                            { t::REMOVE_IMAGE }
                        </button>
                    }
                </div>
            }
            <input
                type="file"
                accept="image/jpeg,image/png"
                class="form-input w-full"
                disabled={*uploading}
                onchange={on_file}
            />
            { field_error("image_url") }

            <div class="mt-4 flex items-baseline justify-between">
                <label class="form-label" for="article-content">{ t::CONTENT_LABEL }</label>
                <span class="text-xs text-[var(--muted)]">{ fill_one(t::WORDS_TEMPLATE, words) }</span>
            </div>
            <textarea
                id="article-content"
                class="form-input min-h-[20rem] w-full font-mono text-sm"
                placeholder={t::CONTENT_PLACEHOLDER}
                value={form.content.clone()}
                oninput={on_content}
            />
            { field_error("content") }

            <div class="mt-6 flex justify-end">
                <button type="submit" class="btn-primary" disabled={*saving || *uploading}>
                    { if *saving { common::SAVING } else { common::SAVE } }
                </button>
            </div>
        </form>
    }
}
