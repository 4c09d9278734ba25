use journal_shared::{models::related_articles, Article};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    api,
    components::{article_card::ArticleCard, loading_spinner::LoadingSpinner, raw_html::RawHtml},
    config::{RELATED_FETCH_LIMIT, RELATED_SHOWN},
    hooks::use_scroll_to_top,
    i18n::current::{article_detail as t, common},
    notify::use_notifier,
    router::Route,
    utils::{format_date, log_error},
};

#[derive(Properties, Clone, PartialEq)]
pub struct ArticleDetailProps {
    pub id: String,
}

#[derive(Clone, PartialEq)]
enum Detail {
    Loading,
    Missing,
    Ready(Box<Article>),
}

#[function_component(ArticleDetailPage)]
pub fn article_detail_page(props: &ArticleDetailProps) -> Html {
    use_scroll_to_top();
    let notifier = use_notifier();
    let detail = use_state(|| Detail::Loading);
    let related = use_state(Vec::<Article>::new);
    // Navigating between articles re-uses this component; only the newest
    // id may write state.
    let request_seq = use_mut_ref(|| 0_u64);

    {
        let detail = detail.clone();
        let related = related.clone();
        let notifier = notifier.clone();
        use_effect_with(props.id.clone(), move |id| {
            let request_id = {
                let mut seq = request_seq.borrow_mut();
                *seq += 1;
                *seq
            };
            detail.set(Detail::Loading);
            let id = id.clone();
            spawn_local(async move {
                let next = match api::fetch_article(&id).await {
                    Ok(Some(article)) => Detail::Ready(Box::new(article)),
                    Ok(None) => Detail::Missing,
                    Err(err) => {
                        log_error("article", &err.to_string());
                        notifier.error(err.user_message(t::LOAD_FAILED));
                        Detail::Missing
                    },
                };
                if *request_seq.borrow() != request_id {
                    return;
                }
                detail.set(next);

                match api::fetch_recent_articles(RELATED_FETCH_LIMIT).await {
                    Ok(items) => {
                        if *request_seq.borrow() == request_id {
                            related.set(related_articles(&items, &id, RELATED_SHOWN));
                        }
                    },
                    Err(err) => {
                        log_error("article", &err.to_string());
                        notifier.error(err.user_message(t::RELATED_FAILED));
                    },
                }
            });
            || ()
        });
    }

    let article = match &*detail {
        Detail::Loading => return html! { <LoadingSpinner /> },
        Detail::Missing => {
            return html! {
                <main class="mx-auto max-w-3xl px-4 py-16 text-center">
                    <p class="mb-6 text-[var(--muted)]">{ t::NOT_FOUND }</p>
                    <Link<Route> to={Route::Home} classes={classes!("btn-primary")}>{ t::BACK }</Link<Route>>
                </main>
            }
        },
        Detail::Ready(article) => article,
    };

    html! {
        <main class="mx-auto max-w-3xl px-4 pb-16">
            <Link<Route> to={Route::Home} classes={classes!("mt-6", "inline-block", "text-sm", "text-[var(--muted)]", "hover:text-[var(--primary)]")}>
                { t::BACK }
            </Link<Route>>
            <article class="mt-6">
                <div class="flex flex-wrap items-center gap-2 text-sm text-[var(--muted)]">
                    <span>{ format_date(article.created_at.as_deref()) }</span>
                    <span aria-hidden="true">{"·"}</span>
                    <span>{ article.author_name(common::ANONYMOUS) }</span>
                    <span aria-hidden="true">{"·"}</span>
                    <span class="font-semibold text-[var(--primary)]">{ article.category_name(common::UNCATEGORIZED) }</span>
                </div>
                <h1 class="mt-3 text-4xl font-bold leading-tight">{ &article.title }</h1>
                if let Some(image) = article.image_url.as_ref().filter(|url| !url.is_empty()) {
                    <img src={image.clone()} alt={article.title.clone()} class="mt-8 w-full rounded-2xl object-cover" />
                }
                <RawHtml html={article.content.clone()} class={classes!("article-content", "mt-8")} />
            </article>

            if !related.is_empty() {
                <section class="mt-16">
                    <h2 class="mb-6 text-2xl font-semibold">{ t::OTHER_ARTICLES }</h2>
                    <div class="grid gap-6 sm:grid-cols-3">
                        { for related.iter().map(|item| html! {
                            <ArticleCard key={item.id.clone()} article={item.clone()} compact=true />
                        }) }
                    </div>
                </section>
            }
        </main>
    }
}
