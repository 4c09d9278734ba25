use journal_shared::{text::excerpt, Article};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    config::EXCERPT_CHARS,
    i18n::current::{common, home as t},
    router::Route,
    utils::format_date,
};

#[derive(Properties, PartialEq, Clone)]
pub struct ArticleCardProps {
    pub article: Article,
    /// Drop the excerpt, for the compact "other articles" strip.
    #[prop_or(false)]
    pub compact: bool,
}

#[function_component(ArticleCard)]
pub fn article_card(props: &ArticleCardProps) -> Html {
    let article = &props.article;
    let detail_route = Route::ArticleDetail {
        id: article.id.clone(),
    };

    html! {
        <article class="flex flex-col overflow-hidden rounded-2xl border border-[var(--border)] bg-[var(--surface)] shadow-sm transition-shadow hover:shadow-[var(--shadow)]">
            {
                if let Some(image) = article.image_url.as_ref().filter(|url| !url.is_empty()) {
                    html! {
                        <Link<Route> to={detail_route.clone()} classes={classes!("block", "aspect-[16/9]", "overflow-hidden")}>
                            <img src={image.clone()} alt={article.title.clone()} loading="lazy" class="h-full w-full object-cover" />
                        </Link<Route>>
                    }
                } else {
                    html! {}
                }
            }
            <div class="flex flex-1 flex-col gap-3 p-5">
                <div class="flex flex-wrap items-center gap-2 text-xs text-[var(--muted)]">
                    <span>{ format_date(article.created_at.as_deref()) }</span>
                    <span aria-hidden="true">{"·"}</span>
                    <span class="rounded-full bg-[var(--surface-alt)] px-2 py-0.5 font-semibold text-[var(--primary)]">
                        { article.category_name(common::UNCATEGORIZED) }
                    </span>
                </div>
                <h3 class="text-lg font-semibold leading-snug">
                    <Link<Route> to={detail_route.clone()} classes={classes!("hover:text-[var(--primary)]")}>
                        { &article.title }
                    </Link<Route>>
                </h3>
                if !props.compact {
                    <p class="text-sm text-[var(--muted)]">{ excerpt(&article.content, EXCERPT_CHARS) }</p>
                    <Link<Route> to={detail_route} classes={classes!("mt-auto", "text-sm", "font-semibold", "text-[var(--primary)]")}>
                        { t::READ_MORE }
                    </Link<Route>>
                }
            </div>
        </article>
    }
}
