use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{i18n::current::not_found as t, router::Route};

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="flex min-h-[60vh] flex-col items-center justify-center gap-4 px-4 text-center">
            <h1 class="text-6xl font-bold text-[var(--primary)]">{ t::TITLE }</h1>
            <p class="text-[var(--muted)]">{ t::BODY }</p>
            <Link<Route> to={Route::Home} classes={classes!("btn-primary")}>{ t::HOME }</Link<Route>>
        </main>
    }
}
