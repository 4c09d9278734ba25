//! Browser front-end for the Journal blog: a public article feed and an
//! admin area for articles and categories, talking to a REST API.

mod api;
mod components;
mod config;
mod hooks;
mod i18n;
mod notify;
mod pages;
mod router;
mod session;
mod utils;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <router::AppRouter />
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
