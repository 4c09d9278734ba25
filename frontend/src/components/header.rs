use journal_shared::{Profile, Role};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api,
    components::logout_button::LogoutButton,
    i18n::current::{common, header as t},
    notify::use_notifier,
    router::Route,
    session::use_session,
    utils::log_error,
};

#[function_component(Header)]
pub fn header() -> Html {
    let session = use_session();
    let notifier = use_notifier();
    let route = use_route::<Route>();
    let profile = use_state(|| None::<Profile>);
    let menu_open = use_state(|| false);
    let has_token = session.is_authenticated();

    {
        let profile = profile.clone();
        use_effect_with(has_token, move |has_token| {
            if *has_token {
                spawn_local(async move {
                    match api::fetch_profile(&session).await {
                        Ok(next) => profile.set(Some(next)),
                        Err(err) => {
                            log_error("header", &err.to_string());
                            notifier.error(err.user_message(t::PROFILE_FAILED));
                        },
                    }
                });
            } else {
                profile.set(None);
            }
            || ()
        });
    }

    // Close the menu whenever the route changes.
    {
        let menu_open = menu_open.clone();
        use_effect_with(route.clone(), move |_| {
            menu_open.set(false);
            || ()
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(false))
    };

    let nav_class = |target: Route| {
        classes!(
            "text-sm",
            "font-semibold",
            "transition-colors",
            "hover:text-[var(--primary)]",
            (route.as_ref() == Some(&target)).then_some("text-[var(--primary)]")
        )
    };

    let account = match (has_token, (*profile).as_ref()) {
        (true, Some(profile)) => {
            let is_admin = profile.role == Role::Admin;
            html! {
                <div class="relative">
                    <button
                        type="button"
                        class="flex items-center gap-2 rounded-full px-2 py-1 hover:bg-[var(--surface-alt)]"
                        aria-label={t::ACCOUNT_MENU_ARIA}
                        aria-expanded={(*menu_open).to_string()}
                        onclick={toggle_menu}
                    >
                        <span class="inline-flex h-8 w-8 items-center justify-center rounded-full bg-[var(--primary)] font-bold text-white">
                            { profile.initial() }
                        </span>
                        <span class="hidden text-sm font-medium sm:inline">{ &profile.username }</span>
                    </button>
                    if *menu_open {
                        <div class="absolute right-0 mt-2 flex w-44 flex-col rounded-xl border border-[var(--border)] bg-[var(--surface)] py-2 shadow-xl">
                            <Link<Route> to={Route::Profile} classes={classes!("menu-item")}>
                                { t::MY_ACCOUNT }
                            </Link<Route>>
                            if is_admin {
                                <Link<Route> to={Route::AdminArticles} classes={classes!("menu-item")}>
                                    { t::DASHBOARD }
                                </Link<Route>>
                            }
                            <LogoutButton class={classes!("menu-item", "text-left")} on_done={close_menu} />
                        </div>
                    }
                </div>
            }
        },
        // Token stored but the profile has not arrived (or failed).
        (true, None) => html! {
            <LogoutButton class={classes!("text-sm", "font-semibold")} />
        },
        (false, _) => html! {
            <div class="flex items-center gap-4">
                <Link<Route> to={Route::Login} classes={nav_class(Route::Login)}>{ t::LOGIN }</Link<Route>>
                <Link<Route> to={Route::Register} classes={classes!("btn-primary", "text-sm")}>{ t::REGISTER }</Link<Route>>
            </div>
        },
    };

    html! {
        <header class="sticky top-0 z-30 border-b border-[var(--border)] bg-[var(--surface)]/90 backdrop-blur">
            <div class="mx-auto flex h-16 max-w-6xl items-center justify-between px-4">
                <div class="flex items-center gap-6">
                    <Link<Route> to={Route::Home} classes={classes!("text-xl", "font-bold", "tracking-tight")}>
                        { common::BRAND_NAME }
                    </Link<Route>>
                    <Link<Route> to={Route::Home} classes={nav_class(Route::Home)}>{ t::HOME }</Link<Route>>
                </div>
                { account }
            </div>
        </header>
    }
}
