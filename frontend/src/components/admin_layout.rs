use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{header::Header, logout_button::LogoutButton, require_session::RequireSession},
    i18n::current::{admin_layout as t, common},
    router::Route,
};

#[derive(Properties, PartialEq)]
pub struct AdminLayoutProps {
    pub children: Html,
}

/// Sidebar and header around every admin page. Without a stored token the
/// visitor is sent to the 404 page instead.
#[function_component(AdminLayout)]
pub fn admin_layout(props: &AdminLayoutProps) -> Html {
    let route = use_route::<Route>();
    let in_categories = matches!(route, Some(Route::AdminCategories));

    let link_class = |active: bool| {
        classes!(
            "block",
            "rounded-lg",
            "px-3",
            "py-2",
            "text-sm",
            "font-semibold",
            "hover:bg-[var(--surface-alt)]",
            active.then_some("bg-[var(--surface-alt)] text-[var(--primary)]")
        )
    };

    html! {
        <RequireSession fallback={Route::NotFound}>
            <div class="flex min-h-screen bg-[var(--bg)]">
                <aside class="hidden w-56 shrink-0 flex-col border-r border-[var(--border)] bg-[var(--surface)] p-4 md:flex">
                    <Link<Route> to={Route::Home} classes={classes!("mb-8", "text-xl", "font-bold")}>
                        { common::BRAND_NAME }
                    </Link<Route>>
                    <nav class="flex flex-1 flex-col gap-1" aria-label={t::SIDEBAR_ARIA}>
                        <Link<Route> to={Route::AdminArticles} classes={link_class(!in_categories)}>
                            { t::NAV_ARTICLES }
                        </Link<Route>>
                        <Link<Route> to={Route::AdminCategories} classes={link_class(in_categories)}>
                            { t::NAV_CATEGORIES }
                        </Link<Route>>
                    </nav>
                    <LogoutButton class={link_class(false)} />
                </aside>
                <div class="flex min-w-0 flex-1 flex-col">
                    <Header />
                    <main class="flex-1 p-6">
                        { props.children.clone() }
                    </main>
                </div>
            </div>
        </RequireSession>
    }
}
