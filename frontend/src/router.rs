use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{footer::Footer, header::Header},
    notify::NotifierProvider,
    pages,
    session::SessionProvider,
};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,

    #[at("/articles/:id")]
    ArticleDetail { id: String },

    #[at("/auth/login")]
    Login,

    #[at("/auth/register")]
    Register,

    #[at("/profile")]
    Profile,

    #[at("/admin")]
    Admin,

    #[at("/admin/articles")]
    AdminArticles,

    #[at("/admin/articles/new")]
    NewArticle,

    #[at("/admin/articles/:id/edit")]
    EditArticle { id: String },

    #[at("/admin/categories")]
    AdminCategories,

    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
struct PublicLayoutProps {
    children: Html,
}

#[function_component(PublicLayout)]
fn public_layout(props: &PublicLayoutProps) -> Html {
    html! {
        <div class="flex flex-col bg-[var(--bg)]" style="min-height: 100vh; min-height: 100svh;">
            <Header />
            <div class="flex-1">
                { props.children.clone() }
            </div>
            <Footer />
        </div>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <PublicLayout><pages::home::HomePage /></PublicLayout> },
        Route::ArticleDetail {
            id,
        } => {
            html! { <PublicLayout><pages::article_detail::ArticleDetailPage id={id} /></PublicLayout> }
        },
        Route::Login => html! { <PublicLayout><pages::auth::LoginPage /></PublicLayout> },
        Route::Register => html! { <PublicLayout><pages::auth::RegisterPage /></PublicLayout> },
        Route::Profile => html! { <PublicLayout><pages::profile::ProfilePage /></PublicLayout> },
        Route::Admin => html! { <Redirect<Route> to={Route::AdminArticles} /> },
        Route::AdminArticles => html! { <pages::admin_articles::AdminArticlesPage /> },
        Route::NewArticle => html! { <pages::article_editor::ArticleEditorPage /> },
        Route::EditArticle {
            id,
        } => {
            html! { <pages::article_editor::ArticleEditorPage id={Some(id)} /> }
        },
        Route::AdminCategories => html! { <pages::admin_categories::AdminCategoriesPage /> },
        Route::NotFound => html! { <PublicLayout><pages::not_found::NotFoundPage /></PublicLayout> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <SessionProvider>
            <NotifierProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </NotifierProvider>
        </SessionProvider>
    }
}
