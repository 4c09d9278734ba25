use std::rc::Rc;

use gloo_timers::callback::Timeout;
use journal_shared::{
    forms::{submit_if_valid, FieldErrors, LoginForm, RegisterForm, SubmitGuard},
    AuthResponse, Role,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api,
    config::REDIRECT_DELAY_MS,
    i18n::current::{auth as t, common},
    notify::use_notifier,
    router::Route,
    session::use_session,
    utils::log_error,
};

#[derive(Clone, Copy, PartialEq)]
pub enum AuthMode {
    Login,
    Register,
}

/// Where a freshly signed-in account lands.
fn landing_route(role: Role) -> Route {
    match role {
        Role::Admin => Route::AdminArticles,
        Role::User | Role::Other => Route::Home,
    }
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    html! { <AuthForm mode={AuthMode::Login} /> }
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    html! { <AuthForm mode={AuthMode::Register} /> }
}

#[derive(Properties, PartialEq)]
struct AuthFormProps {
    mode: AuthMode,
}

#[function_component(AuthForm)]
fn auth_form(props: &AuthFormProps) -> Html {
    let mode = props.mode;
    let session = use_session();
    let notifier = use_notifier();
    let navigator = use_navigator();

    let username = use_state(String::new);
    let password = use_state(String::new);
    let role = use_state(String::new);
    let show_password = use_state(|| false);
    let errors = use_state(FieldErrors::default);
    let guard = use_mut_ref(SubmitGuard::default);
    let busy = use_state(|| false);
    let redirect = use_mut_ref(|| None::<Timeout>);

    let bind_input = |handle: UseStateHandle<String>| {
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                handle.set(target.value());
            }
        })
    };
    let on_username = bind_input(username.clone());
    let on_password = bind_input(password.clone());
    let on_role = {
        let role = role.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<HtmlSelectElement>() {
                role.set(target.value());
            }
        })
    };
    let toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_| show_password.set(!*show_password))
    };

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let role = role.clone();
        let errors = errors.clone();
        let busy = busy.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if !guard.borrow_mut().try_begin() {
                return;
            }

            let finish = {
                let guard = guard.clone();
                let busy = busy.clone();
                Rc::new(move || {
                    guard.borrow_mut().finish();
                    busy.set(false);
                })
            };

            let session = session.clone();
            let notifier = notifier.clone();
            let navigator = navigator.clone();
            let redirect = redirect.clone();

            let submitted = match mode {
                AuthMode::Login => {
                    let form = LoginForm {
                        username: (*username).clone(),
                        password: (*password).clone(),
                    };
                    submit_if_valid(&form, || {
                        let body = form.credentials();
                        let finish = finish.clone();
                        spawn_local(async move {
                            match api::login(&body).await {
                                Ok(AuthResponse {
                                    token: Some(token),
                                    role,
                                }) if !token.trim().is_empty() => {
                                    session.login(&token);
                                    notifier.success(t::LOGIN_SUCCESS);
                                    let target = landing_route(role);
                                    *redirect.borrow_mut() =
                                        Some(Timeout::new(REDIRECT_DELAY_MS, move || {
                                            if let Some(navigator) = navigator {
                                                navigator.push(&target);
                                            }
                                        }));
                                },
                                Ok(_) => notifier.error(t::NO_TOKEN_IN_RESPONSE),
                                Err(err) => {
                                    log_error("login", &err.to_string());
                                    notifier.error(err.user_message(common::GENERIC_FAILURE));
                                },
                            }
                            finish();
                        });
                    })
                },
                AuthMode::Register => {
                    let form = RegisterForm {
                        username: (*username).clone(),
                        password: (*password).clone(),
                        role: Some((*role).clone()),
                    };
                    submit_if_valid(&form, || {
                        let body = form.credentials();
                        let finish = finish.clone();
                        spawn_local(async move {
                            match api::register(&body).await {
                                Ok(()) => {
                                    notifier.success(t::REGISTER_SUCCESS);
                                    *redirect.borrow_mut() =
                                        Some(Timeout::new(REDIRECT_DELAY_MS, move || {
                                            if let Some(navigator) = navigator {
                                                navigator.push(&Route::Login);
                                            }
                                        }));
                                },
                                Err(err) => {
                                    log_error("register", &err.to_string());
                                    notifier.error(err.user_message(common::GENERIC_FAILURE));
                                },
                            }
                            finish();
                        });
                    })
                },
            };

            match submitted {
                Ok(()) => {
                    errors.set(FieldErrors::default());
                    busy.set(true);
                },
                Err(field_errors) => {
                    errors.set(field_errors);
                    finish();
                },
            }
        })
    };

    let (title, button, switch_prompt, switch_route, switch_label) = match mode {
        AuthMode::Login => (t::LOGIN_TITLE, t::LOGIN_BUTTON, t::NO_ACCOUNT, Route::Register, t::REGISTER_BUTTON),
        AuthMode::Register => (t::REGISTER_TITLE, t::REGISTER_BUTTON, t::HAVE_ACCOUNT, Route::Login, t::LOGIN_BUTTON),
    };
    let field_error = |field: &str| match errors.get(field) {
        Some(message) => html! { <p class="mt-1 text-xs text-red-600">{ message }</p> },
        None => Html::default(),
    };

    html! {
        <main class="flex min-h-[80vh] items-center justify-center px-4">
            <form
                class="w-full max-w-sm rounded-2xl border border-[var(--border)] bg-[var(--surface)] p-8 shadow-xl"
                onsubmit={on_submit}
            >
                <h1 class="mb-6 text-2xl font-bold">{ title }</h1>

                <label class="form-label" for="auth-username">{ t::USERNAME }</label>
                <input
                    id="auth-username"
                    class="form-input w-full"
                    autocomplete="username"
                    value={(*username).clone()}
                    oninput={on_username}
                />
                { field_error("username") }

                <label class="form-label mt-4" for="auth-password">{ t::PASSWORD }</label>
                <div class="relative">
                    <input
                        id="auth-password"
                        class="form-input w-full pr-16"
                        type={if *show_password { "text" } else { "password" }}
                        autocomplete={if mode == AuthMode::Login { "current-password" } else { "new-password" }}
                        value={(*password).clone()}
                        oninput={on_password}
                    />
                    <button
                        type="button"
                        class="absolute inset-y-0 right-2 text-xs font-semibold text-[var(--muted)]"
                        onclick={toggle_password}
                    >
                        { if *show_password { t::HIDE_PASSWORD } else { t::SHOW_PASSWORD } }
                    </button>
                </div>
                { field_error("password") }

                if mode == AuthMode::Register {
                    <label class="form-label mt-4" for="auth-role">{ t::ROLE }</label>
                    <select id="auth-role" class="form-input w-full" onchange={on_role}>
                        <option value="" selected={role.is_empty()}>{ t::ROLE_PLACEHOLDER }</option>
                        { for [Role::User, Role::Admin].into_iter().map(|option| html! {
                            <option value={option.label()} selected={*role == option.label()}>
                                { option.label() }
                            </option>
                        }) }
                    </select>
                }

                <button type="submit" class="btn-primary mt-6 w-full" disabled={*busy}>
                    { if *busy { t::SUBMITTING } else { button } }
                </button>

                <p class="mt-4 text-center text-sm text-[var(--muted)]">
                    { switch_prompt }{" "}
                    <Link<Route> to={switch_route} classes={classes!("font-semibold", "text-[var(--primary)]")}>
                        { switch_label }
                    </Link<Route>>
                </p>
            </form>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admins_land_on_the_article_table() {
        assert_eq!(landing_route(Role::Admin), Route::AdminArticles);
        assert_eq!(landing_route(Role::User), Route::Home);
        assert_eq!(landing_route(Role::Other), Route::Home);
    }
}
