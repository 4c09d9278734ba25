use journal_shared::{ApiError, Profile};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api,
    components::{loading_spinner::LoadingSpinner, require_session::RequireSession},
    i18n::current::profile as t,
    notify::use_notifier,
    router::Route,
    session::use_session,
    utils::{log_error, mask},
};

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    html! {
        <RequireSession fallback={Route::Login}>
            <ProfileCard />
        </RequireSession>
    }
}

#[derive(Clone, PartialEq)]
enum ProfileState {
    Loading,
    Failed(String),
    Ready(Profile),
}

impl From<Result<Profile, ApiError>> for ProfileState {
    fn from(result: Result<Profile, ApiError>) -> Self {
        match result {
            Ok(profile) => Self::Ready(profile),
            Err(err) => Self::Failed(err.user_message(t::LOAD_FAILED)),
        }
    }
}

#[function_component(ProfileCard)]
fn profile_card() -> Html {
    let session = use_session();
    let notifier = use_notifier();
    let navigator = use_navigator();
    let profile = use_state(|| ProfileState::Loading);

    {
        let profile = profile.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let result = api::fetch_profile(&session).await;
                if let Err(err) = result.as_ref() {
                    log_error("profile", &err.to_string());
                    notifier.error(err.user_message(t::LOAD_FAILED));
                }
                profile.set(ProfileState::from(result));
            });
            || ()
        });
    }

    let go_back = Callback::from(move |_: MouseEvent| {
        let went_back = web_sys::window()
            .and_then(|win| win.history().ok())
            .map(|history| history.back().is_ok())
            .unwrap_or(false);
        if !went_back {
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&Route::Home);
            }
        }
    });

    let back_button = html! {
        <button type="button" class="mb-6 text-sm text-[var(--muted)] hover:text-[var(--primary)]" onclick={go_back}>
            { t::BACK }
        </button>
    };

    let profile = match (*profile).clone() {
        ProfileState::Loading => return html! { <LoadingSpinner /> },
        ProfileState::Failed(message) => {
            return html! {
                <main class="mx-auto max-w-md px-4 py-12">
                    { back_button }
                    <p class="rounded-2xl border border-[var(--border)] bg-[var(--surface)] p-8 text-center text-[var(--muted)]">
                        { message }
                    </p>
                </main>
            }
        },
        ProfileState::Ready(profile) => profile,
    };

    let row = |label: &'static str, value: String| {
        html! {
            <div class="flex justify-between border-b border-[var(--border)] py-3 text-sm last:border-0">
                <dt class="text-[var(--muted)]">{ label }</dt>
                <dd class="font-medium">{ value }</dd>
            </div>
        }
    };

    html! {
        <main class="mx-auto max-w-md px-4 py-12">
            { back_button }
            <section class="rounded-2xl border border-[var(--border)] bg-[var(--surface)] p-8 shadow-sm">
                <div class="mb-6 flex flex-col items-center gap-3">
                    <span class="inline-flex h-20 w-20 items-center justify-center rounded-full bg-[var(--primary)] text-3xl font-bold text-white">
                        { profile.initial() }
                    </span>
                    <h1 class="text-xl font-semibold">{ t::TITLE }</h1>
                </div>
                <dl>
                    { row(t::USERNAME, profile.username.clone()) }
                    { row(t::PASSWORD, mask(&profile.password)) }
                    { row(t::ROLE, profile.role.label().to_string()) }
                </dl>
            </section>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use journal_shared::Role;

    use super::*;

    #[test]
    fn failed_fetch_leaves_the_spinner() {
        let state = ProfileState::from(Err(ApiError::Http {
            status: 500,
            message: None,
        }));
        assert!(state == ProfileState::Failed(t::LOAD_FAILED.to_string()));

        let profile = Profile {
            username: "alice".into(),
            password: "secret".into(),
            role: Role::User,
        };
        assert!(ProfileState::from(Ok(profile.clone())) == ProfileState::Ready(profile));
    }
}
