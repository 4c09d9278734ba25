use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::confirm_dialog::ConfirmDialog,
    i18n::current::{header, logout as t},
    notify::use_notifier,
    router::Route,
    session::use_session,
};

#[derive(Properties, PartialEq)]
pub struct LogoutButtonProps {
    #[prop_or_default]
    pub class: Classes,
    /// Called after the token was cleared.
    #[prop_or_default]
    pub on_done: Callback<()>,
}

/// Asks for confirmation, clears the token and goes to the login page.
#[function_component(LogoutButton)]
pub fn logout_button(props: &LogoutButtonProps) -> Html {
    let session = use_session();
    let notifier = use_notifier();
    let navigator = use_navigator();
    let confirming = use_state(|| false);

    let open = {
        let confirming = confirming.clone();
        Callback::from(move |_: MouseEvent| confirming.set(true))
    };
    let cancel = {
        let confirming = confirming.clone();
        Callback::from(move |_| confirming.set(false))
    };
    let confirm = {
        let confirming = confirming.clone();
        let on_done = props.on_done.clone();
        Callback::from(move |_| {
            session.logout();
            confirming.set(false);
            notifier.success(t::DONE);
            on_done.emit(());
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&Route::Login);
            }
        })
    };

    html! {
        <>
            <button type="button" class={props.class.clone()} onclick={open}>
                { header::LOGOUT }
            </button>
            if *confirming {
                <ConfirmDialog
                    title={t::CONFIRM_TITLE}
                    message={t::CONFIRM_BODY}
                    confirm_label={header::LOGOUT}
                    on_confirm={confirm}
                    on_cancel={cancel}
                />
            }
        </>
    }
}
