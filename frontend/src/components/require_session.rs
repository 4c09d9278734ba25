use journal_shared::guard::GuardState;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{router::Route, session::use_session};

#[derive(Properties, PartialEq)]
pub struct RequireSessionProps {
    /// Where a visitor without a token is sent.
    pub fallback: Route,
    pub children: Html,
}

/// Renders nothing until the stored token has been checked once, then
/// either the children or a redirect to `fallback`.
#[function_component(RequireSession)]
pub fn require_session(props: &RequireSessionProps) -> Html {
    let session = use_session();
    let state = use_state_eq(GuardState::default);
    let navigator = use_navigator();

    {
        let state = state.clone();
        let fallback = props.fallback.clone();
        use_effect_with((), move |_| {
            let next = state.advance(&session);
            state.set(next);
            if next == GuardState::Rejected {
                if let Some(navigator) = navigator {
                    navigator.replace(&fallback);
                }
            }
            || ()
        });
    }

    if state.allows_render() {
        props.children.clone()
    } else {
        Html::default()
    }
}
