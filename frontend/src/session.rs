use std::rc::Rc;

use journal_shared::{Session, TokenStore};
use web_sys::{window, Storage};
use yew::prelude::*;

use crate::config::TOKEN_STORAGE_KEY;

/// Token kept in `window.localStorage` under a fixed key.
pub struct LocalStorageTokens {
    key: &'static str,
}

impl LocalStorageTokens {
    pub fn new(key: &'static str) -> Self {
        Self {
            key,
        }
    }

    fn storage() -> Option<Storage> {
        window().and_then(|win| win.local_storage().ok().flatten())
    }
}

impl TokenStore for LocalStorageTokens {
    fn get_token(&self) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(self.key).ok().flatten())
    }

    fn set_token(&self, token: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(self.key, token).is_err() {
                    crate::utils::log_error("session", "localStorage rejected the token");
                }
            },
            None => crate::utils::log_error("session", "localStorage is unavailable"),
        }
    }

    fn clear_token(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(self.key);
        }
    }
}

fn browser_session() -> Session {
    Session::new(Rc::new(LocalStorageTokens::new(TOKEN_STORAGE_KEY)))
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Html,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_memo((), |_| browser_session());
    html! {
        <ContextProvider<Session> context={(*session).clone()}>
            {props.children.clone()}
        </ContextProvider<Session>>
    }
}

/// Session injected by [`SessionProvider`]; falls back to a fresh
/// `localStorage`-backed one outside the provider.
#[hook]
pub fn use_session() -> Session {
    use_context::<Session>().unwrap_or_else(browser_session)
}
