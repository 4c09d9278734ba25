//! Session token access.
//!
//! Components never touch browser storage directly. They get a [`Session`]
//! (through context in the frontend) and go through [`TokenStore`], which
//! the browser backs with `localStorage` and tests back with memory.

use std::{cell::RefCell, fmt, rc::Rc};

use crate::error::ApiError;

/// Storage medium for the session token.
pub trait TokenStore {
    /// Stored token, if any.
    fn get_token(&self) -> Option<String>;
    /// Persist `token`, replacing any previous one.
    fn set_token(&self, token: &str);
    /// Forget the token.
    fn clear_token(&self);
}

/// In-memory [`TokenStore`].
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    /// Store pre-seeded with `token`.
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get_token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set_token(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear_token(&self) {
        *self.token.borrow_mut() = None;
    }
}

/// Cheap, cloneable handle over the injected [`TokenStore`].
///
/// The token is re-read on every call; nothing is cached across awaits.
#[derive(Clone)]
pub struct Session {
    store: Rc<dyn TokenStore>,
}

impl Session {
    /// Wrap a store.
    pub fn new(store: Rc<dyn TokenStore>) -> Self {
        Self {
            store,
        }
    }

    /// Session backed by a fresh [`MemoryTokenStore`].
    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryTokenStore::default()))
    }

    /// Current token; blank values count as absent.
    pub fn token(&self) -> Option<String> {
        self.store
            .get_token()
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
    }

    /// Whether a token is stored.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Remember the token returned by a successful login.
    pub fn login(&self, token: &str) {
        self.store.set_token(token);
    }

    /// Forget the token.
    pub fn logout(&self) {
        self.store.clear_token();
    }

    /// `Authorization` header value, or [`ApiError::MissingToken`] so the
    /// caller can refuse the action before building a request.
    pub fn bearer(&self) -> Result<String, ApiError> {
        self.token()
            .map(|token| format!("Bearer {token}"))
            .ok_or(ApiError::MissingToken)
    }
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_formats_header() {
        let session = Session::new(Rc::new(MemoryTokenStore::with_token("abc")));
        assert_eq!(session.bearer(), Ok("Bearer abc".to_string()));
    }

    #[test]
    fn blank_token_is_absent() {
        let session = Session::new(Rc::new(MemoryTokenStore::with_token("   ")));
        assert!(!session.is_authenticated());
        assert_eq!(session.bearer(), Err(ApiError::MissingToken));
    }

    #[test]
    fn logout_clears_token_and_refuses_authorized_calls() {
        let session = Session::in_memory();
        session.login("t-1");
        assert!(session.is_authenticated());

        session.logout();
        assert_eq!(session.token(), None);
        assert_eq!(session.bearer(), Err(ApiError::MissingToken));
    }

    #[test]
    fn clones_share_storage() {
        let session = Session::in_memory();
        let other = session.clone();
        other.login("shared");
        assert_eq!(session.token().as_deref(), Some("shared"));
        assert_eq!(session, other);
        assert_ne!(session, Session::in_memory());
    }
}
