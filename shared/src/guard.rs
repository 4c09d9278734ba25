//! Route guard for admin views.

use crate::session::Session;

/// Unverified → Authenticated | Rejected. There is no way back: a token that
/// the server later refuses shows up as a failed request, not as a re-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardState {
    /// Not checked yet; render nothing.
    #[default]
    Unverified,
    /// A token is stored; render the protected view.
    Authenticated,
    /// No token; redirect to the fallback route.
    Rejected,
}

impl GuardState {
    /// Check the session once.
    pub fn resolve(session: &Session) -> Self {
        if session.is_authenticated() {
            GuardState::Authenticated
        } else {
            GuardState::Rejected
        }
    }

    /// Only `Unverified` moves; settled states stay put.
    pub fn advance(self, session: &Session) -> Self {
        match self {
            GuardState::Unverified => Self::resolve(session),
            settled => settled,
        }
    }

    /// Whether protected children may render.
    pub fn allows_render(self) -> bool {
        self == GuardState::Authenticated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_presence_decides() {
        let session = Session::in_memory();
        assert_eq!(GuardState::Unverified.advance(&session), GuardState::Rejected);

        session.login("t");
        assert_eq!(GuardState::Unverified.advance(&session), GuardState::Authenticated);
        assert!(GuardState::resolve(&session).allows_render());
    }

    #[test]
    fn settled_state_is_not_rechecked() {
        let session = Session::in_memory();
        session.login("t");
        let state = GuardState::Unverified.advance(&session);

        session.logout();
        assert_eq!(state.advance(&session), GuardState::Authenticated);
    }

    #[test]
    fn after_logout_a_fresh_guard_rejects() {
        let session = Session::in_memory();
        session.login("t");
        session.logout();

        let state = GuardState::default().advance(&session);
        assert_eq!(state, GuardState::Rejected);
        assert!(!state.allows_render());
    }

    #[test]
    fn unverified_renders_nothing() {
        assert!(!GuardState::Unverified.allows_render());
    }
}
