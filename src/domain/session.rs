use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::value::BearerToken;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Point-in-time view of the authentication session.
///
/// `authenticated` is an optimistic local flag: it is not implied by
/// `bearer_token` being present, and `true` is never proof that the token is
/// still valid server-side.
pub struct Session {
    pub bearer_token: Option<BearerToken>,
    pub authenticated: bool,
}

impl Session {
    /// Returns `true` if the session is currently considered authenticated.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

#[derive(Debug, Default)]
struct SessionState {
    bearer_token: Option<BearerToken>,
    authenticated: bool,
}

#[derive(Debug, Clone, Default)]
/// Shared, mutex-guarded session state.
///
/// One handle is owned per client; clones of the client share it. The only
/// writers are the authenticate operations (token install), the response
/// dispatch path (demotion on an authorization-rejected response), and the
/// resource layer (optimistic promotion after any successful call).
pub struct SessionHandle {
    inner: Arc<Mutex<SessionState>>,
}

impl SessionHandle {
    /// Create an unauthenticated session with no token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session pre-seeded with an externally supplied bearer token.
    ///
    /// The session still starts unauthenticated; the flag is only raised by a
    /// successful authenticate call or by the first successful resource call.
    pub fn seeded(token: BearerToken) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SessionState {
                bearer_token: Some(token),
                authenticated: false,
            })),
        }
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        // A poisoned lock only means another thread panicked mid-update;
        // both fields are always valid values, so recover the guard.
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Current value of the authenticated flag.
    pub fn is_authenticated(&self) -> bool {
        self.state().authenticated
    }

    /// Current bearer token, if any.
    pub fn bearer_token(&self) -> Option<BearerToken> {
        self.state().bearer_token.clone()
    }

    /// Install a freshly issued token and mark the session authenticated.
    ///
    /// Single critical section: a caller cancelling the surrounding login
    /// future either sees both fields updated or neither.
    pub fn install(&self, token: BearerToken) {
        let mut state = self.state();
        state.bearer_token = Some(token);
        state.authenticated = true;
    }

    /// Optimistic promotion: mark authenticated without touching the token.
    pub fn promote(&self) {
        self.state().authenticated = true;
    }

    /// Mark the session unauthenticated, leaving the token in place.
    ///
    /// The stored token is intentionally not cleared; the server has already
    /// rejected it, and a forced re-authentication will replace it.
    pub fn demote(&self) {
        self.state().authenticated = false;
    }

    /// Snapshot both fields atomically.
    pub fn snapshot(&self) -> Session {
        let state = self.state();
        Session {
            bearer_token: state.bearer_token.clone(),
            authenticated: state.authenticated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(value: &str) -> BearerToken {
        BearerToken::new(value).unwrap()
    }

    #[test]
    fn fresh_session_is_unauthenticated_with_no_token() {
        let session = SessionHandle::new();
        assert!(!session.is_authenticated());
        assert!(session.bearer_token().is_none());
    }

    #[test]
    fn seeded_session_keeps_token_but_starts_unauthenticated() {
        let session = SessionHandle::seeded(token("tok"));
        assert!(!session.is_authenticated());
        assert_eq!(session.bearer_token(), Some(token("tok")));
    }

    #[test]
    fn install_sets_token_and_flag_together() {
        let session = SessionHandle::new();
        session.install(token("tok"));

        let snapshot = session.snapshot();
        assert!(snapshot.is_authenticated());
        assert_eq!(snapshot.bearer_token, Some(token("tok")));
    }

    #[test]
    fn demote_clears_flag_but_keeps_token() {
        let session = SessionHandle::seeded(token("tok"));
        session.install(token("tok2"));
        session.demote();

        let snapshot = session.snapshot();
        assert!(!snapshot.is_authenticated());
        assert_eq!(snapshot.bearer_token, Some(token("tok2")));
    }

    #[test]
    fn promote_raises_flag_without_a_token() {
        let session = SessionHandle::new();
        session.promote();
        assert!(session.is_authenticated());
        assert!(session.bearer_token().is_none());
    }

    #[test]
    fn session_can_cycle_between_states() {
        let session = SessionHandle::new();
        session.install(token("tok"));
        session.demote();
        assert!(!session.is_authenticated());
        session.install(token("tok2"));
        assert!(session.is_authenticated());
        assert_eq!(session.bearer_token(), Some(token("tok2")));
    }

    #[test]
    fn clones_share_the_same_state() {
        let session = SessionHandle::new();
        let other = session.clone();
        session.install(token("tok"));
        assert!(other.is_authenticated());
        assert_eq!(other.bearer_token(), Some(token("tok")));
    }
}
