//! Authentication state: single source of truth for the logged-in identity.

use std::sync::Arc;

use pawfetch_types::Identity;

use crate::store::{Store, Subscription};

/// Current authentication status and identity.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub is_authenticated: bool,
    /// Identity returned by the service at login; `None` when logged out.
    pub user: Option<Identity>,
}

/// Observable container for the current [`Session`].
///
/// Starts unauthenticated. Trusts whatever identity it is given and never
/// calls the service itself; the caller pushes login/logout outcomes in.
pub struct AuthStore {
    store: Store<Session>,
}

impl Default for AuthStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthStore {
    /// Creates a store in the unauthenticated state.
    pub fn new() -> Self {
        Self {
            store: Store::new(Session::default()),
        }
    }

    /// Records a successful login, overwriting any previous identity.
    pub fn login(&self, user: Identity) {
        self.store.replace(Session {
            is_authenticated: true,
            user: Some(user),
        });
    }

    /// Clears the session.
    pub fn logout(&self) {
        self.store.replace(Session::default());
    }

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> Arc<Session> {
        self.store.snapshot()
    }

    /// Registers `callback` to receive the current snapshot immediately and
    /// every subsequent [`Session`] change.
    pub fn subscribe(
        &self,
        callback: impl Fn(&Arc<Session>) + Send + Sync + 'static,
    ) -> Subscription {
        self.store.subscribe(callback)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::json;

    use super::*;

    /// Test: a new store is unauthenticated with no identity.
    #[test]
    fn test_starts_unauthenticated() {
        let auth = AuthStore::new();
        let session = auth.snapshot();
        assert!(!session.is_authenticated);
        assert_eq!(session.user, None);
    }

    /// Test: login stores the identity exactly as given, no transformation.
    #[test]
    fn test_login_stores_identity_untouched() {
        let auth = AuthStore::new();
        auth.login(json!({"id": "u1", "name": "Ann"}));

        let session = auth.snapshot();
        assert!(session.is_authenticated);
        assert_eq!(session.user, Some(json!({"id": "u1", "name": "Ann"})));
    }

    /// Test: logout resets both fields regardless of prior state.
    #[test]
    fn test_logout_resets_session() {
        let auth = AuthStore::new();
        auth.login(json!({"id": "u1"}));
        auth.logout();

        let session = auth.snapshot();
        assert!(!session.is_authenticated);
        assert_eq!(session.user, None);

        // Logging out while already logged out stays empty.
        auth.logout();
        assert_eq!(*auth.snapshot(), Session::default());
    }

    /// Test: a second login overwrites the previous identity.
    #[test]
    fn test_relogin_overwrites_identity() {
        let auth = AuthStore::new();
        auth.login(json!({"id": "u1"}));
        auth.login(json!({"id": "u2"}));

        assert_eq!(auth.snapshot().user, Some(json!({"id": "u2"})));
    }

    /// Test: subscribers see the initial state, then every transition.
    #[test]
    fn test_subscriber_observes_transitions() {
        let auth = AuthStore::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let _sub = auth.subscribe({
            let seen = Arc::clone(&seen);
            move |session| seen.lock().unwrap().push(session.is_authenticated)
        });
        auth.login(json!({"id": "u1"}));
        auth.logout();

        assert_eq!(*seen.lock().unwrap(), vec![false, true, false]);
    }
}
