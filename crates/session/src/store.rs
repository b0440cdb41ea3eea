//! The client-side session store.
//!
//! Single authority for "who is logged in". Holds the current
//! [`Session`] in memory behind a single-writer/many-reader cell and
//! mirrors it to durable storage under two keys: the bearer token under
//! [`TOKEN_KEY`] and the serialized identity under [`IDENTITY_KEY`].
//!
//! Invariant: token and identity are both present or the session is
//! absent. Only [`SessionStore::login`] and [`SessionStore::logout`]
//! establish or break that invariant; everything else reads.

use std::sync::Arc;

use parking_lot::RwLock;

use sc_domain::trace::TraceEvent;
use sc_domain::Identity;

use crate::storage::SessionStorage;

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the serialized identity.
pub const IDENTITY_KEY: &str = "user";

/// The pairing of a bearer token and identity for a logged-in period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub identity: Identity,
    pub token: String,
}

/// Durable, process-wide session cell.
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    session: RwLock<Option<Session>>,
}

impl SessionStore {
    /// Build the store, restoring any persisted session.
    ///
    /// Malformed or partial persisted data (unparsable identity, token
    /// without identity, identity without token) degrades to logged-out
    /// and is scrubbed from storage rather than surfacing an error.
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        let session = match (storage.get(TOKEN_KEY), storage.get(IDENTITY_KEY)) {
            (Some(token), Some(raw)) => match serde_json::from_str::<Identity>(&raw) {
                Ok(identity) => {
                    tracing::debug!(user_id = %identity.id, "session restored from storage");
                    Some(Session { identity, token })
                }
                Err(e) => {
                    tracing::warn!(error = %e, "persisted identity is malformed, treating as logged out");
                    storage.remove(TOKEN_KEY);
                    storage.remove(IDENTITY_KEY);
                    None
                }
            },
            (None, None) => None,
            // One key without the other violates the no-partial-session
            // invariant. Scrub both.
            (token, identity) => {
                tracing::warn!(
                    has_token = token.is_some(),
                    has_identity = identity.is_some(),
                    "partial persisted session, treating as logged out"
                );
                storage.remove(TOKEN_KEY);
                storage.remove(IDENTITY_KEY);
                None
            }
        };

        Self {
            storage,
            session: RwLock::new(session),
        }
    }

    /// Establish a session: replace the in-memory cell and persist both
    /// keys immediately.
    ///
    /// Performs no network I/O and cannot fail; persistence problems are
    /// logged by the storage backend and the in-memory session stands.
    pub fn login(&self, identity: Identity, token: String) {
        let serialized = serde_json::to_string(&identity).unwrap_or_default();

        TraceEvent::SessionEstablished {
            user_id: identity.id.clone(),
            role: identity.role.to_string(),
        }
        .emit();

        *self.session.write() = Some(Session {
            identity,
            token: token.clone(),
        });
        self.storage.set(TOKEN_KEY, &token);
        self.storage.set(IDENTITY_KEY, &serialized);
    }

    /// Clear the session from memory and durable storage.
    ///
    /// Idempotent: calling while already logged out is a no-op.
    pub fn logout(&self) {
        let was_present = self.session.write().take().is_some();
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(IDENTITY_KEY);

        if was_present {
            TraceEvent::SessionCleared {
                reason: "logout".into(),
            }
            .emit();
        }
    }

    /// Clear the session in response to an authorization-denied signal
    /// from the remote API (HTTP 401).
    pub fn clear_on_denied(&self) {
        let was_present = self.session.write().take().is_some();
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(IDENTITY_KEY);

        if was_present {
            TraceEvent::SessionCleared {
                reason: "unauthorized".into(),
            }
            .emit();
        }
    }

    /// Snapshot of the current session, if any.
    pub fn current(&self) -> Option<Session> {
        self.session.read().clone()
    }

    /// The current bearer token, if a session is present.
    pub fn token(&self) -> Option<String> {
        self.session.read().as_ref().map(|s| s.token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStorage, MemoryStorage};
    use sc_domain::{Identity, Role};

    fn identity(role: Role) -> Identity {
        Identity {
            id: "u-1".into(),
            name: "Alva Berg".into(),
            email: "alva@example.edu".into(),
            role,
            class: Some("2026".into()),
            picture: None,
        }
    }

    fn store() -> SessionStore {
        SessionStore::new(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn login_then_current_returns_what_was_stored() {
        let store = store();
        store.login(identity(Role::User), "tok-1".into());

        let session = store.current().unwrap();
        assert_eq!(session.token, "tok-1");
        assert_eq!(session.identity, identity(Role::User));
        assert_eq!(store.token().as_deref(), Some("tok-1"));
    }

    #[test]
    fn relogin_replaces_identity_wholesale() {
        let store = store();
        store.login(identity(Role::User), "tok-1".into());
        store.login(identity(Role::Moderator), "tok-2".into());

        let session = store.current().unwrap();
        assert_eq!(session.token, "tok-2");
        assert_eq!(session.identity.role, Role::Moderator);
    }

    #[test]
    fn logout_clears_and_is_idempotent() {
        let store = store();
        store.login(identity(Role::User), "tok-1".into());

        store.logout();
        assert!(store.current().is_none());
        assert!(store.token().is_none());

        // Safe to call when already logged out.
        store.logout();
        assert!(store.current().is_none());
    }

    #[test]
    fn clear_on_denied_behaves_like_logout() {
        let store = store();
        store.login(identity(Role::User), "tok-1".into());
        store.clear_on_denied();
        assert!(store.current().is_none());
        store.clear_on_denied();
    }

    #[test]
    fn persisted_session_survives_store_rebuild() {
        let storage = Arc::new(MemoryStorage::new());
        {
            let store = SessionStore::new(storage.clone());
            store.login(identity(Role::Moderator), "tok-persist".into());
        }

        // Re-initialize from durable storage only.
        let reloaded = SessionStore::new(storage);
        let session = reloaded.current().unwrap();
        assert_eq!(session.token, "tok-persist");
        assert_eq!(session.identity, identity(Role::Moderator));
    }

    #[test]
    fn persisted_session_survives_restart_on_disk() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = Arc::new(FileStorage::new(tmp.path()).unwrap());
        SessionStore::new(storage.clone()).login(identity(Role::User), "tok-disk".into());

        let reloaded = SessionStore::new(Arc::new(FileStorage::new(tmp.path()).unwrap()));
        assert_eq!(reloaded.token().as_deref(), Some("tok-disk"));
        drop(storage);
    }

    #[test]
    fn malformed_identity_degrades_to_logged_out() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(TOKEN_KEY, "tok-x");
        storage.set(IDENTITY_KEY, "{not json");

        let store = SessionStore::new(storage.clone());
        assert!(store.current().is_none());
        // Scrubbed, so a second load sees a clean slate.
        assert!(storage.get(TOKEN_KEY).is_none());
        assert!(storage.get(IDENTITY_KEY).is_none());
    }

    #[test]
    fn wrongly_shaped_identity_degrades_to_logged_out() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(TOKEN_KEY, "tok-x");
        // An array where a single record is expected (the old SPA's shape).
        storage.set(IDENTITY_KEY, r#"[{"id":"u-1"}]"#);

        let store = SessionStore::new(storage);
        assert!(store.current().is_none());
    }

    #[test]
    fn token_without_identity_degrades_to_logged_out() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(TOKEN_KEY, "orphan");

        let store = SessionStore::new(storage.clone());
        assert!(store.current().is_none());
        assert!(storage.get(TOKEN_KEY).is_none());
    }

    #[test]
    fn identity_without_token_degrades_to_logged_out() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(
            IDENTITY_KEY,
            &serde_json::to_string(&identity(Role::User)).unwrap(),
        );

        let store = SessionStore::new(storage.clone());
        assert!(store.current().is_none());
        assert!(storage.get(IDENTITY_KEY).is_none());
    }
}
