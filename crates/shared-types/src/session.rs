use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::config::SessionConfig;
use crate::error::{ParseError, StoreError};
use crate::models::UserRecord;

/// Read access to the current session.
///
/// Implementations only read; writing the session belongs to the
/// sign-in/sign-out flow.
pub trait SessionProvider {
    /// The session token, if one is stored.
    fn token(&self) -> Option<String>;

    /// The stored user record.
    ///
    /// `None` when nothing is stored, `Some(Err(_))` when something is
    /// stored but does not parse.
    fn user(&self) -> Option<Result<UserRecord, ParseError>>;
}

/// Parse a serialized user record.
pub fn parse_user_record(raw: &str) -> Result<UserRecord, ParseError> {
    Ok(serde_json::from_str(raw)?)
}

/// A persistent string-to-string store (browser `localStorage` or a map).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// Session backed by a [`KeyValueStore`] under configurable keys.
#[derive(Debug, Clone)]
pub struct StoredSession<S> {
    store: S,
    keys: SessionConfig,
}

impl<S: KeyValueStore> StoredSession<S> {
    pub fn new(store: S, keys: SessionConfig) -> Self {
        Self { store, keys }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn keys(&self) -> &SessionConfig {
        &self.keys
    }

    /// Persist a new session.
    ///
    /// Any previous token is removed before the user record changes, and
    /// the new token is written last. If a write fails partway, the store
    /// holds no token and the gate sends the visitor to login.
    pub fn sign_in(&self, token: &str, user: &UserRecord) -> Result<(), StoreError> {
        let serialized = serde_json::to_string(user)
            .map_err(|e| StoreError::new(&self.keys.user_key, e.to_string()))?;
        self.store.remove(&self.keys.token_key)?;
        self.store.set(&self.keys.user_key, &serialized)?;
        self.store.set(&self.keys.token_key, token)
    }

    /// Remove both session keys.
    pub fn sign_out(&self) -> Result<(), StoreError> {
        self.store.remove(&self.keys.token_key)?;
        self.store.remove(&self.keys.user_key)
    }
}

impl<S: KeyValueStore> SessionProvider for StoredSession<S> {
    fn token(&self) -> Option<String> {
        self.store.get(&self.keys.token_key)
    }

    fn user(&self) -> Option<Result<UserRecord, ParseError>> {
        self.store
            .get(&self.keys.user_key)
            .map(|raw| parse_user_record(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::{evaluate_session, Decision};
    use crate::config::DEFAULT_TOKEN_KEY;
    use crate::models::{RequiredRoles, RoleId};
    use std::cell::Cell;

    /// Memory store that rejects writes to one key once `failing` is set.
    struct RejectingStore {
        inner: MemoryStore,
        key: &'static str,
        failing: Cell<bool>,
    }

    impl KeyValueStore for RejectingStore {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            if self.failing.get() && key == self.key {
                return Err(StoreError::new(key, "QuotaExceededError"));
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), StoreError> {
            self.inner.remove(key)
        }
    }

    fn session() -> StoredSession<MemoryStore> {
        StoredSession::new(MemoryStore::new(), SessionConfig::default())
    }

    #[test]
    fn empty_store_has_no_session() {
        let session = session();
        assert_eq!(session.token(), None);
        assert!(session.user().is_none());
    }

    #[test]
    fn sign_in_writes_both_keys() {
        let session = session();
        session
            .sign_in("abc", &UserRecord::with_role("guest"))
            .unwrap();

        assert_eq!(session.store().get("token").as_deref(), Some("abc"));
        assert_eq!(
            session.store().get("user").as_deref(),
            Some(r#"{"Role":"guest"}"#)
        );
        assert_eq!(session.token().as_deref(), Some("abc"));
        assert_eq!(
            session.user().unwrap().unwrap().role,
            RoleId::from("guest")
        );
    }

    #[test]
    fn sign_out_clears_both_keys() {
        let session = session();
        session
            .sign_in("abc", &UserRecord::with_role("admin"))
            .unwrap();
        session.sign_out().unwrap();
        assert!(session.store().is_empty());
    }

    #[test]
    fn sign_out_without_session_is_ok() {
        assert!(session().sign_out().is_ok());
    }

    #[test]
    fn malformed_user_surfaces_as_parse_error() {
        let session = session();
        session.store().set("user", "{Role: admin").unwrap();
        assert!(matches!(session.user(), Some(Err(_))));
    }

    #[test]
    fn user_without_role_is_a_parse_error() {
        assert!(parse_user_record(r#"{"Name":"Ada"}"#).is_err());
        assert!(parse_user_record("null").is_err());
        assert!(parse_user_record("").is_err());
    }

    #[test]
    fn custom_keys_are_respected() {
        let keys = SessionConfig {
            token_key: "innkeep.token".into(),
            user_key: "innkeep.user".into(),
        };
        let session = StoredSession::new(MemoryStore::new(), keys);
        session
            .sign_in("t-1", &UserRecord::with_role("housekeeping"))
            .unwrap();
        assert_eq!(session.store().get("token"), None);
        assert_eq!(
            session.store().get("innkeep.token").as_deref(),
            Some("t-1")
        );
    }

    #[test]
    fn clones_share_storage() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("token", "abc").unwrap();
        assert_eq!(other.get("token").as_deref(), Some("abc"));
        assert_eq!(other.len(), 1);
    }

    #[test]
    fn failed_token_write_does_not_keep_the_old_session() {
        let store = RejectingStore {
            inner: MemoryStore::new(),
            key: DEFAULT_TOKEN_KEY,
            failing: Cell::new(false),
        };
        let session = StoredSession::new(store, SessionConfig::default());
        session
            .sign_in("old", &UserRecord::with_role("guest"))
            .unwrap();

        session.store().failing.set(true);
        let err = session
            .sign_in("new", &UserRecord::with_role("admin"))
            .unwrap_err();
        assert_eq!(err.key, "token");

        assert_eq!(session.token(), None);
        assert_eq!(
            evaluate_session(&RequiredRoles::of(["admin"]), &session),
            Decision::RedirectToLogin
        );
        assert_eq!(
            evaluate_session(&RequiredRoles::of(["guest"]), &session),
            Decision::RedirectToLogin
        );
    }
}
