use shared_types::{
    KeyValueStore, MemoryStore, SessionConfig, StoredSession, UserRecord,
};

/// A session over a fresh in-memory store with the default keys.
pub fn empty_session() -> StoredSession<MemoryStore> {
    StoredSession::new(MemoryStore::new(), SessionConfig::default())
}

/// A session whose store holds exactly the given raw values.
///
/// `None` leaves the key unset, so callers can build every combination of
/// missing, empty and malformed entries.
pub fn raw_session(token: Option<&str>, user_json: Option<&str>) -> StoredSession<MemoryStore> {
    let session = empty_session();
    let keys = session.keys().clone();
    if let Some(token) = token {
        session.store().set(&keys.token_key, token).unwrap();
    }
    if let Some(json) = user_json {
        session.store().set(&keys.user_key, json).unwrap();
    }
    session
}

/// A signed-in session for `role` with a fixed demo token.
pub fn signed_in_as(role: &str) -> StoredSession<MemoryStore> {
    let session = empty_session();
    session
        .sign_in("test-token", &UserRecord::with_role(role))
        .unwrap();
    session
}

/// Raw `(token, user)` values currently in the store.
pub fn snapshot(session: &StoredSession<MemoryStore>) -> (Option<String>, Option<String>) {
    let keys = session.keys();
    (
        session.store().get(&keys.token_key),
        session.store().get(&keys.user_key),
    )
}
