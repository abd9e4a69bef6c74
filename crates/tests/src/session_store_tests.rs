use pretty_assertions::assert_eq;
use shared_types::{
    evaluate_session, Decision, KeyValueStore, MemoryStore, RequiredRoles, SessionConfig,
    SessionProvider, StoredSession, UserRecord,
};

use crate::common::{empty_session, raw_session, snapshot};

#[test]
fn sign_in_then_out_round_trips_the_gate() {
    let session = empty_session();
    let required = RequiredRoles::of(["housekeeping"]);
    assert_eq!(evaluate_session(&required, &session), Decision::RedirectToLogin);

    let user = UserRecord {
        name: Some("Sam".into()),
        ..UserRecord::with_role("housekeeping")
    };
    session.sign_in("tok-1", &user).unwrap();
    assert_eq!(evaluate_session(&required, &session), Decision::Allow);
    assert_eq!(session.user().unwrap().unwrap(), user);

    session.sign_out().unwrap();
    assert_eq!(evaluate_session(&required, &session), Decision::RedirectToLogin);
    assert_eq!(snapshot(&session), (None, None));
}

#[test]
fn stored_user_uses_capitalized_field_names() {
    let session = empty_session();
    session
        .sign_in("tok", &UserRecord::with_role("guest"))
        .unwrap();
    let (_, raw) = snapshot(&session);
    let json: serde_json::Value = serde_json::from_str(&raw.unwrap()).unwrap();
    assert_eq!(json["Role"], "guest");
    assert!(json.get("role").is_none());
}

#[test]
fn empty_stored_token_reads_as_empty_string() {
    let session = raw_session(Some(""), None);
    assert_eq!(session.token().as_deref(), Some(""));
    assert!(session.user().is_none());
}

#[test]
fn configured_keys_isolate_sessions_in_one_store() {
    let store = MemoryStore::new();
    let front = StoredSession::new(
        store.clone(),
        SessionConfig {
            token_key: "front.token".into(),
            user_key: "front.user".into(),
        },
    );
    let back = StoredSession::new(
        store.clone(),
        SessionConfig {
            token_key: "back.token".into(),
            user_key: "back.user".into(),
        },
    );

    front.sign_in("a", &UserRecord::with_role("admin")).unwrap();
    assert_eq!(store.len(), 2);
    assert!(back.token().is_none());
    assert_eq!(
        evaluate_session(&RequiredRoles::of(["admin"]), &back),
        Decision::RedirectToLogin
    );

    back.sign_in("b", &UserRecord::with_role("guest")).unwrap();
    front.sign_out().unwrap();
    assert_eq!(store.get("back.token").as_deref(), Some("b"));
    assert_eq!(store.len(), 2);
}
