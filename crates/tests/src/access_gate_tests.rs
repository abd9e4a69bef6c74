use pretty_assertions::assert_eq;
use shared_types::{evaluate, evaluate_session, Decision, HotelRole, RequiredRoles, UserRecord};

use crate::common::{empty_session, raw_session, signed_in_as, snapshot};

fn admin_only() -> RequiredRoles {
    RequiredRoles::of([HotelRole::Admin])
}

#[test]
fn empty_token_and_no_user_redirects_to_login() {
    let session = raw_session(Some(""), None);
    assert_eq!(evaluate_session(&admin_only(), &session), Decision::RedirectToLogin);
}

#[test]
fn no_session_at_all_redirects_to_login() {
    let session = empty_session();
    assert_eq!(
        evaluate_session(&RequiredRoles::of(["guest"]), &session),
        Decision::RedirectToLogin
    );
}

#[test]
fn guest_on_admin_page_is_forbidden() {
    let session = signed_in_as("guest");
    assert_eq!(
        evaluate_session(&admin_only(), &session),
        Decision::RedirectToForbidden
    );
}

#[test]
fn admin_on_shared_page_is_allowed() {
    let session = signed_in_as("admin");
    let required = RequiredRoles::of([HotelRole::Admin, HotelRole::Housekeeping]);
    assert_eq!(evaluate_session(&required, &session), Decision::Allow);
}

#[test]
fn malformed_user_record_redirects_to_login() {
    let session = raw_session(Some("abc"), Some("{not json"));
    assert_eq!(
        evaluate_session(&RequiredRoles::of(["guest"]), &session),
        Decision::RedirectToLogin
    );
}

#[test]
fn user_record_without_role_redirects_to_login() {
    let session = raw_session(Some("abc"), Some(r#"{"Name":"Ada"}"#));
    assert_eq!(
        evaluate_session(&RequiredRoles::of(["guest"]), &session),
        Decision::RedirectToLogin
    );
}

#[test]
fn user_without_token_redirects_to_login() {
    let session = raw_session(None, Some(r#"{"Role":"admin"}"#));
    assert_eq!(evaluate_session(&admin_only(), &session), Decision::RedirectToLogin);
}

#[test]
fn role_match_is_case_sensitive() {
    let session = raw_session(Some("abc"), Some(r#"{"Role":"Admin"}"#));
    assert_eq!(
        evaluate_session(&admin_only(), &session),
        Decision::RedirectToForbidden
    );
}

#[test]
fn unknown_role_is_forbidden_not_login() {
    let session = raw_session(Some("abc"), Some(r#"{"Role":"concierge"}"#));
    assert_eq!(
        evaluate_session(&RequiredRoles::of(["guest", "admin"]), &session),
        Decision::RedirectToForbidden
    );
}

#[test]
fn extra_fields_in_user_record_are_ignored() {
    let session = raw_session(
        Some("abc"),
        Some(r#"{"Role":"housekeeping","Name":"Sam","Floor":3}"#),
    );
    assert_eq!(
        evaluate_session(&RequiredRoles::of(["housekeeping"]), &session),
        Decision::Allow
    );
}

#[test]
fn empty_required_set_forbids_signed_in_users() {
    let session = signed_in_as("admin");
    assert_eq!(
        evaluate_session(&RequiredRoles::default(), &session),
        Decision::RedirectToForbidden
    );
}

#[test]
fn evaluation_does_not_touch_the_store() {
    let session = raw_session(Some("abc"), Some("{not json"));
    let before = snapshot(&session);
    for _ in 0..3 {
        evaluate_session(&admin_only(), &session);
    }
    assert_eq!(snapshot(&session), before);
    assert_eq!(session.store().len(), 2);
}

#[test]
fn repeated_evaluation_is_stable() {
    let session = signed_in_as("guest");
    let required = RequiredRoles::of(["guest"]);
    let first = evaluate_session(&required, &session);
    let second = evaluate_session(&required, &session);
    assert_eq!(first, second);
    assert_eq!(first, Decision::Allow);
}

#[test]
fn pure_evaluate_matches_session_evaluation() {
    let user = UserRecord::with_role("guest");
    let required = RequiredRoles::of(["guest"]);
    assert_eq!(evaluate(&required, Some("t"), Some(&user)), Decision::Allow);
    assert_eq!(
        evaluate(&required, Some("t"), Some(&user)),
        evaluate_session(&required, &signed_in_as("guest"))
    );
}
