//! Exhaustive checks of the gate's decision table over small input sets.

use pretty_assertions::assert_eq;
use shared_types::{evaluate, Decision, RequiredRoles, UserRecord};

const TOKENS: &[Option<&str>] = &[None, Some(""), Some("t"), Some("3f2c-9a")];
const ROLES: &[&str] = &["admin", "guest", "housekeeping", "Admin", "", "concierge"];

fn role_sets() -> Vec<RequiredRoles> {
    vec![
        RequiredRoles::default(),
        RequiredRoles::of(["admin"]),
        RequiredRoles::of(["guest", "admin"]),
        RequiredRoles::of(["housekeeping", "admin"]),
        RequiredRoles::of(["admin", "guest", "housekeeping"]),
    ]
}

fn users() -> Vec<Option<UserRecord>> {
    std::iter::once(None)
        .chain(ROLES.iter().map(|r| Some(UserRecord::with_role(*r))))
        .collect()
}

#[test]
fn missing_token_or_user_always_means_login() {
    for required in role_sets() {
        for token in TOKENS {
            for user in users() {
                let absent = token.map_or(true, str::is_empty) || user.is_none();
                if !absent {
                    continue;
                }
                assert_eq!(
                    evaluate(&required, *token, user.as_ref()),
                    Decision::RedirectToLogin,
                    "required={required} token={token:?} user={user:?}"
                );
            }
        }
    }
}

#[test]
fn allow_iff_role_in_required_set() {
    for required in role_sets() {
        for token in TOKENS.iter().filter(|t| t.is_some_and(|t| !t.is_empty())) {
            for user in users().into_iter().flatten() {
                let expected = if required.contains(&user.role) {
                    Decision::Allow
                } else {
                    Decision::RedirectToForbidden
                };
                assert_eq!(
                    evaluate(&required, *token, Some(&user)),
                    expected,
                    "required={required} role={}",
                    user.role
                );
            }
        }
    }
}

#[test]
fn token_value_never_changes_the_outcome() {
    let user = UserRecord::with_role("guest");
    let required = RequiredRoles::of(["guest"]);
    let outcomes: Vec<Decision> = TOKENS
        .iter()
        .filter(|t| t.is_some_and(|t| !t.is_empty()))
        .map(|t| evaluate(&required, *t, Some(&user)))
        .collect();
    assert!(outcomes.iter().all(|d| *d == Decision::Allow));
}
