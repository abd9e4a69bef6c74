use crate::models::{RequiredRoles, UserRecord};
use crate::session::SessionProvider;

/// Outcome of an access check for a protected view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Render the protected view.
    Allow,
    /// No usable session; send the visitor to the login view.
    RedirectToLogin,
    /// Signed in, but the role is not permitted here.
    RedirectToForbidden,
}

/// Decide whether a visitor may open a view guarded by `required`.
///
/// An empty token counts as no token. A user record that failed to parse
/// should be passed as `None`.
pub fn evaluate(
    required: &RequiredRoles,
    token: Option<&str>,
    user: Option<&UserRecord>,
) -> Decision {
    let has_token = token.is_some_and(|t| !t.is_empty());
    match user {
        Some(user) if has_token => {
            if required.contains(&user.role) {
                Decision::Allow
            } else {
                Decision::RedirectToForbidden
            }
        }
        _ => Decision::RedirectToLogin,
    }
}

/// [`evaluate`] over whatever `session` currently holds.
///
/// Malformed user data is treated as absent.
pub fn evaluate_session<P: SessionProvider + ?Sized>(
    required: &RequiredRoles,
    session: &P,
) -> Decision {
    let token = session.token();
    let user = session.user().and_then(Result::ok);
    evaluate(required, token.as_deref(), user.as_ref())
}
