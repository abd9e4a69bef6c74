use dioxus::prelude::*;
use shared_types::{
    evaluate_session, AppError, Decision, HotelRole, RequiredRoles, SessionConfig,
    SessionProvider, UserRecord,
};
use shared_ui::Spinner;

use crate::routes::Route;
use crate::session_store::{open_session, AppSession};

/// Session state shared through context.
///
/// The store is the source of truth; `revision` only exists so components
/// that read the session re-render after a sign-in or sign-out.
#[derive(Clone)]
pub struct SessionContext {
    session: AppSession,
    revision: Signal<u64>,
}

impl SessionContext {
    pub fn new(keys: SessionConfig) -> Self {
        Self {
            session: open_session(keys),
            revision: Signal::new(0),
        }
    }

    /// Run the access gate against the stored session. Read-only.
    pub fn decide(&self, required: &RequiredRoles) -> Decision {
        let _subscribe = self.revision.read();
        if let Some(Err(e)) = self.session.user() {
            tracing::warn!("ignoring stored user record: {e}");
        }
        evaluate_session(required, &self.session)
    }

    /// The signed-in user, if the session has both a token and a valid record.
    pub fn current_user(&self) -> Option<UserRecord> {
        let _subscribe = self.revision.read();
        self.session.token().filter(|t| !t.is_empty())?;
        self.session.user()?.ok()
    }

    pub fn current_role(&self) -> Option<HotelRole> {
        self.current_user().and_then(|u| u.hotel_role())
    }

    /// Start a session for `user` under a fresh random token.
    ///
    /// Session readers re-render even when a write fails, since a failed
    /// sign-in still clears the previous token.
    pub fn sign_in(&mut self, user: &UserRecord) -> Result<(), AppError> {
        let token = uuid::Uuid::new_v4().to_string();
        let result = self.session.sign_in(&token, user);
        self.bump();
        result?;
        tracing::info!(role = %user.role, "signed in");
        Ok(())
    }

    pub fn sign_out(&mut self) -> Result<(), AppError> {
        let result = self.session.sign_out();
        self.bump();
        result?;
        tracing::info!("signed out");
        Ok(())
    }

    fn bump(&mut self) {
        let next = *self.revision.peek() + 1;
        self.revision.set(next);
    }
}

/// Hook to access the session context.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

/// Hook returning the signed-in user, re-rendering on sign-in/sign-out.
pub fn use_current_user() -> Option<UserRecord> {
    use_session().current_user()
}

/// Like [`use_current_user`], narrowed to a role this app has pages for.
pub fn use_current_role() -> Option<HotelRole> {
    use_session().current_role()
}

/// Where a non-`Allow` decision sends the visitor.
///
/// Login redirects carry `from` so the visitor returns after signing in.
pub fn redirect_for(decision: Decision, from: &Route) -> Option<Route> {
    match decision {
        Decision::Allow => None,
        Decision::RedirectToLogin => Some(Route::Login {
            redirect: Some(from.to_string()),
        }),
        Decision::RedirectToForbidden => Some(Route::Unauthorized {}),
    }
}

/// Renders `children` only when the session's role is in `roles`;
/// otherwise replaces the current history entry with login or not-authorized.
#[component]
pub fn RoleGuard(roles: RequiredRoles, children: Element) -> Element {
    let session = use_session();
    let route: Route = use_route();

    if roles.is_empty() {
        tracing::warn!(path = %route, "role guard has no allowed roles; every visitor is refused");
    }

    let decision = session.decide(&roles);
    if let Some(target) = redirect_for(decision, &route) {
        tracing::debug!(from = %route, to = %target, required = %roles, "access gate redirect");
        navigator().replace(target);
    }

    rsx! {
        GatedView { decision, {children} }
    }
}

/// What a guarded page shows for `decision`: the page itself on `Allow`,
/// a placeholder while the redirect happens otherwise.
#[component]
fn GatedView(decision: Decision, children: Element) -> Element {
    let label = match decision {
        Decision::Allow => return rsx! { {children} },
        Decision::RedirectToForbidden => "Checking permissions...",
        Decision::RedirectToLogin => "Redirecting to login...",
    };
    rsx! { Spinner { label: "{label}" } }
}
