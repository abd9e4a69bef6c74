use crate::auth::{use_current_user, use_session};
use crate::routes::{home_route, Route};
use dioxus::prelude::*;
use shared_types::{HotelRole, UserRecord, ALL_ROLES};
use shared_ui::{Button, Card, SelectField, TextField};
use std::collections::HashMap;
use std::str::FromStr;

/// Validate the sign-in form into a user record.
///
/// Returns per-field messages keyed by field name on failure.
fn build_user(name: &str, email: &str, role: &str) -> Result<UserRecord, HashMap<String, String>> {
    let mut errors = HashMap::new();
    let name = name.trim();
    let email = email.trim();

    if name.is_empty() {
        errors.insert("name".to_string(), "Name is required".to_string());
    }
    if !email.is_empty() && !email.contains('@') {
        errors.insert("email".to_string(), "Enter a valid email address".to_string());
    }
    let role = match HotelRole::from_key(role) {
        Some(role) => role,
        None => {
            errors.insert("role".to_string(), "Choose a role".to_string());
            return Err(errors);
        }
    };
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(UserRecord {
        role: role.role_id(),
        name: Some(name.to_string()),
        email: (!email.is_empty()).then(|| email.to_string()),
    })
}

/// Where to go after signing in: the `redirect` path when it names a
/// protected page of this app, otherwise the role's own dashboard.
fn login_destination(redirect: Option<&str>, role: HotelRole) -> Route {
    redirect
        .and_then(|path| Route::from_str(path).ok())
        .filter(|route| {
            !matches!(
                route,
                Route::Login { .. } | Route::NotFound { .. } | Route::Unauthorized {}
            )
        })
        .unwrap_or_else(|| home_route(role))
}

fn role_options() -> Vec<(&'static str, &'static str)> {
    ALL_ROLES
        .iter()
        .map(|r| (r.as_str(), r.display_name()))
        .collect()
}

/// Demo sign-in: writes a token and user record to the session store.
#[component]
pub fn Login(redirect: Option<String>) -> Element {
    let mut session = use_session();
    let current = use_current_user();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut role = use_signal(|| HotelRole::Guest.as_str().to_string());
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut error_msg = use_signal(|| Option::<String>::None);

    let redirect_target = use_signal(move || redirect);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        error_msg.set(None);

        let user = match build_user(&name(), &email(), &role()) {
            Ok(user) => user,
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };
        field_errors.set(HashMap::new());

        match session.sign_in(&user) {
            Ok(()) => {
                let role = user.hotel_role().unwrap_or(HotelRole::Guest);
                let target = login_destination(redirect_target.read().as_deref(), role);
                navigator().replace(target);
            }
            Err(e) => {
                tracing::warn!("sign in failed: {e}");
                error_msg.set(Some(e.friendly_message()));
            }
        }
    };

    let errors = field_errors.read().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",
                title: "Sign In",
                description: "Pick a role to explore its dashboard",

                if let Some(user) = current {
                    div { class: "auth-notice",
                        "Signed in as {user.display_name()}. Signing in again replaces that session."
                    }
                }

                if let Some(err) = error_msg() {
                    div { class: "auth-error", "{err}" }
                }

                form { class: "auth-form", onsubmit: handle_login,
                    TextField {
                        label: "Name",
                        name: "name",
                        value: name(),
                        on_input: move |v: String| name.set(v),
                        placeholder: "Ada Lovelace",
                        error: errors.get("name").cloned().unwrap_or_default(),
                    }
                    TextField {
                        label: "Email (optional)",
                        name: "email",
                        input_type: "email",
                        value: email(),
                        on_input: move |v: String| email.set(v),
                        placeholder: "ada@example.com",
                        error: errors.get("email").cloned().unwrap_or_default(),
                    }
                    SelectField {
                        label: "Role",
                        name: "role",
                        value: role(),
                        options: role_options(),
                        on_change: move |v: String| role.set(v),
                    }
                    Button { submit: true, block: true, "Sign in" }
                }
            }
        }
    }
}
