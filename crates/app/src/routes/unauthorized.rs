use dioxus::prelude::*;
use shared_ui::Card;

use crate::auth::use_current_user;
use crate::routes::{home_route, Route};

/// Where the access gate sends signed-in users whose role is not allowed.
#[component]
pub fn Unauthorized() -> Element {
    let user = use_current_user();
    let role = user.as_ref().and_then(|u| u.hotel_role());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./unauthorized.css") }

        div { class: "unauthorized-page",
            Card {
                class: "unauthorized-card",
                title: "Not authorized",
                description: "Your role does not have access to that page.",
                footer: rsx! {
                    if let Some(role) = role {
                        Link { to: home_route(role), class: "unauthorized-link", "Back to your dashboard" }
                    } else {
                        Link { to: Route::Home {}, class: "unauthorized-link", "Back to the lobby" }
                    }
                    Link {
                        to: Route::Login { redirect: None },
                        class: "unauthorized-link secondary",
                        "Sign in with a different role"
                    }
                },
                if let Some(user) = user {
                    p { "You are signed in as {user.display_name()} ({user.role})." }
                }
            }
        }
    }
}
