use dioxus::prelude::*;
use shared_types::{HotelRole, ALL_ROLES};
use shared_ui::{Card, Hero};

use crate::auth::use_current_role;
use crate::config::app_config;
use crate::routes::{home_route, Route};

/// Marketing blurb for each role's section of the landing page.
fn role_blurb(role: HotelRole) -> &'static str {
    match role {
        HotelRole::Admin => "Occupancy, rooms, staff and reports for the whole property.",
        HotelRole::Guest => "Your reservation, hotel services and profile.",
        HotelRole::Housekeeping => "Today's cleaning tasks, the room board and supply requests.",
    }
}

/// Public landing page.
#[component]
pub fn Home() -> Element {
    let branding = &app_config().branding;
    let role = use_current_role();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        Hero { title: "{branding.hotel_name}", tagline: "{branding.tagline}",
            match role {
                Some(role) => rsx! {
                    Link { to: home_route(role), class: "home-cta", "Go to your dashboard" }
                },
                None => rsx! {
                    Link { to: Route::Login { redirect: None }, class: "home-cta", "Sign in" }
                },
            }
        }

        section { class: "home-roles",
            for role in ALL_ROLES.iter().copied() {
                Card { key: "{role.as_str()}", title: "{role.display_name()}",
                    p { "{role_blurb(role)}" }
                }
            }
        }
    }
}
