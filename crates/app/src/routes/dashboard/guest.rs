use dioxus::prelude::*;
use shared_types::{HotelRole, RequiredRoles, UserRecord};
use shared_ui::{Button, ButtonVariant, Card, PageHeader, TabBar};

use super::DashboardTab;
use crate::auth::{use_current_user, RoleGuard};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GuestTab {
    Stay,
    Services,
    Profile,
}

impl DashboardTab for GuestTab {
    const ALL: &'static [Self] = &[GuestTab::Stay, GuestTab::Services, GuestTab::Profile];

    fn as_str(&self) -> &'static str {
        match self {
            GuestTab::Stay => "stay",
            GuestTab::Services => "services",
            GuestTab::Profile => "profile",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            GuestTab::Stay => "My stay",
            GuestTab::Services => "Services",
            GuestTab::Profile => "Profile",
        }
    }
}

const SERVICES: &[(&str, &str)] = &[
    ("Room service", "In-room dining from 6am to midnight."),
    ("Spa", "Treatments by appointment."),
    ("Late checkout", "Subject to availability."),
    ("Airport transfer", "Book at least 24 hours ahead."),
];

/// `/guest`: guest portal. Admins may open it to see what guests see.
#[component]
pub fn GuestDashboard() -> Element {
    rsx! {
        RoleGuard { roles: RequiredRoles::of([HotelRole::Guest, HotelRole::Admin]),
            GuestPanel {}
        }
    }
}

#[component]
pub fn GuestPanel() -> Element {
    let mut tab = use_signal(|| GuestTab::ALL[0]);
    let user = use_current_user();
    let greeting = greeting_for(user.as_ref());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        div { class: "dashboard-page",
            PageHeader { title: "{greeting}", subtitle: "Everything about your stay" }
            TabBar {
                tabs: GuestTab::tab_items(),
                active: tab().as_str().to_string(),
                on_change: move |key: String| tab.set(GuestTab::from_key(&key)),
            }
            match tab() {
                GuestTab::Stay => rsx! { Stay {} },
                GuestTab::Services => rsx! { Services {} },
                GuestTab::Profile => rsx! { Profile { user } },
            }
        }
    }
}

fn greeting_for(user: Option<&UserRecord>) -> String {
    match user.and_then(|u| u.name.as_deref()).map(str::trim) {
        Some(name) if !name.is_empty() => format!("Welcome, {name}"),
        _ => "Welcome".to_string(),
    }
}

#[component]
fn Stay() -> Element {
    rsx! {
        div { class: "dashboard-grid",
            Card { title: "Reservation", description: "Details from the front desk.",
                footer: rsx! {
                    Button { variant: ButtonVariant::Outline, "Modify dates" }
                    Button { variant: ButtonVariant::Ghost, "Cancel reservation" }
                },
                dl { class: "dashboard-details",
                    dt { "Check-in" }
                    dd { "From 3pm" }
                    dt { "Check-out" }
                    dd { "By 11am" }
                }
            }
            Card { title: "Digital key", description: "Available once your room is ready.",
                Button { variant: ButtonVariant::Primary, disabled: true, "Open key" }
            }
        }
    }
}

#[component]
fn Services() -> Element {
    rsx! {
        div { class: "dashboard-grid",
            for (name, note) in SERVICES.iter().copied() {
                Card { key: "{name}", title: "{name}",
                    footer: rsx! { Button { variant: ButtonVariant::Secondary, "Request" } },
                    p { "{note}" }
                }
            }
        }
    }
}

#[component]
fn Profile(#[props(!optional)] user: Option<UserRecord>) -> Element {
    let name = user
        .as_ref()
        .and_then(|u| u.name.clone())
        .unwrap_or_else(|| "Not provided".to_string());
    let email = user
        .as_ref()
        .and_then(|u| u.email.clone())
        .unwrap_or_else(|| "Not provided".to_string());

    rsx! {
        Card { title: "Profile",
            footer: rsx! { Button { variant: ButtonVariant::Outline, "Edit profile" } },
            dl { class: "dashboard-details",
                dt { "Name" }
                dd { "{name}" }
                dt { "Email" }
                dd { "{email}" }
            }
        }
    }
}
