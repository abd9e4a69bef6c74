use dioxus::prelude::*;
use shared_types::{HotelRole, RequiredRoles};
use shared_ui::{Badge, BadgeTone, Button, ButtonVariant, Card, PageHeader, TabBar};

use super::DashboardTab;
use crate::auth::RoleGuard;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AdminTab {
    Overview,
    Rooms,
    Staff,
    Reports,
}

impl DashboardTab for AdminTab {
    const ALL: &'static [Self] = &[
        AdminTab::Overview,
        AdminTab::Rooms,
        AdminTab::Staff,
        AdminTab::Reports,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            AdminTab::Overview => "overview",
            AdminTab::Rooms => "rooms",
            AdminTab::Staff => "staff",
            AdminTab::Reports => "reports",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            AdminTab::Overview => "Overview",
            AdminTab::Rooms => "Rooms",
            AdminTab::Staff => "Staff",
            AdminTab::Reports => "Reports",
        }
    }
}

/// Placeholder figures for the overview cards.
const OVERVIEW_STATS: &[(&str, &str, &str)] = &[
    ("Occupancy", "n/a", "Rooms in use tonight"),
    ("Arrivals", "n/a", "Expected check-ins today"),
    ("Departures", "n/a", "Expected check-outs today"),
    ("Open requests", "n/a", "Maintenance and guest requests"),
];

const ROOMS: &[(&str, &str, &str)] = &[
    ("101", "Queen", "occupied"),
    ("102", "Queen", "vacant"),
    ("201", "King suite", "cleaning"),
    ("202", "Twin", "out_of_order"),
];

const STAFF: &[(&str, &str)] = &[
    ("Front desk", "Morning and evening shifts"),
    ("Housekeeping", "Floor assignments"),
    ("Maintenance", "On-call rota"),
];

/// Badge label and style for a room status key.
pub(crate) fn room_status_badge(status: &str) -> (BadgeTone, &'static str) {
    match status {
        "vacant" => (BadgeTone::Positive, "Vacant"),
        "occupied" => (BadgeTone::Accent, "Occupied"),
        "cleaning" => (BadgeTone::Caution, "Cleaning"),
        "out_of_order" => (BadgeTone::Neutral, "Out of order"),
        _ => (BadgeTone::Neutral, "Unknown"),
    }
}

/// `/admin`: management console, admins only.
#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        RoleGuard { roles: RequiredRoles::of([HotelRole::Admin]),
            AdminPanel {}
        }
    }
}

#[component]
pub fn AdminPanel() -> Element {
    let mut tab = use_signal(|| AdminTab::ALL[0]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        div { class: "dashboard-page",
            PageHeader { title: "Management", subtitle: "Property overview and staff administration",
                Button { variant: ButtonVariant::Secondary, "New announcement" }
            }
            TabBar {
                tabs: AdminTab::tab_items(),
                active: tab().as_str().to_string(),
                on_change: move |key: String| tab.set(AdminTab::from_key(&key)),
            }
            match tab() {
                AdminTab::Overview => rsx! { Overview {} },
                AdminTab::Rooms => rsx! { Rooms {} },
                AdminTab::Staff => rsx! { Staff {} },
                AdminTab::Reports => rsx! { Reports {} },
            }
        }
    }
}

#[component]
fn Overview() -> Element {
    rsx! {
        div { class: "dashboard-grid",
            for (title, value, description) in OVERVIEW_STATS.iter().copied() {
                Card { key: "{title}", title: "{title}", description: "{description}",
                    p { class: "dashboard-stat", "{value}" }
                }
            }
        }
    }
}

#[component]
fn Rooms() -> Element {
    rsx! {
        Card { title: "Room status", footer: rsx! {
                Button { variant: ButtonVariant::Outline, "Block a room" }
                Button { variant: ButtonVariant::Outline, "Change rates" }
            },
            table { class: "dashboard-table",
                thead {
                    tr {
                        th { "Room" }
                        th { "Type" }
                        th { "Status" }
                    }
                }
                tbody {
                    for (number, kind, status) in ROOMS.iter().copied() {
                        RoomRow { key: "{number}", number, kind, status }
                    }
                }
            }
        }
    }
}

#[component]
fn RoomRow(number: &'static str, kind: &'static str, status: &'static str) -> Element {
    let (tone, label) = room_status_badge(status);
    rsx! {
        tr {
            td { "{number}" }
            td { "{kind}" }
            td { Badge { tone, dot: true, "{label}" } }
        }
    }
}

#[component]
fn Staff() -> Element {
    rsx! {
        div { class: "dashboard-grid",
            for (team, note) in STAFF.iter().copied() {
                Card { key: "{team}", title: "{team}",
                    footer: rsx! { Button { variant: ButtonVariant::Ghost, "View roster" } },
                    p { "{note}" }
                }
            }
        }
    }
}

#[component]
fn Reports() -> Element {
    rsx! {
        Card { title: "Reports", description: "Exports are generated by the property management system.",
            div { class: "dashboard-actions",
                Button { variant: ButtonVariant::Outline, "Occupancy report" }
                Button { variant: ButtonVariant::Outline, "Revenue report" }
                Button { variant: ButtonVariant::Outline, "Housekeeping report" }
            }
        }
    }
}
