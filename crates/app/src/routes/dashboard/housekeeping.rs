use dioxus::prelude::*;
use shared_types::{HotelRole, RequiredRoles};
use shared_ui::{Badge, Button, ButtonVariant, Card, PageHeader, TabBar};

use super::admin::room_status_badge;
use super::DashboardTab;
use crate::auth::RoleGuard;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HousekeepingTab {
    Tasks,
    Rooms,
    Supplies,
}

impl DashboardTab for HousekeepingTab {
    const ALL: &'static [Self] = &[
        HousekeepingTab::Tasks,
        HousekeepingTab::Rooms,
        HousekeepingTab::Supplies,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            HousekeepingTab::Tasks => "tasks",
            HousekeepingTab::Rooms => "rooms",
            HousekeepingTab::Supplies => "supplies",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            HousekeepingTab::Tasks => "Today's tasks",
            HousekeepingTab::Rooms => "Room board",
            HousekeepingTab::Supplies => "Supplies",
        }
    }
}

const TASKS: &[(&str, &str)] = &[
    ("Room 201", "Checkout clean, King suite"),
    ("Room 305", "Stayover refresh"),
    ("Floor 2 corridor", "Vacuum and restock ice machine"),
];

const BOARD: &[(&str, &str)] = &[
    ("101", "occupied"),
    ("102", "vacant"),
    ("201", "cleaning"),
    ("305", "occupied"),
];

const SUPPLIES: &[&str] = &["Linen", "Towels", "Toiletries", "Cleaning chemicals"];

/// `/housekeeping`: cleaning staff view. Admins may open it too.
#[component]
pub fn HousekeepingDashboard() -> Element {
    rsx! {
        RoleGuard { roles: RequiredRoles::of([HotelRole::Housekeeping, HotelRole::Admin]),
            HousekeepingPanel {}
        }
    }
}

#[component]
pub fn HousekeepingPanel() -> Element {
    let mut tab = use_signal(|| HousekeepingTab::ALL[0]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        div { class: "dashboard-page",
            PageHeader { title: "Housekeeping", subtitle: "Assignments for this shift" }
            TabBar {
                tabs: HousekeepingTab::tab_items(),
                active: tab().as_str().to_string(),
                on_change: move |key: String| tab.set(HousekeepingTab::from_key(&key)),
            }
            match tab() {
                HousekeepingTab::Tasks => rsx! { Tasks {} },
                HousekeepingTab::Rooms => rsx! { RoomBoard {} },
                HousekeepingTab::Supplies => rsx! { Supplies {} },
            }
        }
    }
}

#[component]
fn Tasks() -> Element {
    rsx! {
        Card { title: "Assigned to you",
            ul { class: "dashboard-checklist",
                for (place, job) in TASKS.iter().copied() {
                    li { key: "{place}",
                        div {
                            strong { "{place}" }
                            span { class: "dashboard-muted", " {job}" }
                        }
                        Button { variant: ButtonVariant::Outline, "Mark done" }
                    }
                }
            }
        }
    }
}

#[component]
fn RoomBoard() -> Element {
    rsx! {
        div { class: "dashboard-board",
            for (number, status) in BOARD.iter().copied() {
                RoomTile { key: "{number}", number, status }
            }
        }
    }
}

#[component]
fn RoomTile(number: &'static str, status: &'static str) -> Element {
    let (tone, label) = room_status_badge(status);
    rsx! {
        div { class: "dashboard-tile",
            span { class: "dashboard-tile-number", "{number}" }
            Badge { tone, dot: true, "{label}" }
        }
    }
}

#[component]
fn Supplies() -> Element {
    rsx! {
        Card { title: "Request supplies", description: "Requests go to the housekeeping supervisor.",
            div { class: "dashboard-actions",
                for item in SUPPLIES.iter().copied() {
                    Button { key: "{item}", variant: ButtonVariant::Secondary, "{item}" }
                }
            }
        }
    }
}
