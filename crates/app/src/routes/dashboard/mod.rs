pub mod admin;
pub mod guest;
pub mod housekeeping;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLayoutDashboard;
use dioxus_free_icons::Icon;
use shared_types::{HotelRole, RequiredRoles, ALL_ROLES};

use crate::auth::{use_current_role, RoleGuard};

/// A dashboard's fixed set of tabs.
///
/// The first entry of `ALL` is the default tab.
pub trait DashboardTab: Copy + PartialEq + 'static {
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;
    fn label(&self) -> &'static str;

    /// Parse a tab key, falling back to the first tab.
    fn from_key(key: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|tab| tab.as_str() == key)
            .unwrap_or(Self::ALL[0])
    }

    /// `(key, label)` pairs for [`shared_ui::TabBar`].
    fn tab_items() -> Vec<(&'static str, &'static str)> {
        Self::ALL.iter().map(|t| (t.as_str(), t.label())).collect()
    }
}

/// Roles allowed on `/dashboard`.
pub fn any_staff_or_guest() -> RequiredRoles {
    RequiredRoles::of(ALL_ROLES.iter().copied())
}

/// Role-adaptive dashboard: renders the panel for the signed-in role.
#[component]
pub fn Dashboard() -> Element {
    rsx! {
        RoleGuard { roles: any_staff_or_guest(),
            RolePanel {}
        }
    }
}

#[component]
fn RolePanel() -> Element {
    let role = use_current_role();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        div { class: "dashboard-switch-note",
            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 16, height: 16 }
            "Your dashboard"
        }
        match role {
            Some(HotelRole::Admin) => rsx! { admin::AdminPanel {} },
            Some(HotelRole::Guest) => rsx! { guest::GuestPanel {} },
            Some(HotelRole::Housekeeping) => rsx! { housekeeping::HousekeepingPanel {} },
            // The guard only admits the three known roles.
            None => rsx! {},
        }
    }
}
