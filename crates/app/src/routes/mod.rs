pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;
pub mod unauthorized;

use crate::auth::{use_current_user, use_session};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdPackage, LdShield, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::HotelRole;
use shared_ui::theme::ThemeState;
use shared_ui::{Badge, Button, ButtonVariant};

use dashboard::admin::AdminDashboard;
use dashboard::guest::GuestDashboard;
use dashboard::housekeeping::HousekeepingDashboard;
use dashboard::Dashboard;
use home::Home;
use login::Login;
use not_found::NotFound;
use unauthorized::Unauthorized;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/login?:redirect")]
    Login { redirect: Option<String> },
    #[route("/unauthorized")]
    Unauthorized {},
    // ── Role-gated dashboards ──
    #[route("/dashboard")]
    Dashboard {},
    #[route("/admin")]
    AdminDashboard {},
    #[route("/guest")]
    GuestDashboard {},
    #[route("/housekeeping")]
    HousekeepingDashboard {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Landing route for a role after sign-in.
pub fn home_route(role: HotelRole) -> Route {
    match role {
        HotelRole::Admin => Route::AdminDashboard {},
        HotelRole::Guest => Route::GuestDashboard {},
        HotelRole::Housekeeping => Route::HousekeepingDashboard {},
    }
}

/// Dashboards a role may open from the navbar. Admins see all of them.
fn nav_roles(role: HotelRole) -> &'static [HotelRole] {
    match role {
        HotelRole::Admin => shared_types::ALL_ROLES,
        HotelRole::Guest => &[HotelRole::Guest],
        HotelRole::Housekeeping => &[HotelRole::Housekeeping],
    }
}

/// Top navbar shared by every page except the 404.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let mut session = use_session();
    let user = use_current_user();
    let mut theme: ThemeState = use_context();

    let role = user.as_ref().and_then(|u| u.hotel_role());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        header { class: "app-navbar",
            Link { to: Route::Home {}, class: "app-brand",
                "{crate::config::app_config().branding.hotel_name}"
            }

            nav { class: "app-nav-links",
                if let Some(role) = role {
                    for nav_role in nav_roles(role) {
                        NavLink {
                            key: "{nav_role.as_str()}",
                            role: *nav_role,
                            active: route == home_route(*nav_role),
                        }
                    }
                }
            }

            div { class: "app-nav-actions",
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| theme.cycle_family(),
                    "{theme.family.read().display_name()}"
                }
                if theme.family.read().has_dark() {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| theme.toggle_dark(),
                        if *theme.is_dark.read() { "Light mode" } else { "Dark mode" }
                    }
                }
                match &user {
                    Some(user) => rsx! {
                        span { class: "app-nav-user", "{user.display_name()}" }
                        Badge { "{user.role}" }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| {
                                if let Err(e) = session.sign_out() {
                                    tracing::warn!("sign out failed: {e}");
                                }
                                navigator().push(Route::Home {});
                            },
                            "Sign out"
                        }
                    },
                    None => rsx! {
                        Link { to: Route::Login { redirect: None }, class: "app-nav-signin", "Sign in" }
                    },
                }
            }
        }

        main { class: "app-main",
            Outlet::<Route> {}
        }
    }
}

#[component]
fn NavLink(role: HotelRole, active: bool) -> Element {
    let icon = match role {
        HotelRole::Admin => rsx! { Icon::<LdShield> { icon: LdShield, width: 16, height: 16 } },
        HotelRole::Guest => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 16, height: 16 } },
        HotelRole::Housekeeping => {
            rsx! { Icon::<LdPackage> { icon: LdPackage, width: 16, height: 16 } }
        }
    };

    let class = if active { "app-nav-link active" } else { "app-nav-link" };

    rsx! {
        Link {
            to: home_route(role),
            class: "{class}",
            {icon}
            "{role.display_name()}"
        }
    }
}
