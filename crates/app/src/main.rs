use dioxus::prelude::*;
use shared_ui::theme::ThemeState;

mod auth;
mod config;
mod routes;
mod session_store;

use auth::SessionContext;
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");
const THEME_HARBOR: Asset = asset!("/assets/themes/harbor.css");
const THEME_LINEN: Asset = asset!("/assets/themes/linen.css");

fn main() {
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    use_hook(|| {
        let branding = &config::app_config().branding;
        tracing::info!(
            platform = client_platform(),
            hotel = %branding.hotel_name,
            "front end starting"
        );
    });

    use_context_provider(|| SessionContext::new(config::app_config().session.clone()));
    use_context_provider(ThemeState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        document::Link { rel: "stylesheet", href: THEME_HARBOR }
        document::Link { rel: "stylesheet", href: THEME_LINEN }
        shared_ui::theme::ThemeSeed {}
        Router::<Route> {}
    }
}
