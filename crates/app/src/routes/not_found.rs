use dioxus::prelude::*;

use crate::routes::Route;

/// Path shown on the 404 page for the unmatched segments.
fn missing_path(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
}

/// Catch-all for unknown paths. Rendered outside the navbar layout.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = missing_path(&route);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-code", "404" }
            h1 { "No such room" }
            p { class: "not-found-message",
                "Nothing lives at "
                code { "{path}" }
                "."
            }
            Link { to: Route::Home {}, class: "not-found-link", "Back to the lobby" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn joins_segments() {
        assert_eq!(missing_path(&[]), "/");
        assert_eq!(
            missing_path(&["rooms".to_string(), "404".to_string()]),
            "/rooms/404"
        );
    }

    #[test]
    fn unknown_paths_fall_through() {
        assert!(matches!(
            Route::from_str("/spa/bookings"),
            Ok(Route::NotFound { .. })
        ));
    }
}
