use dioxus::prelude::*;

/// Controlled tab strip.
///
/// `tabs` is a list of `(key, label)` pairs. The caller owns the selected
/// key and updates it from `on_change`; this component keeps no state.
#[component]
pub fn TabBar(
    tabs: Vec<(&'static str, &'static str)>,
    active: String,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "tab-bar", role: "tablist",
            for (key, label) in tabs {
                button {
                    key: "{key}",
                    r#type: "button",
                    class: "tab-trigger",
                    role: "tab",
                    "aria-selected": if active == key { "true" } else { "false" },
                    "data-state": if active == key { "active" } else { "inactive" },
                    onclick: move |_| on_change.call(key.to_string()),
                    "{label}"
                }
            }
        }
    }
}
