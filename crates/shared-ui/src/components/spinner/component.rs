use dioxus::prelude::*;

/// Centered loading indicator with an accessible label.
#[component]
pub fn Spinner(
    #[props(default = "Loading...".to_string())] label: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "spinner-wrap", None, false),
        Attribute::new("role", "status", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            div { class: "spinner", "aria-hidden": "true" }
            p { class: "spinner-label", "{label}" }
        }
    }
}
