use dioxus::prelude::*;

/// Full-width landing banner with a headline, tagline and call-to-action slot.
#[component]
pub fn Hero(
    title: String,
    tagline: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "hero", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section {
            ..merged,
            div { class: "hero-inner",
                h1 { class: "hero-title", "{title}" }
                p { class: "hero-tagline", "{tagline}" }
                div { class: "hero-actions", {children} }
            }
        }
    }
}
