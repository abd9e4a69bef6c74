use dioxus::prelude::*;

/// Bordered panel used for dashboard sections and forms.
///
/// `title` and `description` render a header when present; `footer`
/// renders below the body, usually holding actions.
#[component]
pub fn Card(
    title: Option<String>,
    description: Option<String>,
    footer: Option<Element>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let has_header = title.is_some() || description.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            if has_header {
                div { class: "card-header",
                    if let Some(title) = title {
                        h3 { class: "card-title", "{title}" }
                    }
                    if let Some(description) = description {
                        p { class: "card-description", "{description}" }
                    }
                }
            }
            div { class: "card-content", {children} }
            if let Some(footer) = footer {
                div { class: "card-footer", {footer} }
            }
        }
    }
}
