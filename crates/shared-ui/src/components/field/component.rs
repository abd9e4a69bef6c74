use dioxus::prelude::*;

/// Labelled text input that reports its value as a `String`.
#[component]
pub fn TextField(
    label: String,
    name: String,
    value: String,
    on_input: EventHandler<String>,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] placeholder: String,
    /// Validation message; empty means the field is valid.
    #[props(default)]
    error: String,
) -> Element {
    let invalid = !error.is_empty();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "field", "data-invalid": if invalid { "true" } else { "false" },
            label { class: "field-label", r#for: "{name}", "{label}" }
            input {
                class: "field-control",
                id: "{name}",
                name: "{name}",
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                oninput: move |evt| on_input.call(evt.value()),
            }
            if invalid {
                p { class: "field-error", "{error}" }
            }
        }
    }
}

/// Labelled native select over `(value, label)` options.
#[component]
pub fn SelectField(
    label: String,
    name: String,
    value: String,
    options: Vec<(&'static str, &'static str)>,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "field",
            label { class: "field-label", r#for: "{name}", "{label}" }
            select {
                class: "field-control",
                id: "{name}",
                name: "{name}",
                value: value.clone(),
                onchange: move |evt| on_change.call(evt.value()),
                for (option_value, option_label) in options {
                    option {
                        key: "{option_value}",
                        value: option_value,
                        selected: value == option_value,
                        "{option_label}"
                    }
                }
            }
        }
    }
}
