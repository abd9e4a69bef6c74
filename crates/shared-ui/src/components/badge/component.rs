use dioxus::prelude::*;

/// Colour family of a badge. Room statuses map onto these in the app.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Accent,
    Positive,
    Caution,
}

impl BadgeTone {
    fn key(&self) -> &'static str {
        match self {
            BadgeTone::Neutral => "neutral",
            BadgeTone::Accent => "accent",
            BadgeTone::Positive => "positive",
            BadgeTone::Caution => "caution",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct BadgeProps {
    #[props(default)]
    pub tone: BadgeTone,
    /// Prefix the label with a coloured dot, for live statuses.
    #[props(default = false)]
    pub dot: bool,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

/// Pill label for roles and room statuses.
#[component]
pub fn Badge(props: BadgeProps) -> Element {
    let merged = dioxus_primitives::merge_attributes(vec![
        vec![
            Attribute::new("class", "badge", None, false),
            Attribute::new("data-tone", props.tone.key(), None, false),
        ],
        props.attributes,
    ]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            if props.dot {
                span { class: "badge-dot", "aria-hidden": "true" }
            }
            {props.children}
        }
    }
}
