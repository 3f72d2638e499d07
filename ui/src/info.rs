use dioxus::prelude::*;
use housing_core::{KEY_POINTS, KEY_POINTS_HEADING, USAGE_GUIDE};

#[component]
pub fn InfoSection() -> Element {
    rsx! {
        section {
            id: "info",
            class: "panel info-grid",
            KeyPoints {}
            UsageGuidePanel {}
        }
    }
}

/// The four on-screen points of the video, each behind a coloured dot.
#[component]
pub fn KeyPoints() -> Element {
    rsx! {
        article {
            class: "key-points",
            h2 { "{KEY_POINTS_HEADING}" }
            ul {
                for point in KEY_POINTS {
                    li {
                        key: "{point.topic}",
                        "data-topic": "{point.topic}",
                        span { class: point.marker.class() }
                        span { "{point.text}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn UsageGuidePanel() -> Element {
    rsx! {
        article {
            class: "usage-guide",
            h3 { "{USAGE_GUIDE.heading}" }
            div {
                class: "usage-steps",
                for paragraph in USAGE_GUIDE.paragraphs {
                    p { "{paragraph}" }
                }
            }
        }
    }
}
