use dioxus::prelude::*;
use housing_core::{MediaReference, HERO};

use crate::VideoPlayer;

#[component]
pub fn Hero(media: MediaReference) -> Element {
    rsx! {
        section {
            id: "hero",
            class: "panel",
            div {
                class: "hero-grid",
                div {
                    class: "hero-copy",
                    p { class: "eyebrow", "{HERO.eyebrow}" }
                    h1 { "{HERO.heading}" }
                    p { class: "lead", "{HERO.body}" }
                    FactSummary {}
                }
                div {
                    class: "video-frame",
                    VideoPlayer { media }
                }
            }
        }
    }
}

/// Duration and language cells shown under the hero copy.
#[component]
pub fn FactSummary() -> Element {
    rsx! {
        dl {
            class: "facts",
            for fact in HERO.facts() {
                div {
                    key: "{fact.label}",
                    class: "fact",
                    dt { "{fact.label}" }
                    dd { "{fact.value}" }
                }
            }
        }
    }
}
