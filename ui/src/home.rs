use dioxus::prelude::*;
use housing_core::MediaReference;

use crate::{Hero, InfoSection};

/// The whole page body: hero with the video, then the information panels.
#[component]
pub fn HomePage(#[props(default)] media: MediaReference) -> Element {
    rsx! {
        div {
            class: "page",
            main {
                Hero { media }
                InfoSection {}
            }
        }
    }
}
