use dioxus::prelude::*;
use ui::HomePage;

#[component]
pub fn Home() -> Element {
    rsx! {
        HomePage {}
    }
}
