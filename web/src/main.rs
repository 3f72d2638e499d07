use dioxus::prelude::*;
use ui::{BodyFrame, PageHead};
use views::Home;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        PageHead {}
        BodyFrame {
            Router::<Route> {}
        }
    }
}
