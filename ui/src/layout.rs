use dioxus::prelude::*;
use housing_core::{body_class, font_tokens_css, google_fonts_href, SiteConfig, METADATA};

const MAIN_CSS: Asset = asset!("/assets/main.css");
const STYLESHEET: &str = include_str!("../assets/main.css");

/// Head and body of the static export.
///
/// Publishes the page metadata, pulls in both font families and wraps
/// `children` in a body carrying the font-token classes. The site
/// stylesheet is linked when configured and inlined otherwise. The root
/// element and its `lang` are written by [`crate::render_document`].
#[component]
pub fn RootLayout(#[props(default)] config: SiteConfig, children: Element) -> Element {
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{METADATA.title}" }
            meta { name: "description", content: "{METADATA.description}" }
            link { rel: "preconnect", href: "https://fonts.googleapis.com" }
            link { rel: "stylesheet", href: "{config.fonts_href}" }
            style { dangerous_inner_html: font_tokens_css() }
            if let Some(href) = config.stylesheet_href.as_deref() {
                link { rel: "stylesheet", href: "{href}" }
            } else {
                style { dangerous_inner_html: STYLESHEET }
            }
        }
        body {
            class: body_class(),
            {children}
        }
    }
}

/// Head elements for the client-side app, where the host page owns
/// `html` and `body`.
#[component]
pub fn PageHead() -> Element {
    rsx! {
        document::Title { "{METADATA.title}" }
        document::Meta { name: "description", content: METADATA.description }
        document::Link { rel: "stylesheet", href: google_fonts_href() }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
    }
}

/// Stand-in for the styled body inside the client-side app.
#[component]
pub fn BodyFrame(children: Element) -> Element {
    let lang = SiteConfig::default().lang;
    rsx! {
        style { dangerous_inner_html: font_tokens_css() }
        div {
            lang: "{lang}",
            class: body_class(),
            {children}
        }
    }
}
