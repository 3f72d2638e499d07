//! Server-side rendering of the page to HTML strings.

use dioxus::prelude::*;
use housing_core::SiteConfig;
use tracing::debug;

use crate::{HomePage, RootLayout};

/// Render the full static document, doctype and root element included.
pub fn render_document(config: &SiteConfig) -> String {
    debug!("Rendering document (lang={})", config.lang);
    let media = config.media.clone();
    let markup = dioxus_ssr::render_element(rsx! {
        RootLayout {
            config: config.clone(),
            HomePage { media }
        }
    });
    format!(
        "<!DOCTYPE html><html lang=\"{}\">{markup}</html>",
        escape_attribute(&config.lang)
    )
}

/// Render only the page body with the default media.
pub fn render_home() -> String {
    dioxus_ssr::render_element(rsx! {
        HomePage {}
    })
}

fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
