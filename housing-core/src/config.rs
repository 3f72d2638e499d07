//! Configuration options for rendering and exporting the page

use crate::content::{google_fonts_href, MediaReference};
use crate::error::{Result, SiteError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Configuration for the static document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Value of the `lang` attribute on the root element
    pub lang: String,

    /// Stylesheet providing the font families
    pub fonts_href: String,

    /// External site stylesheet; the bundled one is inlined when unset
    pub stylesheet_href: Option<String>,

    /// Media served next to the page
    pub media: MediaReference,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            lang: "hi".to_string(),
            fonts_href: google_fonts_href(),
            stylesheet_href: None,
            media: MediaReference::default(),
        }
    }
}

impl SiteConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a JSON configuration file. Missing keys take their defaults.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading site config from {}", path.display());
        let raw = tokio::fs::read_to_string(path).await?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.lang.trim().is_empty() {
            return Err(SiteError::Configuration(
                "lang must not be empty".to_string(),
            ));
        }
        if self.fonts_href.trim().is_empty() {
            return Err(SiteError::Configuration(
                "fonts_href must not be empty".to_string(),
            ));
        }
        if matches!(self.stylesheet_href.as_deref(), Some(href) if href.trim().is_empty()) {
            return Err(SiteError::Configuration(
                "stylesheet_href must not be empty when set".to_string(),
            ));
        }
        for path in self.media.static_paths() {
            if !path.starts_with('/') {
                return Err(SiteError::Configuration(format!(
                    "media path must be site-relative: {path}"
                )));
            }
        }
        Ok(())
    }

    pub fn with_lang<S: Into<String>>(mut self, lang: S) -> Self {
        self.lang = lang.into();
        self
    }

    pub fn with_fonts_href<S: Into<String>>(mut self, href: S) -> Self {
        self.fonts_href = href.into();
        self
    }

    pub fn with_stylesheet_href<S: Into<String>>(mut self, href: S) -> Self {
        self.stylesheet_href = Some(href.into());
        self
    }

    pub fn with_media(mut self, media: MediaReference) -> Self {
        self.media = media;
        self
    }
}
