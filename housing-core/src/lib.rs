//! Housing Support Core Library
//!
//! Content model, site configuration and video storyboard for the national
//! housing support programme page.

pub mod assets;
pub mod config;
pub mod content;
pub mod error;
pub mod export;
pub mod storyboard;

pub use assets::check_assets;
pub use config::SiteConfig;
pub use content::{
    body_class, font_tokens_css, google_fonts_href, Fact, FontFamily, HeroContent, KeyPoint, Marker, MediaReference, PageMetadata,
    Topic, UsageGuide, FONTS, HERO, KEY_POINTS, KEY_POINTS_HEADING, METADATA, USAGE_GUIDE,
};
pub use error::{Result, SiteError};
pub use export::write_index;
pub use storyboard::{Icon, RenderPlan, Segment, SlideTiming, Timeline, SEGMENTS};
