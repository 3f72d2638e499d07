//! This crate contains all shared UI for the workspace.

mod hero;
pub use hero::{FactSummary, Hero};

mod home;
pub use home::HomePage;

mod info;
pub use info::{InfoSection, KeyPoints, UsageGuidePanel};

mod layout;
pub use layout::{BodyFrame, PageHead, RootLayout};

mod render;
pub use render::{render_document, render_home};

mod video;
pub use video::VideoPlayer;
