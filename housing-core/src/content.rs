//! Fixed page content: metadata, fonts, hero copy, key points and media.
//!
//! Every value here is a compile-time constant. The page is a pure function
//! of this module.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Document metadata published to browsers and crawlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: &'static str,
    pub description: &'static str,
}

pub const METADATA: PageMetadata = PageMetadata {
    title: "राष्ट्रीय आवास सहायता वीडियो गाइड",
    description: "हिंदी में 60 सेकंड का शैक्षणिक वीडियो जो राष्ट्रीय आवास सहायता कार्यक्रम के उद्देश्य, पात्रता, ऑनलाइन आवेदन और प्रमुख लाभ समझाता है।",
};

/// A font family exposed to the layout as a style token.
///
/// `class` is the body class that binds the CSS custom property `variable`
/// to `family`, with `fallback` taking over when the font never loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontFamily {
    pub family: &'static str,
    pub variable: &'static str,
    pub class: &'static str,
    pub fallback: &'static str,
}

pub const GEIST_SANS: FontFamily = FontFamily {
    family: "Geist",
    variable: "--font-geist-sans",
    class: "font-geist-sans",
    fallback: "\"Noto Sans Devanagari\", system-ui, sans-serif",
};

pub const GEIST_MONO: FontFamily = FontFamily {
    family: "Geist Mono",
    variable: "--font-geist-mono",
    class: "font-geist-mono",
    fallback: "ui-monospace, monospace",
};

pub const FONTS: [FontFamily; 2] = [GEIST_SANS, GEIST_MONO];

impl FontFamily {
    /// Rule binding the token class to the custom property.
    pub fn token_rule(&self) -> String {
        format!(
            ".{} {{ {}: \"{}\", {}; }}",
            self.class, self.variable, self.family, self.fallback
        )
    }
}

/// Style token rules for every registered family.
pub fn font_tokens_css() -> String {
    FONTS
        .iter()
        .map(FontFamily::token_rule)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Google Fonts stylesheet serving every registered family.
pub fn google_fonts_href() -> String {
    let families = FONTS
        .iter()
        .map(|font| format!("family={}:wght@100..900", font.family.replace(' ', "+")))
        .collect::<Vec<_>>()
        .join("&");
    format!("https://fonts.googleapis.com/css2?{families}&display=swap")
}

/// Class list for the document body: both font tokens plus anti-aliasing.
pub fn body_class() -> String {
    FONTS
        .iter()
        .map(|font| font.class)
        .chain(std::iter::once("antialiased"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A labelled fact cell in the hero summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fact {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeroContent {
    pub eyebrow: &'static str,
    pub heading: &'static str,
    pub body: &'static str,
    pub duration: Fact,
    pub language: Fact,
}

pub const HERO: HeroContent = HeroContent {
    eyebrow: "राष्ट्रीय आवास सहायता कार्यक्रम",
    heading: "सुरक्षित घर की दिशा में भरोसेमंद सरकारी पहल",
    body: "यह 60 सेकंड का हिंदी वीडियो कार्यक्रम के उद्देश्य, पात्रता, ऑनलाइन आवेदन प्रक्रिया और मूल लाभों को शांतिपूर्ण प्रस्तुति, स्पष्ट वॉयसओवर और हल्के संगीत के साथ समझाता है।",
    duration: Fact {
        label: "अवधि",
        value: "60 सेकंड",
    },
    language: Fact {
        label: "भाषा",
        value: "हिंदी (तटस्थ, जानकारीपूर्ण शैली)",
    },
};

impl HeroContent {
    pub fn facts(&self) -> [Fact; 2] {
        [self.duration, self.language]
    }
}

/// Decorative bullet colour. Carries no meaning beyond its look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    Blue,
    Amber,
    Emerald,
    Violet,
}

impl Marker {
    pub fn class(self) -> &'static str {
        match self {
            Marker::Blue => "marker marker-blue",
            Marker::Amber => "marker marker-amber",
            Marker::Emerald => "marker marker-emerald",
            Marker::Violet => "marker marker-violet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Introduction,
    Eligibility,
    Application,
    Benefits,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeyPoint {
    pub topic: Topic,
    pub text: &'static str,
    pub marker: Marker,
}

pub const KEY_POINTS_HEADING: &str = "स्क्रीन पर मुख्य बिंदु";

pub const KEY_POINTS: [KeyPoint; 4] = [
    KeyPoint {
        topic: Topic::Introduction,
        text: "कार्यक्रम का परिचय: सुरक्षित और किफायती आवास उपलब्ध कराने वाली राष्ट्रीय योजना।",
        marker: Marker::Blue,
    },
    KeyPoint {
        topic: Topic::Eligibility,
        text: "पात्रता: जिन परिवारों की आय निर्धारित सीमा में है और जिनके पास स्थायी घर नहीं है।",
        marker: Marker::Amber,
    },
    KeyPoint {
        topic: Topic::Application,
        text: "ऑनलाइन आवेदन प्रक्रिया: पोर्टल पर पंजीकरण, विवरण भरना और डिजिटल दस्तावेज़ अपलोड करना।",
        marker: Marker::Emerald,
    },
    KeyPoint {
        topic: Topic::Benefits,
        text: "प्रमुख लाभ: घर खरीद, निर्माण या सुधार के लिए सीधे खाते में वित्तीय सहायता और पारदर्शी प्रक्रिया।",
        marker: Marker::Violet,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UsageGuide {
    pub heading: &'static str,
    pub paragraphs: [&'static str; 3],
}

pub const USAGE_GUIDE: UsageGuide = UsageGuide {
    heading: "उपयोग करने का तरीका",
    paragraphs: [
        "ऊपर दिए गए वीडियो को प्ले करें और संपूर्ण ऑडियो-विज़ुअल मार्गदर्शिका का उपयोग अधिकारियों या अर्ज़ी प्रक्रिया से पहले ट्रस्ट-बिल्डिंग जानकारी के लिए करें।",
        "वीडियो में शांत बैकग्राउंड संगीत, स्पष्ट हिंदी वॉयसओवर और सरल दृश्य शामिल हैं जो दस्तावेज़, घर तथा ऑनलाइन आवेदन को प्रदर्शित करते हैं।",
        "आवश्यकता पड़ने पर वीडियो को डाउनलोड करने के लिए प्लेयर मेन्यू का उपयोग करें और क्लाइंट, नागरिक या प्रशिक्षण टीम के साथ साझा करें।",
    ],
};

pub const VIDEO_SRC: &str = "/videos/housing-support.mp4";
pub const VIDEO_MIME: &str = "video/mp4";
pub const POSTER_SRC: &str = "/posters/housing-support.jpg";
pub const VIDEO_FALLBACK: &str = "आपका ब्राउज़र वीडियो टैग को सपोर्ट नहीं करता।";

/// Paths of the media served by the static file server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaReference {
    pub video_src: String,
    pub video_mime: String,
    pub poster: String,
    pub fallback_text: String,
}

impl Default for MediaReference {
    fn default() -> Self {
        Self {
            video_src: VIDEO_SRC.to_string(),
            video_mime: VIDEO_MIME.to_string(),
            poster: POSTER_SRC.to_string(),
            fallback_text: VIDEO_FALLBACK.to_string(),
        }
    }
}

impl MediaReference {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_video_src<S: Into<String>>(mut self, src: S) -> Self {
        self.video_src = src.into();
        self
    }

    pub fn with_poster<S: Into<String>>(mut self, poster: S) -> Self {
        self.poster = poster.into();
        self
    }

    /// Whether a `source` element should be emitted at all.
    pub fn has_source(&self) -> bool {
        !self.video_src.trim().is_empty()
    }

    /// Site-relative paths the file server must provide.
    pub fn static_paths(&self) -> Vec<&str> {
        [self.poster.as_str(), self.video_src.as_str()]
            .into_iter()
            .filter(|p| !p.trim().is_empty())
            .collect()
    }
}
