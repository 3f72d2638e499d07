//! Storyboard of the programme video.
//!
//! The video is four narrated slides. This module holds the slide copy, the
//! narration timeline arithmetic and the ffmpeg plan that assembles the MP4.

mod ffmpeg;
mod timeline;

pub use ffmpeg::{RenderPlan, Step};
pub use timeline::{
    SlideTiming, Timeline, INTER_GAP_SECS, MAX_TOTAL_SECS, MUSIC_TAIL_SECS, POST_ROLL_SECS,
    PRE_ROLL_SECS,
};

use serde::Serialize;
use strum::Display;

/// Pictogram drawn in the centre of a slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Document,
    People,
    Laptop,
    Home,
}

/// One narrated slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub key: &'static str,
    pub headline: &'static str,
    pub bullet: &'static str,
    pub narration: &'static str,
    pub background: &'static str,
    pub accent: &'static str,
    pub icon: Icon,
}

/// Slide frame size in pixels
pub const FRAME_SIZE: (u32, u32) = (1280, 720);

pub const SEGMENTS: [Segment; 4] = [
    Segment {
        key: "overview",
        headline: "कार्यक्रम के बारे में",
        bullet: "राष्ट्रीय आवास सहायता योजना सुरक्षित घर दिलाने में मदद करती है।",
        narration: "नमस्कार। यह राष्ट्रीय आवास सहायता कार्यक्रम कम और मध्यम आय वाले परिवारों को सुरक्षित और किफायती घर उपलब्ध कराने में मदद करता है। उद्देश्य है हर नागरिक तक स्थायी छत पहुँचाना, बिना किसी जटिल प्रक्रिया के।",
        background: "#f4f7fb",
        accent: "#0f5fa6",
        icon: Icon::Document,
    },
    Segment {
        key: "eligibility",
        headline: "कौन आवेदन कर सकता है",
        bullet: "भारतीय नागरिक, जिनकी आय योजना की सीमा में है और जिनका अपना घर नहीं है।",
        narration: "इस योजना का लाभ वे नागरिक उठा सकते हैं जिनकी आय निर्धारित सीमा के भीतर है, जिनके पास स्थायी घर नहीं है, और जो सरकारी आवास मदद के पिछले लाभार्थी नहीं रहे हैं।",
        background: "#f8f5f0",
        accent: "#c47a0f",
        icon: Icon::People,
    },
    Segment {
        key: "apply",
        headline: "ऑनलाइन आवेदन कैसे करें",
        bullet: "आधिकारिक पोर्टल पर जाएं, आधार और आय संबंधी विवरण भरें, दस्तावेज़ अपलोड करें।",
        narration: "ऑनलाइन आवेदन के लिए आधिकारिक पोर्टल पर जाएं, अपना आधार विवरण, आय और परिवार की जानकारी भरें, आवश्यक दस्तावेज़ अपलोड करें और आवेदन जमा करने से पहले सभी जानकारी की पुष्टि करें।",
        background: "#eef7f2",
        accent: "#1f7a52",
        icon: Icon::Laptop,
    },
    Segment {
        key: "benefits",
        headline: "मुख्य लाभ",
        bullet: "घर खरीद या निर्माण के लिए आर्थिक सहायता, सरल प्रक्रिया और समय पर सहायता।",
        narration: "स्वीकृति के बाद समय पर आर्थिक सहायता सीधे आपके खाते में आती है। योजना घर खरीदने, बनाने या सुधारने में सहायता देती है, और पूरी प्रक्रिया पारदर्शी तथा सरल है।",
        background: "#f4f0f6",
        accent: "#6b2fa3",
        icon: Icon::Home,
    },
];

impl Segment {
    /// Accent colour as an RGB triple, `None` if the hex literal is malformed.
    pub fn accent_rgb(&self) -> Option<(u8, u8, u8)> {
        parse_hex(self.accent)
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accents_parse() {
        assert_eq!(SEGMENTS[0].accent_rgb(), Some((0x0f, 0x5f, 0xa6)));
        assert!(SEGMENTS.iter().all(|s| s.accent_rgb().is_some()));
        assert_eq!(parse_hex("0f5fa6"), None);
        assert_eq!(parse_hex("#zz5fa6"), None);
    }

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<_> = SEGMENTS.iter().map(|s| s.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), SEGMENTS.len());
    }
}
