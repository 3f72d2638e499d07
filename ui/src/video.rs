use dioxus::prelude::*;
use housing_core::MediaReference;

/// Native video player. Playback, buffering and failures are left to the
/// browser; without a source the fallback text is all the element holds.
#[component]
pub fn VideoPlayer(media: MediaReference) -> Element {
    if !media.has_source() {
        tracing::warn!("No video source configured, rendering fallback only");
        return rsx! {
            video {
                class: "video",
                controls: true,
                preload: "metadata",
                poster: "{media.poster}",
                "{media.fallback_text}"
            }
        };
    }

    rsx! {
        video {
            class: "video",
            controls: true,
            preload: "metadata",
            poster: "{media.poster}",
            source { src: "{media.video_src}", r#type: "{media.video_mime}" }
            "{media.fallback_text}"
        }
    }
}
