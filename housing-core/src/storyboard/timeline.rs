//! Narration timeline: how long each slide stays on screen.

use super::SEGMENTS;
use crate::error::{Result, SiteError};
use serde::Serialize;
use tracing::debug;

/// Silence before the first narration clip
pub const PRE_ROLL_SECS: f64 = 0.5;
/// Silence between clips
pub const INTER_GAP_SECS: f64 = 0.4;
/// Silence after the last clip
pub const POST_ROLL_SECS: f64 = 0.6;
/// Background music runs this much longer than the narration
pub const MUSIC_TAIL_SECS: u64 = 5;
/// Longest narration track accepted, one day
pub const MAX_TOTAL_SECS: f64 = 86_400.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlideTiming {
    pub key: &'static str,
    pub clip: f64,
    pub duration: f64,
}

/// How long each slide stays on screen so that slides line up with the
/// narration track.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timeline {
    pub slides: Vec<SlideTiming>,
}

impl Timeline {
    /// Build the timeline from the narration clip lengths, in segment order.
    ///
    /// The first slide absorbs the pre-roll, the last the post-roll, every
    /// other slide is followed by the inter-clip gap.
    pub fn from_clips(clips: &[f64]) -> Result<Self> {
        if clips.len() != SEGMENTS.len() {
            return Err(SiteError::Timeline(format!(
                "expected {} narration clips, got {}",
                SEGMENTS.len(),
                clips.len()
            )));
        }
        if let Some(bad) = clips.iter().find(|c| !c.is_finite() || **c < 0.0) {
            return Err(SiteError::Timeline(format!(
                "invalid clip length: {bad}"
            )));
        }

        let last = clips.len() - 1;
        let slides = SEGMENTS
            .iter()
            .zip(clips)
            .enumerate()
            .map(|(idx, (segment, &clip))| {
                let lead = if idx == 0 { PRE_ROLL_SECS } else { 0.0 };
                let tail = if idx == last {
                    POST_ROLL_SECS
                } else {
                    INTER_GAP_SECS
                };
                SlideTiming {
                    key: segment.key,
                    clip,
                    duration: lead + clip + tail,
                }
            })
            .collect();

        let timeline = Self { slides };
        let total = timeline.total();
        if !total.is_finite() || total > MAX_TOTAL_SECS {
            return Err(SiteError::Timeline(format!(
                "narration too long: {total}s (limit {MAX_TOTAL_SECS}s)"
            )));
        }
        debug!("Narration timeline: {:.2}s", timeline.total());
        Ok(timeline)
    }

    /// Length of the narration track, silences included.
    pub fn total(&self) -> f64 {
        self.slides.iter().map(|s| s.duration).sum()
    }

    /// Length of the generated background music, in whole seconds.
    pub fn music_duration(&self) -> u64 {
        (self.total().ceil() as u64).saturating_add(MUSIC_TAIL_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn silences_are_assigned_to_edges() {
        let timeline = Timeline::from_clips(&[10.0, 12.0, 14.0, 11.0]).unwrap();
        let durations: Vec<_> = timeline.slides.iter().map(|s| s.duration).collect();
        assert!(close(durations[0], 10.9));
        assert!(close(durations[1], 12.4));
        assert!(close(durations[2], 14.4));
        assert!(close(durations[3], 11.6));
        assert!(close(timeline.total(), 49.3));
        assert_eq!(timeline.music_duration(), 55);
    }

    #[test]
    fn accepts_a_full_day() {
        let timeline = Timeline::from_clips(&[21_000.0; 4]).unwrap();
        assert_eq!(timeline.music_duration(), 84_008);
    }

    #[test]
    fn keys_follow_segments() {
        let timeline = Timeline::from_clips(&[1.0; 4]).unwrap();
        let keys: Vec<_> = timeline.slides.iter().map(|s| s.key).collect();
        assert_eq!(keys, vec!["overview", "eligibility", "apply", "benefits"]);
    }

    #[rstest]
    #[case(&[1.0, 2.0, 3.0])]
    #[case(&[1.0, 2.0, 3.0, 4.0, 5.0])]
    #[case(&[1.0, -2.0, 3.0, 4.0])]
    #[case(&[1.0, f64::NAN, 3.0, 4.0])]
    #[case(&[1.0, f64::INFINITY, 3.0, 4.0])]
    #[case(&[1e308, 1e308, 1e308, 1e308])]
    #[case(&[30_000.0, 30_000.0, 30_000.0, 30_000.0])]
    fn rejects_bad_clips(#[case] clips: &[f64]) {
        assert!(matches!(
            Timeline::from_clips(clips),
            Err(SiteError::Timeline(_))
        ));
    }
}
