//! ffmpeg invocations that assemble the programme video from its slides,
//! narration and generated music.

use super::{Timeline, SEGMENTS};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

const SAMPLE_RATE: u32 = 44_100;
const MUSIC_FILTER: &str =
    "[0:a]volume=0.25[a0];[1:a]volume=0.18[a1];[a0][a1]amix=inputs=2:duration=shortest:normalize=0";
const MIX_FILTER: &str =
    "[0:a]volume=1[a0];[1:a]volume=0.22[a1];[a0][a1]amix=inputs=2:duration=first:dropout_transition=2";

/// A single ffmpeg invocation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub description: String,
    pub args: Vec<String>,
}

impl Step {
    fn new(description: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            description: description.into(),
            args,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ffmpeg")?;
        for arg in &self.args {
            write!(f, " {}", quote(arg))?;
        }
        Ok(())
    }
}

fn quote(arg: &str) -> String {
    let plain = arg
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "-_./:=,@+%".contains(c));
    if plain && !arg.is_empty() {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn args<const N: usize>(items: [&str; N]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Every ffmpeg call needed to turn narration, slides and generated music
/// into the final video, in execution order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPlan {
    pub steps: Vec<Step>,
    /// Contents of the concat demuxer list file
    pub concat_list: String,
    pub concat_list_path: PathBuf,
    pub output: PathBuf,
}

impl RenderPlan {
    pub fn new(assets_dir: &Path, timeline: &Timeline) -> Self {
        let narration = assets_dir.join("narration.wav");
        let music = assets_dir.join("music.wav");
        let final_audio = assets_dir.join("final_audio.wav");
        let concat_list_path = assets_dir.join("segments.txt");
        let output = assets_dir.join("housing_support.mp4");

        let mut steps = vec![music_step(&music, timeline.music_duration())];
        steps.push(mix_step(&narration, &music, &final_audio));

        let mut concat_list = String::new();
        for (idx, (segment, slide)) in SEGMENTS.iter().zip(&timeline.slides).enumerate() {
            let image = assets_dir.join(format!("{}.png", segment.key));
            let video = assets_dir.join(format!("{:02}_{}.mp4", idx + 1, segment.key));
            concat_list.push_str(&format!("file '{}'\n", video.display()));
            steps.push(slide_step(&image, slide.duration, &video));
        }

        steps.push(concat_step(&concat_list_path, &final_audio, &output));

        Self {
            steps,
            concat_list,
            concat_list_path,
            output,
        }
    }
}

fn music_step(out: &Path, duration: u64) -> Step {
    let mut a = args(["-y", "-f", "lavfi", "-i"]);
    a.push(format!("sine=frequency=432:duration={duration}:sample_rate={SAMPLE_RATE}"));
    a.extend(args(["-f", "lavfi", "-i"]));
    a.push(format!("sine=frequency=528:duration={duration}:sample_rate={SAMPLE_RATE}"));
    a.extend(args(["-filter_complex", MUSIC_FILTER]));
    a.push(path_arg(out));
    Step::new("Generate background music", a)
}

fn mix_step(narration: &Path, music: &Path, out: &Path) -> Step {
    let mut a = args(["-y", "-i"]);
    a.push(path_arg(narration));
    a.push("-i".to_string());
    a.push(path_arg(music));
    a.extend(args(["-filter_complex", MIX_FILTER, "-ac", "2", "-ar"]));
    a.push(SAMPLE_RATE.to_string());
    a.push(path_arg(out));
    Step::new("Mix narration over music", a)
}

fn slide_step(image: &Path, duration: f64, out: &Path) -> Step {
    let mut a = args(["-y", "-loop", "1", "-i"]);
    a.push(path_arg(image));
    a.extend(args(["-c:v", "libx264", "-t"]));
    a.push(format!("{duration:.2}"));
    a.extend(args(["-pix_fmt", "yuv420p", "-vf"]));
    a.push(format!("scale={}:{}", super::FRAME_SIZE.0, super::FRAME_SIZE.1));
    a.push(path_arg(out));
    Step::new(format!("Encode slide {}", image.display()), a)
}

fn concat_step(list: &Path, audio: &Path, out: &Path) -> Step {
    let mut a = args(["-y", "-f", "concat", "-safe", "0", "-i"]);
    a.push(path_arg(list));
    a.push("-i".to_string());
    a.push(path_arg(audio));
    a.extend(args([
        "-c:v", "libx264", "-c:a", "aac", "-b:a", "192k", "-shortest", "-pix_fmt", "yuv420p",
    ]));
    a.push(path_arg(out));
    Step::new("Concatenate slides with the mixed audio", a)
}
