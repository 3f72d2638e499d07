//! Housing Support CLI - static export and video storyboard tooling

use clap::{Parser, Subcommand};
use housing_core::{
    check_assets, write_index, RenderPlan, SiteConfig, SiteError, Timeline, SEGMENTS,
};
use owo_colors::OwoColorize as _;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().or_else(|_| EnvFilter::builder().parse("info"))?,
            )
            .compact()
            .without_time()
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
    debug!("Command line arguments: {:?}", cli);

    let config = match cli.config {
        Some(ref path) => SiteConfig::load(path).await?,
        None => SiteConfig::default(),
    };

    match cli.command {
        Commands::Render { out_dir } => render(&config, &out_dir).await,
        Commands::CheckAssets { public } => check(&config, &public).await,
        Commands::Storyboard { json } => storyboard(json),
        Commands::Timeline { clips, json } => timeline(&clips, json),
        Commands::Plan { assets, clips } => plan(&assets, &clips),
    }
}

const ABOUT: &str = "🏠 Static page and video tooling for the national housing support programme";
#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"))]
#[command(about = ABOUT)]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON site configuration (defaults are used when omitted)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the page to a static index.html
    Render {
        /// Output directory
        #[arg(short, long = "out-dir", default_value = "dist")]
        out_dir: PathBuf,
    },
    /// Check that the poster and video exist in the public directory
    CheckAssets {
        /// Directory served as the site root
        #[arg(short, long, default_value = "public")]
        public: PathBuf,
    },
    /// Print the slides the video is made of
    Storyboard {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Compute slide durations from narration clip lengths (seconds)
    Timeline {
        #[arg(value_name = "SECONDS", required = true, allow_negative_numbers = true)]
        clips: Vec<f64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the ffmpeg commands that assemble the video
    Plan {
        /// Directory holding narration, slides and intermediate files
        #[arg(short, long, default_value = "assets")]
        assets: PathBuf,

        #[arg(value_name = "SECONDS", required = true, allow_negative_numbers = true)]
        clips: Vec<f64>,
    },
}

async fn render(config: &SiteConfig, out_dir: &Path) -> anyhow::Result<()> {
    let html = ui::render_document(config);
    let path = write_index(out_dir, &html).await?;
    println!("{} {}", "Rendered".green().bold(), path.display());
    Ok(())
}

async fn check(config: &SiteConfig, public: &Path) -> anyhow::Result<()> {
    match check_assets(public, &config.media).await {
        Ok(found) => {
            for file in found {
                println!("{} {}", "✓".green(), file.display());
            }
            Ok(())
        }
        Err(SiteError::MissingAssets(missing)) => {
            for file in &missing {
                println!("{} {}", "✗".red(), file.display());
            }
            error!("{} static asset(s) missing under {}", missing.len(), public.display());
            process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}

fn storyboard(json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&SEGMENTS)?);
        return Ok(());
    }

    for (idx, segment) in SEGMENTS.iter().enumerate() {
        let (r, g, b) = segment.accent_rgb().unwrap_or((255, 255, 255));
        println!(
            "{} {} {} ({}, {}, {})",
            format!("{:02}", idx + 1).blue().bold(),
            "●".truecolor(r, g, b),
            segment.headline.bold(),
            segment.key,
            segment.icon,
            segment.accent
        );
        println!("   {}", segment.bullet);
        println!("   {}", segment.narration.dimmed());
    }
    Ok(())
}

fn build_timeline(clips: &[f64]) -> Timeline {
    match Timeline::from_clips(clips) {
        Ok(timeline) => timeline,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}

fn timeline(clips: &[f64], json: bool) -> anyhow::Result<()> {
    let timeline = build_timeline(clips);

    if json {
        println!("{}", serde_json::to_string_pretty(&timeline)?);
        return Ok(());
    }

    for slide in &timeline.slides {
        println!("{:<12} {:>6.2}s", slide.key, slide.duration);
    }
    println!("{:<12} {:>6.2}s", "total".bold(), timeline.total());
    println!("{:<12} {:>6}s", "music".bold(), timeline.music_duration());
    Ok(())
}

fn plan(assets: &Path, clips: &[f64]) -> anyhow::Result<()> {
    let timeline = build_timeline(clips);
    let plan = RenderPlan::new(assets, &timeline);
    info!("{} ffmpeg steps, output {}", plan.steps.len(), plan.output.display());

    println!("# {}", plan.concat_list_path.display());
    for line in plan.concat_list.lines() {
        println!("#   {line}");
    }
    for step in &plan.steps {
        println!("# {}", step.description);
        println!("{step}");
    }
    Ok(())
}
