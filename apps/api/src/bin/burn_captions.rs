//! Burns overlay text onto the first avatar video found in a directory.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use reelfarm_api::config::Config;
use reelfarm_api::overlay::OverlayPolicy;
use reelfarm_api::render::job::display_name;
use reelfarm_api::render::{find_first_video, CaptionJob, FfmpegRenderer};
use reelfarm_api::telemetry::init_tracing;

/// Burn hook text onto an avatar video with the same layout as the dashboard preview
#[derive(Parser, Debug)]
#[command(name = "burn-captions")]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory searched for the source video (.mp4, .mov, .avi, .mkv)
    #[arg(default_value = "videos")]
    videos_dir: PathBuf,

    /// Overlay text
    #[arg(default_value = "Sample Text")]
    text: String,

    /// Where the captioned video is written
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Also extract a JPEG thumbnail from the captioned video
    #[arg(long)]
    thumbnail: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env()?;
    init_tracing(env!("CARGO_CRATE_NAME"), &config.rust_log);

    let policy = OverlayPolicy::REEL_FARM;
    let text_len = args.text.chars().count();
    if text_len > policy.max_text_chars {
        anyhow::bail!(
            "overlay text is {text_len} characters; the limit is {}",
            policy.max_text_chars
        );
    }

    let input = find_first_video(&args.videos_dir)
        .with_context(|| format!("looking for a video in '{}'", args.videos_dir.display()))?;
    info!("Found first video: {}", input.display());

    let renderer = FfmpegRenderer::from_config(&config, policy);
    let job = CaptionJob {
        input,
        text: args.text,
        out_dir: args.out_dir,
        thumbnail: args.thumbnail,
    };
    let output = job
        .run(&renderer, &policy)
        .await
        .context("burning captions")?;

    info!("Created {}", display_name(&output.video));
    if let Some(thumbnail) = &output.thumbnail {
        info!("Thumbnail {}", display_name(thumbnail));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["burn-captions"]).unwrap();
        assert_eq!(args.videos_dir, PathBuf::from("videos"));
        assert_eq!(args.text, "Sample Text");
        assert!(!args.thumbnail);
    }

    #[test]
    fn test_positional_and_flags() {
        let args = Args::try_parse_from([
            "burn-captions",
            "clips",
            "I wish someone told me this sooner...",
            "--out-dir",
            "out",
            "--thumbnail",
        ])
        .unwrap();
        assert_eq!(args.videos_dir, PathBuf::from("clips"));
        assert_eq!(args.text, "I wish someone told me this sooner...");
        assert_eq!(args.out_dir, PathBuf::from("out"));
        assert!(args.thumbnail);
    }
}
