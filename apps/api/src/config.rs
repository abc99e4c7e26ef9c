use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// ffmpeg executable used by the caption renderer.
    pub ffmpeg_bin: String,
    /// Font file burned in by drawtext. Must match the preview's first font family.
    pub overlay_font_file: PathBuf,
    /// Scratch directory for drawtext text files.
    pub render_work_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            port: var("PORT", "3000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG", "info"),
            ffmpeg_bin: var("FFMPEG_BIN", "ffmpeg"),
            overlay_font_file: PathBuf::from(var(
                "OVERLAY_FONT_FILE",
                "./TikTokDisplay-Medium.ttf",
            )),
            render_work_dir: PathBuf::from(var("RENDER_WORK_DIR", "/tmp/video-processing")),
        })
    }
}
