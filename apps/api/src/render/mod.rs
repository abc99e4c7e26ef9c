//! Caption renderer — burns wrapped overlay text onto avatar videos with ffmpeg.
//!
//! The renderer and the preview share `OverlayPolicy`: the lines written into
//! the drawtext text file come from the same wrap function the preview uses.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

pub mod drawtext;
pub mod ffmpeg;
pub mod job;
pub mod source;

pub use drawtext::DrawTextFilter;
pub use ffmpeg::FfmpegRenderer;
pub use job::{CaptionJob, CaptionOutput};
pub use source::find_first_video;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Input not found: {0}")]
    InputNotFound(PathBuf),

    #[error("Font file not found at {0}")]
    FontNotFound(PathBuf),

    #[error("No video files found in '{0}'")]
    NoVideoFound(PathBuf),

    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("ffmpeg {step} failed with {status}")]
    FfmpegFailed {
        step: &'static str,
        status: std::process::ExitStatus,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The two operations the caption pipeline needs from a video backend.
#[async_trait]
pub trait CaptionRenderer: Send + Sync {
    /// Burns `lines` (already wrapped) centred onto `input`, writing `output`.
    async fn burn_overlay(
        &self,
        input: &Path,
        lines: &[String],
        output: &Path,
    ) -> Result<(), RenderError>;

    /// Writes a single JPEG frame of `video` to `output`.
    async fn extract_thumbnail(&self, video: &Path, output: &Path) -> Result<(), RenderError>;
}
