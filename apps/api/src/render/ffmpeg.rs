use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tracing::{debug, info};

use crate::config::Config;
use crate::overlay::OverlayPolicy;
use crate::render::drawtext::DrawTextFilter;
use crate::render::{CaptionRenderer, RenderError};

/// Renders captions by shelling out to the system `ffmpeg`.
#[derive(Debug, Clone)]
pub struct FfmpegRenderer {
    pub ffmpeg_bin: String,
    pub font_file: PathBuf,
    pub work_dir: PathBuf,
    pub policy: OverlayPolicy,
}

impl FfmpegRenderer {
    pub fn from_config(config: &Config, policy: OverlayPolicy) -> Self {
        Self {
            ffmpeg_bin: config.ffmpeg_bin.clone(),
            font_file: config.overlay_font_file.clone(),
            work_dir: config.render_work_dir.clone(),
            policy,
        }
    }

    fn overlay_args(&self, input: &Path, text_file: &Path, output: &Path) -> Vec<OsString> {
        let filter = DrawTextFilter::new(text_file, &self.font_file, self.policy);
        vec![
            "-i".into(),
            input.into(),
            "-vf".into(),
            filter.to_filter_arg().into(),
            "-c:a".into(),
            "copy".into(),
            "-y".into(),
            output.into(),
        ]
    }

    fn thumbnail_args(video: &Path, output: &Path) -> Vec<OsString> {
        vec![
            "-i".into(),
            video.into(),
            "-ss".into(),
            "00:00:01".into(),
            "-vframes".into(),
            "1".into(),
            "-q:v".into(),
            "2".into(),
            "-y".into(),
            output.into(),
        ]
    }

    /// Runs ffmpeg to completion, forwarding its stderr to the log line by line.
    async fn run(&self, step: &'static str, args: Vec<OsString>) -> Result<(), RenderError> {
        info!(step, program = %self.ffmpeg_bin, ?args, "starting ffmpeg");

        let mut child = Command::new(&self.ffmpeg_bin)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| RenderError::Spawn {
                program: self.ffmpeg_bin.clone(),
                source,
            })?;

        // ffmpeg echoes container metadata verbatim, which need not be UTF-8.
        if let Some(stderr) = child.stderr.take() {
            let mut reader = BufReader::new(stderr);
            let mut buf = Vec::new();
            loop {
                buf.clear();
                if reader.read_until(b'\n', &mut buf).await? == 0 {
                    break;
                }
                let line = String::from_utf8_lossy(&buf);
                debug!(step, "ffmpeg: {}", line.trim_end());
            }
        }

        let status = child.wait().await?;
        if !status.success() {
            return Err(RenderError::FfmpegFailed { step, status });
        }
        info!(step, "ffmpeg finished");
        Ok(())
    }
}

async fn require_file(path: &Path, missing: impl FnOnce(PathBuf) -> RenderError) -> Result<(), RenderError> {
    if tokio::fs::try_exists(path).await? {
        Ok(())
    } else {
        Err(missing(path.to_path_buf()))
    }
}

#[async_trait]
impl CaptionRenderer for FfmpegRenderer {
    async fn burn_overlay(
        &self,
        input: &Path,
        lines: &[String],
        output: &Path,
    ) -> Result<(), RenderError> {
        require_file(input, RenderError::InputNotFound).await?;
        require_file(&self.font_file, RenderError::FontNotFound).await?;
        tokio::fs::create_dir_all(&self.work_dir).await?;

        // Removed when dropped, after ffmpeg has read it.
        let mut text_file = tempfile::Builder::new()
            .prefix("text_")
            .suffix(".txt")
            .tempfile_in(&self.work_dir)?;
        text_file.write_all(lines.join("\n").as_bytes())?;
        text_file.flush()?;

        let args = self.overlay_args(input, text_file.path(), output);
        self.run("overlay", args).await
    }

    async fn extract_thumbnail(&self, video: &Path, output: &Path) -> Result<(), RenderError> {
        require_file(video, RenderError::InputNotFound).await?;
        self.run("thumbnail", Self::thumbnail_args(video, output)).await
    }
}
