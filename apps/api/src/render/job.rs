//! One caption burn: wrap the text with the shared policy, burn it in,
//! optionally grab a thumbnail.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::overlay::{wrap_with_policy, OverlayPolicy};
use crate::render::{CaptionRenderer, RenderError};

#[derive(Debug, Clone)]
pub struct CaptionJob {
    pub input: PathBuf,
    pub text: String,
    pub out_dir: PathBuf,
    pub thumbnail: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionOutput {
    pub lines: Vec<String>,
    pub video: PathBuf,
    pub thumbnail: Option<PathBuf>,
}

impl CaptionJob {
    /// `<stem>_with_text.<ext>` in the output directory.
    fn output_path(&self, ext: &str) -> PathBuf {
        let stem = self
            .input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "video".to_string());
        self.out_dir.join(format!("{stem}_with_text.{ext}"))
    }

    pub async fn run(
        &self,
        renderer: &dyn CaptionRenderer,
        policy: &OverlayPolicy,
    ) -> Result<CaptionOutput, RenderError> {
        let lines = wrap_with_policy(&self.text, policy);
        info!(input = %self.input.display(), line_count = lines.len(), "burning captions");
        for (i, line) in lines.iter().enumerate() {
            info!("  line {}: '{line}'", i + 1);
        }

        tokio::fs::create_dir_all(&self.out_dir).await?;
        let video = self.output_path("mp4");
        renderer.burn_overlay(&self.input, &lines, &video).await?;

        let thumbnail = if self.thumbnail {
            let path = self.output_path("jpg");
            renderer.extract_thumbnail(&video, &path).await?;
            Some(path)
        } else {
            None
        };

        info!(output = %video.display(), "captions burned");
        Ok(CaptionOutput {
            lines,
            video,
            thumbnail,
        })
    }
}

/// Convenience for callers that only have a path to show.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tempfile::TempDir;

    #[derive(Default)]
    struct RecordingRenderer {
        calls: Mutex<Vec<String>>,
        burned_lines: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl CaptionRenderer for RecordingRenderer {
        async fn burn_overlay(
            &self,
            input: &Path,
            lines: &[String],
            output: &Path,
        ) -> Result<(), RenderError> {
            self.calls.lock().unwrap().push(format!(
                "overlay {} -> {}",
                display_name(input),
                display_name(output)
            ));
            *self.burned_lines.lock().unwrap() = lines.to_vec();
            Ok(())
        }

        async fn extract_thumbnail(&self, video: &Path, output: &Path) -> Result<(), RenderError> {
            self.calls.lock().unwrap().push(format!(
                "thumbnail {} -> {}",
                display_name(video),
                display_name(output)
            ));
            Ok(())
        }
    }

    fn make_job(out_dir: PathBuf, thumbnail: bool) -> CaptionJob {
        CaptionJob {
            input: PathBuf::from("videos/avatar_01.mp4"),
            text: "I wish someone told me this sooner...".to_string(),
            out_dir,
            thumbnail,
        }
    }

    #[tokio::test]
    async fn test_burns_the_same_lines_the_preview_shows() {
        let dir = TempDir::new().unwrap();
        let renderer = RecordingRenderer::default();
        let output = make_job(dir.path().to_path_buf(), false)
            .run(&renderer, &OverlayPolicy::REEL_FARM)
            .await
            .unwrap();

        let expected = vec!["I wish someone told me this", "sooner..."];
        assert_eq!(output.lines, expected);
        assert_eq!(*renderer.burned_lines.lock().unwrap(), expected);
        assert_eq!(output.video, dir.path().join("avatar_01_with_text.mp4"));
        assert_eq!(output.thumbnail, None);
        assert_eq!(
            *renderer.calls.lock().unwrap(),
            vec!["overlay avatar_01.mp4 -> avatar_01_with_text.mp4"]
        );
    }

    #[tokio::test]
    async fn test_thumbnail_taken_from_burned_video() {
        let dir = TempDir::new().unwrap();
        let renderer = RecordingRenderer::default();
        let output = make_job(dir.path().to_path_buf(), true)
            .run(&renderer, &OverlayPolicy::REEL_FARM)
            .await
            .unwrap();

        assert_eq!(
            output.thumbnail,
            Some(dir.path().join("avatar_01_with_text.jpg"))
        );
        assert_eq!(
            renderer.calls.lock().unwrap()[1],
            "thumbnail avatar_01_with_text.mp4 -> avatar_01_with_text.jpg"
        );
    }

    #[tokio::test]
    async fn test_missing_out_dir_is_created() {
        let dir = TempDir::new().unwrap();
        let out_dir = dir.path().join("renders").join("2026-10");
        let renderer = RecordingRenderer::default();
        let output = make_job(out_dir.clone(), false)
            .run(&renderer, &OverlayPolicy::REEL_FARM)
            .await
            .unwrap();

        assert!(out_dir.is_dir());
        assert_eq!(output.video.parent(), Some(out_dir.as_path()));
    }
}
