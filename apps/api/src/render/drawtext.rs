//! Builds the ffmpeg `drawtext` filter that burns overlay text into a video.
//!
//! Font size, colours, border and line spacing come from `OverlayPolicy`, the
//! same value the preview lays out with.

use std::path::{Path, PathBuf};

use crate::overlay::OverlayPolicy;

#[derive(Debug, Clone)]
pub struct DrawTextFilter {
    pub text_file: PathBuf,
    pub font_file: PathBuf,
    pub policy: OverlayPolicy,
}

impl DrawTextFilter {
    pub fn new(text_file: impl Into<PathBuf>, font_file: impl Into<PathBuf>, policy: OverlayPolicy) -> Self {
        Self {
            text_file: text_file.into(),
            font_file: font_file.into(),
            policy,
        }
    }

    /// The value passed to ffmpeg's `-vf`.
    ///
    /// `expansion=none` makes drawtext print the text file literally, so `%`
    /// and backslashes in hook text are drawn as typed.
    pub fn to_filter_arg(&self) -> String {
        let p = &self.policy;
        format!(
            "drawtext=textfile={}:fontfile={}:fontsize={}:fontcolor={}\
             :x=(w-text_w)/2:y=(h-text_h)/2:borderw={}:bordercolor={}\
             :text_align=center:line_spacing={}:expansion=none",
            escape_path(&self.text_file),
            escape_path(&self.font_file),
            p.reference_font_px,
            p.font_color,
            p.border_px,
            p.border_color,
            p.line_spacing_px,
        )
    }
}

/// Escapes a path for use as a filter option value.
///
/// `\`, `'` and `:` are filter-graph metacharacters and get a backslash.
fn escape_path(path: &Path) -> String {
    let raw = path.to_string_lossy();
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '\\' | '\'' | ':') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
