use std::path::{Path, PathBuf};

use crate::render::RenderError;

const VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "mov", "avi", "mkv"];

fn is_video(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            VIDEO_EXTENSIONS
                .iter()
                .any(|v| v.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

/// Finds the first video under `dir`, depth-first in name order.
pub fn find_first_video(dir: &Path) -> Result<PathBuf, RenderError> {
    if !dir.is_dir() {
        return Err(RenderError::InputNotFound(dir.to_path_buf()));
    }
    search(dir)?.ok_or_else(|| RenderError::NoVideoFound(dir.to_path_buf()))
}

fn search(dir: &Path) -> Result<Option<PathBuf>, RenderError> {
    let mut entries = std::fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()?;
    entries.sort();

    for path in entries {
        if path.is_dir() {
            if let Some(found) = search(&path)? {
                return Ok(Some(found));
            }
        } else if is_video(&path) {
            return Ok(Some(path));
        }
    }
    Ok(None)
}
