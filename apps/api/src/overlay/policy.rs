//! The single source of truth for overlay text layout constants.
//!
//! The browser preview and the ffmpeg burn-in read the same `OverlayPolicy`.
//! If the two ever disagree the preview visibly drifts from the rendered video,
//! so nothing in this crate hard-codes these numbers anywhere else.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Policy
// ────────────────────────────────────────────────────────────────────────────

/// Layout constants shared by the preview and the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverlayPolicy {
    /// Greedy wrap width, in characters, at the reference resolution.
    pub max_chars_per_line: usize,
    /// Frame height the renderer's font size is specified against.
    pub reference_height_px: u32,
    /// Glyph size the renderer burns in at `reference_height_px`.
    pub reference_font_px: u32,
    /// CSS line-height multiplier used by the preview.
    pub line_height: f32,
    /// Extra pixels between lines in the drawtext filter.
    pub line_spacing_px: u32,
    /// Outline width of the burned-in glyphs.
    pub border_px: u32,
    pub font_color: &'static str,
    pub border_color: &'static str,
    /// Font family stack for the preview; the first entry matches the renderer's font file.
    pub font_family: &'static str,
    /// Upstream cap on user-edited overlay text.
    pub max_text_chars: usize,
}

impl OverlayPolicy {
    /// The constants used by the production renderer (36px glyphs on a 1280px frame).
    pub const REEL_FARM: OverlayPolicy = OverlayPolicy {
        max_chars_per_line: 35,
        reference_height_px: 1280,
        reference_font_px: 36,
        line_height: 1.4,
        line_spacing_px: 16,
        border_px: 3,
        font_color: "white",
        border_color: "black",
        font_family: "\"TikTokDisplay-Medium\", Arial, sans-serif",
        max_text_chars: 500,
    };
}

impl Default for OverlayPolicy {
    fn default() -> Self {
        Self::REEL_FARM
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Preview stroke
// ────────────────────────────────────────────────────────────────────────────

/// Legibility outline applied by the preview: four 1px black offsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStroke {
    pub offset_px: u32,
    pub color: String,
}

impl TextStroke {
    pub fn for_policy(policy: &OverlayPolicy) -> Self {
        Self {
            offset_px: 1,
            color: policy.border_color.to_string(),
        }
    }

    /// The equivalent CSS `text-shadow` value.
    pub fn css_text_shadow(&self) -> String {
        let o = self.offset_px;
        let c = &self.color;
        format!("{o}px {o}px 0px {c}, {o}px -{o}px 0px {c}, -{o}px {o}px 0px {c}, -{o}px -{o}px 0px {c}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reel_farm_constants_match_renderer() {
        let p = OverlayPolicy::REEL_FARM;
        assert_eq!(p.max_chars_per_line, 35);
        assert_eq!(p.reference_height_px, 1280);
        assert_eq!(p.reference_font_px, 36);
        assert_eq!(p.max_text_chars, 500);
        assert_eq!(OverlayPolicy::default(), p);
    }

    #[test]
    fn test_css_text_shadow_has_four_offsets() {
        let stroke = TextStroke::for_policy(&OverlayPolicy::REEL_FARM);
        assert_eq!(
            stroke.css_text_shadow(),
            "1px 1px 0px black, 1px -1px 0px black, -1px 1px 0px black, -1px -1px 0px black"
        );
    }
}
