//! Linear font-size estimate for the preview.
//!
//! The renderer burns glyphs at a fixed size for a fixed frame height, so the
//! preview scales that size by `container_height / reference_height` and floors
//! the result. No clamping is applied.

use crate::overlay::policy::OverlayPolicy;

/// Estimated preview font size for a container of `container_height_px`.
///
/// Non-finite, zero and negative heights all yield `0`.
pub fn estimate_font_size(container_height_px: f64) -> u32 {
    estimate_font_size_with(container_height_px, &OverlayPolicy::REEL_FARM)
}

/// Same as [`estimate_font_size`] with an explicit policy.
pub fn estimate_font_size_with(container_height_px: f64, policy: &OverlayPolicy) -> u32 {
    if !container_height_px.is_finite() || container_height_px <= 0.0 {
        return 0;
    }
    if policy.reference_height_px == 0 {
        return 0;
    }
    let scaled = (container_height_px / f64::from(policy.reference_height_px))
        * f64::from(policy.reference_font_px);
    // `as` saturates at u32::MAX for absurd heights.
    scaled.floor() as u32
}
