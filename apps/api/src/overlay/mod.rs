// Overlay text layout: greedy wrapping, font-size estimation and the reactive
// preview. The ffmpeg renderer in `crate::render` reads the same policy.

pub mod font_size;
pub mod handlers;
pub mod policy;
pub mod preview;
pub mod viewport;
pub mod wrap;

pub use font_size::{estimate_font_size, estimate_font_size_with};
pub use policy::{OverlayPolicy, TextStroke};
pub use preview::{
    render_on, render_once, ContainerMeasure, FixedHeight, OverlayLayer, OverlayPreview, PreviewFrame,
    PreviewState,
};
pub use viewport::{ResizeSubscription, Viewport};
pub use wrap::{wrap_text_to_lines, wrap_with_policy};
