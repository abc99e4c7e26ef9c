//! Reactive overlay preview.
//!
//! A mounted `OverlayPreview` owns two derived values over independent inputs:
//! - wrapped lines, recomputed whenever the overlay text changes;
//! - the estimated font size, recomputed whenever a video is shown and on every
//!   viewport resize while one is shown.
//!
//! Mounting registers a resize listener; dropping the preview releases it.
//! `render` turns the current state into a purely presentational `PreviewFrame`.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use serde::Serialize;
use tracing::debug;

use crate::overlay::font_size::estimate_font_size_with;
use crate::overlay::policy::{OverlayPolicy, TextStroke};
use crate::overlay::viewport::{ResizeSubscription, Viewport};
use crate::overlay::wrap::wrap_with_policy;

pub const PLACEHOLDER_MESSAGE: &str = "Select an avatar to preview";

// ────────────────────────────────────────────────────────────────────────────
// Inputs
// ────────────────────────────────────────────────────────────────────────────

/// Something whose rendered pixel height can be measured, like a DOM node's `offsetHeight`.
pub trait ContainerMeasure {
    fn offset_height(&self) -> f64;
}

/// A container with a known, fixed height.
#[derive(Debug, Clone, Copy)]
pub struct FixedHeight(pub f64);

impl ContainerMeasure for FixedHeight {
    fn offset_height(&self) -> f64 {
        self.0
    }
}

/// The two externally driven states of a preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewState {
    NoVideoSelected,
    PreviewingVideo {
        video_url: String,
        overlay_text: String,
    },
}

// ────────────────────────────────────────────────────────────────────────────
// Output
// ────────────────────────────────────────────────────────────────────────────

/// The text layer drawn over the video.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayLayer {
    /// Centred, stacked top to bottom.
    pub lines: Vec<String>,
    pub font_size_px: u32,
    pub line_height: f32,
    pub font_family: String,
    pub color: String,
    pub stroke: TextStroke,
    pub text_shadow: String,
    /// Always `false`: the overlay never takes input meant for the video controls.
    pub pointer_events: bool,
}

/// What the preview shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PreviewFrame {
    Placeholder {
        message: String,
    },
    Video {
        video_url: String,
        /// `None` when there is no text to draw.
        overlay: Option<OverlayLayer>,
    },
}

impl OverlayLayer {
    fn build(lines: &[String], font_size_px: u32, policy: &OverlayPolicy) -> Option<Self> {
        if lines.is_empty() {
            return None;
        }
        let stroke = TextStroke::for_policy(policy);
        Some(Self {
            lines: lines.to_vec(),
            font_size_px,
            line_height: policy.line_height,
            font_family: policy.font_family.to_string(),
            color: policy.font_color.to_string(),
            text_shadow: stroke.css_text_shadow(),
            stroke,
            pointer_events: false,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Preview
// ────────────────────────────────────────────────────────────────────────────

struct PreviewCore {
    policy: OverlayPolicy,
    container: Rc<dyn ContainerMeasure>,
    video_url: Option<String>,
    overlay_text: String,
    lines: Vec<String>,
    /// `None` until a video has been shown and measured.
    font_size_px: Option<u32>,
    font_recomputations: u64,
    line_recomputations: u64,
}

impl PreviewCore {
    fn recompute_lines(&mut self) {
        self.lines = wrap_with_policy(&self.overlay_text, &self.policy);
        self.line_recomputations += 1;
    }

    /// Measures the container; a no-op while no video is selected.
    fn remeasure(&mut self) {
        if self.video_url.is_none() {
            return;
        }
        let height = self.container.offset_height();
        let size = estimate_font_size_with(height, &self.policy);
        self.font_size_px = Some(size);
        self.font_recomputations += 1;
        debug!(height, font_size_px = size, "preview font size recomputed");
    }
}

/// A mounted preview. Dropping it unmounts and releases the resize listener.
pub struct OverlayPreview {
    core: Rc<RefCell<PreviewCore>>,
    _resize: ResizeSubscription,
}

impl OverlayPreview {
    pub fn mount(
        viewport: &Viewport,
        container: Rc<dyn ContainerMeasure>,
        policy: OverlayPolicy,
        video_url: Option<String>,
        overlay_text: impl Into<String>,
    ) -> Self {
        let mut core = PreviewCore {
            policy,
            container,
            video_url,
            overlay_text: overlay_text.into(),
            lines: Vec::new(),
            font_size_px: None,
            font_recomputations: 0,
            line_recomputations: 0,
        };
        core.recompute_lines();
        core.remeasure();

        let core = Rc::new(RefCell::new(core));
        let weak: Weak<RefCell<PreviewCore>> = Rc::downgrade(&core);
        let resize = viewport.on_resize(move || {
            if let Some(core) = weak.upgrade() {
                core.borrow_mut().remeasure();
            }
        });

        Self {
            core,
            _resize: resize,
        }
    }

    /// Shows `video_url`; the container is re-measured if the source changed.
    pub fn select_video(&self, video_url: impl Into<String>) {
        let video_url = video_url.into();
        let mut core = self.core.borrow_mut();
        if core.video_url.as_deref() == Some(video_url.as_str()) {
            return;
        }
        core.video_url = Some(video_url);
        core.remeasure();
    }

    pub fn clear_video(&self) {
        self.core.borrow_mut().video_url = None;
    }

    pub fn set_overlay_text(&self, overlay_text: impl Into<String>) {
        let overlay_text = overlay_text.into();
        let mut core = self.core.borrow_mut();
        if core.overlay_text == overlay_text {
            return;
        }
        core.overlay_text = overlay_text;
        core.recompute_lines();
    }

    pub fn state(&self) -> PreviewState {
        let core = self.core.borrow();
        match &core.video_url {
            None => PreviewState::NoVideoSelected,
            Some(url) => PreviewState::PreviewingVideo {
                video_url: url.clone(),
                overlay_text: core.overlay_text.clone(),
            },
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.core.borrow().lines.clone()
    }

    pub fn font_size_px(&self) -> Option<u32> {
        self.core.borrow().font_size_px
    }

    pub fn font_recomputations(&self) -> u64 {
        self.core.borrow().font_recomputations
    }

    pub fn line_recomputations(&self) -> u64 {
        self.core.borrow().line_recomputations
    }

    pub fn render(&self) -> PreviewFrame {
        let core = self.core.borrow();
        match &core.video_url {
            None => PreviewFrame::Placeholder {
                message: PLACEHOLDER_MESSAGE.to_string(),
            },
            Some(url) => PreviewFrame::Video {
                video_url: url.clone(),
                overlay: OverlayLayer::build(
                    &core.lines,
                    core.font_size_px.unwrap_or_default(),
                    &core.policy,
                ),
            },
        }
    }
}

/// Mounts a preview over a fixed-height container, renders one frame and unmounts.
pub fn render_once(
    policy: OverlayPolicy,
    video_url: Option<String>,
    overlay_text: &str,
    container_height: f64,
) -> PreviewFrame {
    render_on(&Viewport::new(), policy, video_url, overlay_text, container_height)
}

/// `render_once` against an existing viewport. The preview is unmounted
/// before returning, so `viewport` is left with the listeners it had.
pub fn render_on(
    viewport: &Viewport,
    policy: OverlayPolicy,
    video_url: Option<String>,
    overlay_text: &str,
    container_height: f64,
) -> PreviewFrame {
    let preview = OverlayPreview::mount(
        viewport,
        Rc::new(FixedHeight(container_height)),
        policy,
        video_url,
        overlay_text,
    );
    preview.render()
}
