use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::overlay::font_size::estimate_font_size_with;
use crate::overlay::policy::OverlayPolicy;
use crate::overlay::preview::{render_once, PreviewFrame};
use crate::overlay::wrap::wrap_with_policy;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LayoutRequest {
    pub text: String,
    pub container_height: f64,
}

#[derive(Debug, Serialize)]
pub struct LayoutResponse {
    pub lines: Vec<String>,
    pub font_size_px: u32,
    pub line_height: f32,
    pub max_chars_per_line: usize,
}

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub video_url: Option<String>,
    #[serde(default)]
    pub overlay_text: String,
    pub container_height: f64,
}

fn check_text_len(text: &str, policy: &OverlayPolicy) -> Result<(), AppError> {
    let len = text.chars().count();
    if len > policy.max_text_chars {
        return Err(AppError::Validation(format!(
            "overlay text is {len} characters; the limit is {}",
            policy.max_text_chars
        )));
    }
    Ok(())
}

/// GET /api/v1/overlay/policy
pub async fn handle_get_policy(State(state): State<AppState>) -> Json<OverlayPolicy> {
    Json(state.policy)
}

/// POST /api/v1/overlay/layout
pub async fn handle_layout(
    State(state): State<AppState>,
    Json(req): Json<LayoutRequest>,
) -> Result<Json<LayoutResponse>, AppError> {
    check_text_len(&req.text, &state.policy)?;
    Ok(Json(LayoutResponse {
        lines: wrap_with_policy(&req.text, &state.policy),
        font_size_px: estimate_font_size_with(req.container_height, &state.policy),
        line_height: state.policy.line_height,
        max_chars_per_line: state.policy.max_chars_per_line,
    }))
}

/// POST /api/v1/overlay/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    Json(req): Json<PreviewRequest>,
) -> Result<Json<PreviewFrame>, AppError> {
    check_text_len(&req.overlay_text, &state.policy)?;
    let video_url = req.video_url.filter(|url| !url.trim().is_empty());
    Ok(Json(render_once(
        state.policy,
        video_url,
        &req.overlay_text,
        req.container_height,
    )))
}
