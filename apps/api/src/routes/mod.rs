pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::overlay::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/overlay/policy", get(handlers::handle_get_policy))
        .route("/api/v1/overlay/layout", post(handlers::handle_layout))
        .route("/api/v1/overlay/preview", post(handlers::handle_preview))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::overlay::OverlayPolicy;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use std::path::PathBuf;
    use tower::ServiceExt;

    fn make_state() -> AppState {
        AppState {
            config: Config {
                port: 0,
                rust_log: "debug".to_string(),
                ffmpeg_bin: "ffmpeg".to_string(),
                overlay_font_file: PathBuf::from("./TikTokDisplay-Medium.ttf"),
                render_work_dir: std::env::temp_dir(),
            },
            policy: OverlayPolicy::REEL_FARM,
        }
    }

    async fn send(method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };
        let response = build_router(make_state())
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_policy_publishes_shared_constants() {
        let (status, body) = send(Method::GET, "/api/v1/overlay/policy", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["max_chars_per_line"], 35);
        assert_eq!(body["reference_height_px"], 1280);
        assert_eq!(body["reference_font_px"], 36);
    }

    #[tokio::test]
    async fn test_layout() {
        let (status, body) = send(
            Method::POST,
            "/api/v1/overlay/layout",
            Some(json!({
                "text": "I wish someone told me this sooner...",
                "container_height": 640.0
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["lines"],
            json!(["I wish someone told me this", "sooner..."])
        );
        assert_eq!(body["font_size_px"], 18);
    }

    #[tokio::test]
    async fn test_layout_rejects_text_over_limit() {
        let (status, body) = send(
            Method::POST,
            "/api/v1/overlay/layout",
            Some(json!({ "text": "a".repeat(501), "container_height": 640.0 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_preview_without_video_is_placeholder() {
        let (status, body) = send(
            Method::POST,
            "/api/v1/overlay/preview",
            Some(json!({ "video_url": null, "overlay_text": "hi", "container_height": 640.0 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["kind"], "placeholder");
    }

    #[tokio::test]
    async fn test_preview_with_video() {
        let (status, body) = send(
            Method::POST,
            "/api/v1/overlay/preview",
            Some(json!({
                "video_url": "https://cdn.example.com/a.mp4",
                "overlay_text": "hi",
                "container_height": 1280.0
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["kind"], "video");
        assert_eq!(body["overlay"]["font_size_px"], 36);
        assert_eq!(body["overlay"]["pointer_events"], false);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, body) = send(Method::GET, "/user", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
