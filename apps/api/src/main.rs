use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use reelfarm_api::config::Config;
use reelfarm_api::overlay::OverlayPolicy;
use reelfarm_api::routes::build_router;
use reelfarm_api::state::AppState;
use reelfarm_api::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so the log level is known.
    let config = Config::from_env()?;

    init_tracing(env!("CARGO_CRATE_NAME"), &config.rust_log);

    info!("Starting Reel Farm API v{}", env!("CARGO_PKG_VERSION"));

    let policy = OverlayPolicy::REEL_FARM;
    info!(
        "Overlay policy: {} chars/line, {}px @ {}px",
        policy.max_chars_per_line, policy.reference_font_px, policy.reference_height_px
    );

    let state = AppState {
        config: config.clone(),
        policy,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
