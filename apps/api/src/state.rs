use crate::config::Config;
use crate::overlay::OverlayPolicy;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Layout constants published to clients; identical to the renderer's.
    pub policy: OverlayPolicy,
}
