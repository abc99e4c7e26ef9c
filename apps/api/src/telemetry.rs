use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes structured logging for a binary.
///
/// `RUST_LOG` wins when set; otherwise this library and the calling binary
/// (`bin_target`, usually `env!("CARGO_CRATE_NAME")`) log at `default_level`.
pub fn init_tracing(bin_target: &str, default_level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={default_level},{bin_target}={default_level}",
                env!("CARGO_CRATE_NAME")
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
