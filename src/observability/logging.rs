//! Structured logging setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configured level applies to
/// this crate and `tower_http`.
pub fn init(log_level: &str) {
    let fallback = format!("nav_shell={log_level},tower_http={log_level}");
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&fallback)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
