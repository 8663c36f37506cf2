//! OS signal handling.

use crate::lifecycle::Shutdown;

/// Trigger the shutdown coordinator when ctrl-c arrives.
///
/// Spawned once at startup; runs until the process exits.
pub async fn trigger_on_ctrl_c(shutdown: &Shutdown) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install ctrl-c handler");
        return;
    }
    tracing::info!("ctrl-c received, shutting down");
    shutdown.trigger();
}
