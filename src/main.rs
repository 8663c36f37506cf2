//! Navigation shell server.
//!
//! Serves a declarative route table: the root path mounts the primary
//! view, named paths mount their views, and the catch-all redirects
//! back to the root. The table comes from the built-in defaults or a
//! TOML config file given as the first argument, which is then watched
//! for hot reload.

use std::path::PathBuf;

use tokio::net::TcpListener;
use tokio::sync::mpsc;

use nav_shell::config::{load_config, watcher::ConfigWatcher, AppConfig};
use nav_shell::lifecycle::{signals, Shutdown};
use nav_shell::observability::{logging, metrics};
use nav_shell::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);

    // Defaults reproduce the declared route table; a file overrides them.
    let config = match &config_path {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    logging::init(&config.observability.log_level);

    tracing::info!("nav-shell v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        routes = config.routes.len(),
        views = config.views.len(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(
        address = %local_addr,
        "Listening for navigation requests"
    );

    // Watch the config file when one was given; otherwise the update
    // channel stays idle and the defaults run unchanged.
    let (_idle_tx, idle_rx) = mpsc::unbounded_channel();
    let (_watcher, config_updates) = match &config_path {
        Some(path) => {
            let (watcher, updates) = ConfigWatcher::new(path);
            (Some(watcher.run()?), updates)
        }
        None => (None, idle_rx),
    };

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::trigger_on_ctrl_c(&shutdown).await;
    });

    let server = HttpServer::new(config)?;
    server.run(listener, config_updates, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
