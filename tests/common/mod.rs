//! Shared utilities for integration testing.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::sync::mpsc;

use nav_shell::config::AppConfig;
use nav_shell::lifecycle::Shutdown;
use nav_shell::HttpServer;

/// A running shell instance under test.
pub struct TestShell {
    pub addr: SocketAddr,
    /// Feed config updates to the live server, as the watcher would.
    pub updates: mpsc::UnboundedSender<AppConfig>,
    shutdown: Shutdown,
}

impl TestShell {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for TestShell {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the real server on an ephemeral port.
///
/// The listener is bound before the task spawns, so requests can be
/// made immediately.
pub async fn spawn_shell(config: AppConfig) -> TestShell {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let (updates_tx, updates_rx) = mpsc::unbounded_channel();
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    let server = HttpServer::new(config).unwrap();
    tokio::spawn(async move {
        let _ = server.run(listener, updates_rx, server_shutdown).await;
    });

    TestShell {
        addr,
        updates: updates_tx,
        shutdown,
    }
}

/// A client that does not follow redirects, for asserting on them.
#[allow(dead_code)]
pub fn manual_redirect_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}
