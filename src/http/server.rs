//! HTTP server setup and navigation handling.
//!
//! # Responsibilities
//! - Create the Axum router with the navigation and introspection handlers
//! - Wire up middleware (timeout, request ID, tracing)
//! - Dispatch navigation requests to the route table
//! - Swap the compiled table atomically when config updates arrive
//! - Serve with graceful shutdown

use std::sync::Arc;
use std::time::{Duration, Instant};

use arc_swap::ArcSwap;
use axum::{
    body::Body,
    extract::{Query, State},
    http::{Request, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{any, get},
    Json, Router,
};
use serde::Deserialize;
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::http::shell;
use crate::observability::metrics;
use crate::routing::{resolve, RouteError, RouteTable, RouteTarget};
use crate::views::ViewRegistry;

/// The compiled navigation state, swapped as one unit on reload.
#[derive(Debug)]
pub struct NavState {
    pub table: RouteTable,
    pub views: ViewRegistry,
}

impl NavState {
    /// Compile a validated config into the runtime state.
    pub fn compile(config: &AppConfig) -> Result<Self, RouteError> {
        Ok(Self {
            table: RouteTable::from_config(&config.routes)?,
            views: ViewRegistry::from_config(&config.views),
        })
    }
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    nav: Arc<ArcSwap<NavState>>,
}

/// HTTP server for the navigation shell.
pub struct HttpServer {
    router: Router,
    nav: Arc<ArcSwap<NavState>>,
}

impl HttpServer {
    /// Create a new server from a validated configuration.
    pub fn new(config: AppConfig) -> Result<Self, RouteError> {
        let nav = Arc::new(ArcSwap::from_pointee(NavState::compile(&config)?));
        let state = AppState { nav: nav.clone() };
        let router = Self::build_router(&config, state);
        Ok(Self { router, nav })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .route("/_nav/resolve", get(resolve_handler))
            .route("/_nav/routes", get(routes_handler))
            .route("/", any(navigate))
            .route("/{*path}", any(navigate))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Config updates arriving on the channel replace the live table
    /// atomically; in-flight requests keep the table they loaded.
    pub async fn run(
        self,
        listener: TcpListener,
        mut config_updates: mpsc::UnboundedReceiver<AppConfig>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        let nav = self.nav.clone();
        tokio::spawn(async move {
            while let Some(new_config) = config_updates.recv().await {
                match NavState::compile(&new_config) {
                    Ok(state) => {
                        let routes = state.table.entries().len();
                        nav.store(Arc::new(state));
                        tracing::info!(routes, "Route table swapped");
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Rejected config update; keeping current table");
                    }
                }
            }
        });

        let app = self.router.into_make_service();
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Main navigation handler: one matching step per request.
///
/// A redirect entry answers 307 so the client re-enters matching, which
/// is the route table's contract; server-side chasing is available on
/// the introspection endpoint.
async fn navigate(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start = Instant::now();
    let path = request.uri().path().to_string();
    let nav = state.nav.load();

    let Some(hit) = nav.table.match_path(&path) else {
        // Unreachable on a validated table; the catch-all is exhaustive.
        tracing::warn!(path = %path, "No route matched");
        metrics::record_navigation("no_match", "none", start);
        return (StatusCode::NOT_FOUND, "No matching route").into_response();
    };

    let route = hit.entry.name();
    match hit.entry.target() {
        RouteTarget::Redirect(to) => {
            tracing::debug!(path = %path, to = %to, route, "Redirecting");
            metrics::record_navigation("redirect", route, start);
            Redirect::temporary(to).into_response()
        }
        RouteTarget::View(view) => match nav.views.get(view) {
            Some(spec) => {
                tracing::debug!(path = %path, view = %view, route, "Mounting view");
                metrics::record_navigation("view", route, start);
                Html(shell::render(spec, &path)).into_response()
            }
            None => {
                // Validation keeps this out of accepted configs.
                tracing::error!(view = %view, route, "Route targets unregistered view");
                metrics::record_navigation("error", route, start);
                (StatusCode::INTERNAL_SERVER_ERROR, "View not registered").into_response()
            }
        },
    }
}

#[derive(Debug, Deserialize)]
struct ResolveQuery {
    path: String,
}

/// Full resolution with redirects chased server-side.
async fn resolve_handler(
    State(state): State<AppState>,
    Query(query): Query<ResolveQuery>,
) -> Response {
    let nav = state.nav.load();
    match resolve(&nav.table, &query.path) {
        Ok(resolution) => Json(resolution).into_response(),
        Err(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()).into_response(),
    }
}

/// The compiled table, in declared order.
async fn routes_handler(State(state): State<AppState>) -> Response {
    let nav = state.nav.load();
    let summaries: Vec<_> = nav.table.entries().iter().map(|e| e.summary()).collect();
    Json(summaries).into_response()
}
