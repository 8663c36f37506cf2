//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! navigation shell. All types derive Serde traits for deserialization
//! from config files; the defaults reproduce the application's declared
//! route table exactly.

use serde::{Deserialize, Serialize};

/// Root configuration for the navigation shell.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// The ordered route table. First match wins; the catch-all entry
    /// must be last.
    pub routes: Vec<RouteConfig>,

    /// Views the route table may target.
    pub views: Vec<ViewConfig>,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::default(),
            routes: default_routes(),
            views: default_views(),
            timeouts: TimeoutConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// The application's declared route table: primary view on the root,
/// secondary view on its named path, catch-all redirect back to the
/// root. Order is significant.
fn default_routes() -> Vec<RouteConfig> {
    vec![
        RouteConfig {
            name: "root".to_string(),
            pattern: "/".to_string(),
            view: Some("task-one".to_string()),
            redirect: None,
        },
        RouteConfig {
            name: "task-2".to_string(),
            pattern: "/task-2".to_string(),
            view: Some("task-two".to_string()),
            redirect: None,
        },
        RouteConfig {
            name: "fallback".to_string(),
            pattern: "*".to_string(),
            view: None,
            redirect: Some("/".to_string()),
        },
    ]
}

fn default_views() -> Vec<ViewConfig> {
    vec![
        ViewConfig {
            name: "task-one".to_string(),
            title: Some("Task One".to_string()),
        },
        ViewConfig {
            name: "task-two".to_string(),
            title: Some("Task Two".to_string()),
        },
    ]
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// One route table entry.
///
/// Patterns are a literal path (`/task-2`), a path with `:name`
/// captures (`/sectors/:id`), or the catch-all `*`. Exactly one of
/// `view` and `redirect` must be set.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Route identifier for logging/metrics.
    pub name: String,

    /// Path pattern to match.
    pub pattern: String,

    /// View to mount on a match.
    #[serde(default)]
    pub view: Option<String>,

    /// Path to redirect to on a match.
    #[serde(default)]
    pub redirect: Option<String>,
}

/// A mountable view. Internals are out of scope; the shell only needs
/// a name and a title.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ViewConfig {
    /// Unique view name, referenced by route targets.
    pub name: String,

    /// Shell page title (defaults to the name).
    #[serde(default)]
    pub title: Option<String>,
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
