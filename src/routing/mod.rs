//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation event (URL path)
//!     → table.rs (ordered scan, first match wins)
//!     → pattern.rs (evaluate one pattern against the path)
//!     → resolver.rs (chase redirects until a view is reached)
//!     → Return: Resolution or explicit RouteError
//!
//! Table Compilation (at startup and on reload):
//!     RouteConfig[]
//!     → Parse pattern strings (literal / :name segments / catch-all)
//!     → Preserve declared order
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Table compiled at startup, immutable at runtime; reloads swap it whole
//! - Declared order IS the priority: first match wins, catch-all last
//! - No regex; segment comparison only
//! - Deterministic: same path always resolves to the same destination
//! - Explicit NoMatch / RedirectLoop errors rather than silent defaults

pub mod pattern;
pub mod resolver;
pub mod table;

pub use pattern::{PathPattern, PatternError};
pub use resolver::{resolve, Resolution, MAX_REDIRECT_HOPS};
pub use table::{RouteEntry, RouteMatch, RouteTable, RouteTarget};

use thiserror::Error;

/// Errors that can occur while compiling or resolving routes.
#[derive(Debug, Error)]
pub enum RouteError {
    /// A pattern string could not be parsed.
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// A route declares both a view and a redirect.
    #[error("route '{route}' declares both a view and a redirect")]
    AmbiguousTarget { route: String },

    /// A route declares neither a view nor a redirect.
    #[error("route '{route}' declares neither a view nor a redirect")]
    MissingTarget { route: String },

    /// No entry matched the path. Unreachable on a validated table,
    /// which always ends in a catch-all.
    #[error("no route matched path '{path}'")]
    NoMatch { path: String },

    /// Redirects never reached a view.
    #[error("redirect loop resolving '{path}' (gave up after {hops} hops)")]
    RedirectLoop { path: String, hops: usize },
}

/// Result type for routing operations.
pub type RouteResult<T> = Result<T, RouteError>;
