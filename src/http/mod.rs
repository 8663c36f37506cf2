//! HTTP surface of the navigation shell.
//!
//! # Data Flow
//! ```text
//! Navigation request (GET, any path)
//!     → server.rs (Axum setup, middleware, handler)
//!     → routing table (first match wins)
//!     → view match: shell.rs renders the mount page
//!     → redirect match: 307 + Location, client re-enters matching
//!
//! Introspection:
//!     /_nav/resolve?path=…  → full Resolution as JSON
//!     /_nav/routes          → the compiled table as JSON
//! ```

pub mod server;
pub mod shell;

pub use server::HttpServer;
