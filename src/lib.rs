//! Navigation shell library.
//!
//! A static, ordered route table maps URL paths to views or redirects;
//! an HTTP server resolves navigation events against it, first match
//! wins, catch-all last.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod sector;
pub mod views;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
