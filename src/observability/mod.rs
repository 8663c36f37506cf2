//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log output (stdout, filtered by RUST_LOG / config level)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Request IDs flow through middleware and logs
//! - Metric updates are cheap (atomic increments)
//! - The metrics endpoint is opt-in via config

pub mod logging;
pub mod metrics;
