//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → compiled into the live route table
//!
//! On reload signal:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → atomic swap of the compiled table
//! ```
//!
//! # Design Decisions
//! - The built-in defaults ARE the route table: a config file is only
//!   needed to override them
//! - Config is immutable once loaded; changes require a full reload
//! - Validation separates syntactic (serde) from semantic checks and
//!   reports every violation, not just the first

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, ConfigError};
pub use schema::{AppConfig, ListenerConfig, ObservabilityConfig, RouteConfig, ViewConfig};
pub use validation::{validate_config, ValidationError};
