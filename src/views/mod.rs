//! View registry subsystem.
//!
//! Views are opaque renderable units: the table references them by name
//! and the shell page mounts them by name. Their internals live outside
//! this service.

pub mod registry;

pub use registry::{ViewRef, ViewRegistry, ViewSpec};
