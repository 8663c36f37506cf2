//! Application lifecycle: shutdown coordination.
//!
//! # Design Decisions
//! - One broadcast channel; every long-running task subscribes
//! - ctrl-c is just another trigger of the same signal

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
