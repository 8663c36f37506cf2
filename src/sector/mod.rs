//! Sector data model.
//!
//! A passive labeled value record: identifier, name, numeric-or-textual
//! value, and a color descriptor. How sectors are produced or consumed
//! is defined elsewhere; this module only pins down the shape and its
//! validation rules.

pub mod types;

pub use types::{Sector, SectorError, SectorId, SectorValue};
