//! Sector record types and validation.
//!
//! # Design Decisions
//! - `id` is empty (unassigned) or the canonical hyphenated UUID shape;
//!   nothing else deserializes
//! - `value` keeps its declared representation: a number stays a number,
//!   a numeric string stays a string — no silent coercion
//! - `color` is a free-form string; its format is not constrained here

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors produced while validating sector data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SectorError {
    /// The id was neither empty nor a canonical hyphenated UUID.
    #[error("malformed sector id '{0}': expected empty or xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx")]
    MalformedId(String),

    /// A textual value that does not parse as a number.
    #[error("sector value '{0}' is not numeric")]
    NonNumericValue(String),
}

/// Sector identifier: unassigned, or a UUID in its canonical
/// five-segment hyphenated form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SectorId(Option<Uuid>);

impl SectorId {
    /// The unassigned (empty) identifier.
    pub fn unassigned() -> Self {
        Self(None)
    }

    pub fn from_uuid(id: Uuid) -> Self {
        Self(Some(id))
    }

    pub fn is_unassigned(&self) -> bool {
        self.0.is_none()
    }

    pub fn as_uuid(&self) -> Option<Uuid> {
        self.0
    }
}

impl FromStr for SectorId {
    type Err = SectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self(None));
        }
        // Uuid::try_parse also accepts simple/braced/urn forms; the
        // canonical hyphenated form is the only 36-byte one, and it is
        // the only shape accepted here.
        if s.len() != 36 {
            return Err(SectorError::MalformedId(s.to_string()));
        }
        Uuid::try_parse(s)
            .map(|id| Self(Some(id)))
            .map_err(|_| SectorError::MalformedId(s.to_string()))
    }
}

impl TryFrom<String> for SectorId {
    type Error = SectorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<SectorId> for String {
    fn from(id: SectorId) -> Self {
        id.to_string()
    }
}

impl std::fmt::Display for SectorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(id) => write!(f, "{}", id.hyphenated()),
            None => Ok(()),
        }
    }
}

/// A sector value: a number, or a numeric string.
///
/// Both representations are preserved through serialization so that
/// downstream consumers see exactly what was declared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectorValue {
    Number(f64),
    Text(String),
}

impl SectorValue {
    /// The numeric reading of the value, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SectorValue::Number(n) => Some(*n),
            SectorValue::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// A passive labeled value record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    /// Unassigned, or UUID-shaped. Generation and uniqueness are not
    /// this type's concern.
    #[serde(default)]
    pub id: SectorId,
    /// Display label.
    pub name: String,
    /// Numeric value, possibly declared as a string.
    pub value: SectorValue,
    /// Color descriptor, format unconstrained.
    pub color: String,
}

impl Sector {
    /// Check the shape rules that serde alone cannot express: a textual
    /// value must be numeric.
    pub fn validate(&self) -> Result<(), SectorError> {
        if let SectorValue::Text(s) = &self.value {
            if s.trim().parse::<f64>().is_err() {
                return Err(SectorError::NonNumericValue(s.clone()));
            }
        }
        Ok(())
    }
}
