//! Path pattern parsing and matching.
//!
//! # Responsibilities
//! - Parse pattern strings into their compiled form
//! - Match a single pattern against a normalized path
//! - Capture `:name` segment parameters
//!
//! # Design Decisions
//! - Three pattern kinds: literal path, `:name` segments, `*` catch-all
//! - Matching is case-sensitive, whole-segment only
//! - No regex; patterns are split once at parse time

use std::collections::BTreeMap;

use thiserror::Error;

/// Parameters captured from `:name` segments during a match.
pub type Params = BTreeMap<String, String>;

/// Errors produced while parsing a pattern string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    /// The pattern string was empty.
    #[error("empty route pattern")]
    Empty,

    /// A non-wildcard pattern must start with '/'.
    #[error("pattern '{0}' does not start with '/'")]
    MissingLeadingSlash(String),

    /// A ':' segment with no name after it.
    #[error("pattern '{0}' has an unnamed ':' segment")]
    UnnamedParam(String),

    /// '*' is only valid as the entire pattern.
    #[error("pattern '{0}' embeds '*'; the catch-all pattern is exactly \"*\"")]
    EmbeddedWildcard(String),
}

/// One segment of a parsed non-wildcard pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the path segment exactly.
    Fixed(String),
    /// Matches any single path segment, capturing it under this name.
    Param(String),
}

/// A compiled URL path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPattern {
    /// Exact path, e.g. `/` or `/task-2`.
    Literal(String),
    /// Path with `:name` captures, e.g. `/sectors/:id`.
    Named(Vec<Segment>),
    /// Matches every path. Declared as `*`; must be the last table entry.
    CatchAll,
}

impl PathPattern {
    /// Parse a pattern string into its compiled form.
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        if raw.is_empty() {
            return Err(PatternError::Empty);
        }
        if raw == "*" {
            return Ok(PathPattern::CatchAll);
        }
        if raw.contains('*') {
            return Err(PatternError::EmbeddedWildcard(raw.to_string()));
        }
        if !raw.starts_with('/') {
            return Err(PatternError::MissingLeadingSlash(raw.to_string()));
        }

        if !raw.contains(':') {
            return Ok(PathPattern::Literal(normalize_path(raw)));
        }

        let mut segments = Vec::new();
        for part in raw.split('/').filter(|s| !s.is_empty()) {
            if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(PatternError::UnnamedParam(raw.to_string()));
                }
                segments.push(Segment::Param(name.to_string()));
            } else {
                segments.push(Segment::Fixed(part.to_string()));
            }
        }
        Ok(PathPattern::Named(segments))
    }

    /// Evaluate this pattern against a normalized path.
    ///
    /// Returns captured parameters on a match, `None` otherwise.
    /// The catch-all matches every input by definition.
    pub fn matches(&self, path: &str) -> Option<Params> {
        match self {
            PathPattern::Literal(expected) => (path == expected).then(Params::new),
            PathPattern::Named(segments) => {
                let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
                if parts.len() != segments.len() {
                    return None;
                }
                let mut params = Params::new();
                for (segment, part) in segments.iter().zip(&parts) {
                    match segment {
                        Segment::Fixed(expected) => {
                            if part != expected {
                                return None;
                            }
                        }
                        Segment::Param(name) => {
                            params.insert(name.clone(), (*part).to_string());
                        }
                    }
                }
                Some(params)
            }
            PathPattern::CatchAll => Some(Params::new()),
        }
    }

    /// True for the wildcard catch-all pattern.
    pub fn is_catch_all(&self) -> bool {
        matches!(self, PathPattern::CatchAll)
    }
}

/// Normalize a navigation path before matching.
///
/// The empty string is root-relative and becomes `/`; a missing leading
/// slash is added; trailing slashes are insignificant except on the root.
pub fn normalize_path(path: &str) -> String {
    if path.is_empty() {
        return "/".to_string();
    }
    let mut normalized = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };
    while normalized.len() > 1 && normalized.ends_with('/') {
        normalized.pop();
    }
    normalized
}
