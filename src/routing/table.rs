//! The compiled route table.
//!
//! # Responsibilities
//! - Compile route configuration into immutable entries
//! - Scan entries in declared order; first match wins
//! - Return the matched entry with captured parameters
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) ordered scan; n is the declared table, typically tiny
//! - Target is an enum: a view or a redirect, never both

use serde::Serialize;

use crate::config::RouteConfig;
use crate::routing::pattern::{normalize_path, Params, PathPattern};
use crate::routing::RouteError;
use crate::views::ViewRef;

/// Destination of a matched route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteTarget {
    /// Mount the named view.
    View(ViewRef),
    /// Re-enter matching at this path.
    Redirect(String),
}

/// A single compiled route.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    /// Route identifier for logging/metrics.
    name: String,
    /// The pattern string as declared in config.
    raw_pattern: String,
    /// Compiled pattern.
    pattern: PathPattern,
    /// Where a match leads.
    target: RouteTarget,
}

impl RouteEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn raw_pattern(&self) -> &str {
        &self.raw_pattern
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn target(&self) -> &RouteTarget {
        &self.target
    }

    /// Serializable form for the introspection endpoint.
    pub fn summary(&self) -> RouteSummary {
        RouteSummary {
            name: self.name.clone(),
            pattern: self.raw_pattern.clone(),
            target: self.target.clone(),
        }
    }
}

/// Introspection view of a route entry.
#[derive(Debug, Clone, Serialize)]
pub struct RouteSummary {
    pub name: String,
    pub pattern: String,
    pub target: RouteTarget,
}

/// Outcome of matching a path against the table.
#[derive(Debug)]
pub struct RouteMatch<'a> {
    /// The first entry whose pattern matched.
    pub entry: &'a RouteEntry,
    /// Parameters captured from `:name` segments.
    pub params: Params,
}

/// The ordered, immutable route table.
///
/// Entries keep their declared order; evaluation stops at the first
/// matching pattern. A validated table ends in a catch-all, making
/// resolution total.
#[derive(Debug)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Compile a table from route configuration, preserving order.
    pub fn from_config(routes: &[RouteConfig]) -> Result<Self, RouteError> {
        let mut entries = Vec::with_capacity(routes.len());
        for route in routes {
            let pattern = PathPattern::parse(&route.pattern)?;
            let target = match (&route.view, &route.redirect) {
                (Some(view), None) => RouteTarget::View(ViewRef::new(view)),
                (None, Some(redirect)) => RouteTarget::Redirect(redirect.clone()),
                (Some(_), Some(_)) => {
                    return Err(RouteError::AmbiguousTarget {
                        route: route.name.clone(),
                    })
                }
                (None, None) => {
                    return Err(RouteError::MissingTarget {
                        route: route.name.clone(),
                    })
                }
            };
            entries.push(RouteEntry {
                name: route.name.clone(),
                raw_pattern: route.pattern.clone(),
                pattern,
                target,
            });
        }
        Ok(Self { entries })
    }

    /// Find the first entry matching the given path.
    ///
    /// The path is normalized before matching (empty string is the root).
    pub fn match_path(&self, path: &str) -> Option<RouteMatch<'_>> {
        let normalized = normalize_path(path);
        self.entries.iter().find_map(|entry| {
            entry
                .pattern
                .matches(&normalized)
                .map(|params| RouteMatch { entry, params })
        })
    }

    /// The compiled entries in declared order.
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn default_table() -> RouteTable {
        RouteTable::from_config(&AppConfig::default().routes).unwrap()
    }

    #[test]
    fn test_declared_order_preserved() {
        let table = default_table();
        let patterns: Vec<&str> = table.entries().iter().map(|e| e.raw_pattern()).collect();
        assert_eq!(patterns, vec!["/", "/task-2", "*"]);
        assert!(table.entries().last().unwrap().pattern().is_catch_all());
    }

    #[test]
    fn test_first_match_wins() {
        // A shadowing literal before a named pattern: the literal must win.
        let routes = vec![
            RouteConfig {
                name: "pinned".into(),
                pattern: "/sectors/alpha".into(),
                view: Some("task-one".into()),
                redirect: None,
            },
            RouteConfig {
                name: "by-id".into(),
                pattern: "/sectors/:id".into(),
                view: Some("task-two".into()),
                redirect: None,
            },
        ];
        let table = RouteTable::from_config(&routes).unwrap();

        let hit = table.match_path("/sectors/alpha").unwrap();
        assert_eq!(hit.entry.name(), "pinned");

        let hit = table.match_path("/sectors/beta").unwrap();
        assert_eq!(hit.entry.name(), "by-id");
        assert_eq!(hit.params.get("id").map(String::as_str), Some("beta"));
    }

    #[test]
    fn test_empty_path_is_root() {
        let table = default_table();
        let hit = table.match_path("").unwrap();
        assert_eq!(hit.entry.raw_pattern(), "/");
    }

    #[test]
    fn test_unmatched_without_catch_all_is_explicit() {
        let routes = vec![RouteConfig {
            name: "root".into(),
            pattern: "/".into(),
            view: Some("task-one".into()),
            redirect: None,
        }];
        let table = RouteTable::from_config(&routes).unwrap();
        assert!(table.match_path("/missing").is_none());
    }

    #[test]
    fn test_target_mutual_exclusivity() {
        let both = vec![RouteConfig {
            name: "broken".into(),
            pattern: "/".into(),
            view: Some("task-one".into()),
            redirect: Some("/elsewhere".into()),
        }];
        assert!(matches!(
            RouteTable::from_config(&both),
            Err(RouteError::AmbiguousTarget { .. })
        ));

        let neither = vec![RouteConfig {
            name: "broken".into(),
            pattern: "/".into(),
            view: None,
            redirect: None,
        }];
        assert!(matches!(
            RouteTable::from_config(&neither),
            Err(RouteError::MissingTarget { .. })
        ));
    }
}
