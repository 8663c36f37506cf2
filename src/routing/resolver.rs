//! First-match-wins resolution with redirect chasing.
//!
//! # Responsibilities
//! - Resolve a navigation path to the view that should be mounted
//! - Re-invoke matching for redirect targets, recording each hop
//! - Bound redirect chains so resolution always terminates
//!
//! # Design Decisions
//! - Resolution is a pure function of (table, path)
//! - Hop limit guards unvalidated tables; validation rules loops out
//!   of accepted configs up front

use serde::Serialize;

use crate::routing::pattern::{normalize_path, Params};
use crate::routing::table::{RouteTable, RouteTarget};
use crate::routing::RouteError;
use crate::views::ViewRef;

/// Upper bound on redirect hops before resolution gives up.
pub const MAX_REDIRECT_HOPS: usize = 8;

/// The view a navigation path resolves to, with how it got there.
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    /// Name of the route entry that finally matched.
    pub route: String,
    /// The view to mount.
    pub view: ViewRef,
    /// Parameters captured by the final match.
    pub params: Params,
    /// Redirect targets taken on the way, in order. Empty when the
    /// first match was already a view.
    pub redirects: Vec<String>,
}

impl Resolution {
    /// True when no redirect was taken.
    pub fn direct(&self) -> bool {
        self.redirects.is_empty()
    }
}

/// Resolve a path against the table, chasing redirects to a view.
///
/// On a validated table this is total: the catch-all guarantees a match
/// and validation guarantees redirects reach a view. The error arms are
/// kept explicit for tables that bypassed validation.
pub fn resolve(table: &RouteTable, path: &str) -> Result<Resolution, RouteError> {
    let mut current = normalize_path(path);
    let mut redirects = Vec::new();

    while redirects.len() <= MAX_REDIRECT_HOPS {
        let hit = table
            .match_path(&current)
            .ok_or_else(|| RouteError::NoMatch {
                path: current.clone(),
            })?;

        match hit.entry.target() {
            RouteTarget::View(view) => {
                return Ok(Resolution {
                    route: hit.entry.name().to_string(),
                    view: view.clone(),
                    params: hit.params,
                    redirects,
                });
            }
            RouteTarget::Redirect(to) => {
                tracing::debug!(
                    from = %current,
                    to = %to,
                    route = hit.entry.name(),
                    "Following redirect"
                );
                redirects.push(to.clone());
                current = normalize_path(to);
            }
        }
    }

    Err(RouteError::RedirectLoop {
        path: normalize_path(path),
        hops: MAX_REDIRECT_HOPS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, RouteConfig};

    fn default_table() -> RouteTable {
        RouteTable::from_config(&AppConfig::default().routes).unwrap()
    }

    #[test]
    fn test_root_resolves_to_primary_view() {
        let table = default_table();
        let resolution = resolve(&table, "/").unwrap();
        assert_eq!(resolution.view.as_str(), "task-one");
        assert!(resolution.direct());
    }

    #[test]
    fn test_secondary_path_resolves_to_secondary_view() {
        let table = default_table();
        let resolution = resolve(&table, "/task-2").unwrap();
        assert_eq!(resolution.view.as_str(), "task-two");
        assert!(resolution.direct());
    }

    #[test]
    fn test_unknown_paths_redirect_to_root() {
        let table = default_table();
        for path in ["/foo", "/a/b/c", "/unknown/path", ""] {
            let resolution = resolve(&table, path).unwrap();
            assert_eq!(resolution.view.as_str(), "task-one", "path {path:?}");
            // Direct hits on the root take no redirect; everything else
            // takes exactly one, to "/".
            if path.is_empty() {
                assert!(resolution.direct());
            } else {
                assert_eq!(resolution.redirects, vec!["/".to_string()]);
            }
        }
    }

    #[test]
    fn test_redirect_loop_is_detected() {
        // An unvalidated table where two redirects chase each other.
        let routes = vec![
            RouteConfig {
                name: "ping".into(),
                pattern: "/ping".into(),
                view: None,
                redirect: Some("/pong".into()),
            },
            RouteConfig {
                name: "pong".into(),
                pattern: "/pong".into(),
                view: None,
                redirect: Some("/ping".into()),
            },
        ];
        let table = RouteTable::from_config(&routes).unwrap();
        assert!(matches!(
            resolve(&table, "/ping"),
            Err(RouteError::RedirectLoop { hops: MAX_REDIRECT_HOPS, .. })
        ));
    }

    #[test]
    fn test_no_match_is_explicit() {
        let routes = vec![RouteConfig {
            name: "root".into(),
            pattern: "/".into(),
            view: Some("task-one".into()),
            redirect: None,
        }];
        let table = RouteTable::from_config(&routes).unwrap();
        assert!(matches!(
            resolve(&table, "/missing"),
            Err(RouteError::NoMatch { .. })
        ));
    }
}
