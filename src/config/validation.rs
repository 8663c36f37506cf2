//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check referential integrity (routes reference existing views)
//! - Enforce table shape: catch-all present, last, and unique
//! - Check redirect targets actually reach a view
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before a config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::routing::{resolve, PathPattern, RouteTable};

/// A single semantic violation found in a config.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("route table is empty")]
    NoRoutes,

    #[error("route '{route}': invalid pattern: {reason}")]
    InvalidPattern { route: String, reason: String },

    #[error("duplicate route pattern '{pattern}'")]
    DuplicatePattern { pattern: String },

    #[error("route '{route}' declares both a view and a redirect")]
    AmbiguousTarget { route: String },

    #[error("route '{route}' declares neither a view nor a redirect")]
    MissingTarget { route: String },

    #[error("route table has no catch-all entry; unmatched paths would be possible")]
    MissingCatchAll,

    #[error("catch-all route '{route}' is not last; it would shadow every entry after it")]
    CatchAllNotLast { route: String },

    #[error("more than one catch-all entry (first '{first}', then '{second}')")]
    MultipleCatchAll { first: String, second: String },

    #[error("route '{route}' targets unknown view '{view}'")]
    UnknownView { route: String, view: String },

    #[error("route '{route}' redirect to '{target}' never reaches a view: {reason}")]
    BadRedirect {
        route: String,
        target: String,
        reason: String,
    },

    #[error("duplicate view name '{name}'")]
    DuplicateView { name: String },

    #[error("invalid {field} address '{value}'")]
    InvalidAddress { field: String, value: String },
}

/// Validate a configuration, collecting every violation.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    validate_addresses(config, &mut errors);
    validate_views(config, &mut errors);
    validate_table_shape(config, &mut errors);

    // Target resolution needs a compilable table; skip it when the
    // shape checks already failed.
    if errors.is_empty() {
        validate_targets(config, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_addresses(config: &AppConfig, errors: &mut Vec<ValidationError>) {
    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address".to_string(),
            value: config.listener.bind_address.clone(),
        });
    }
    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address".to_string(),
            value: config.observability.metrics_address.clone(),
        });
    }
}

fn validate_views(config: &AppConfig, errors: &mut Vec<ValidationError>) {
    let mut seen = HashSet::new();
    for view in &config.views {
        if !seen.insert(view.name.as_str()) {
            errors.push(ValidationError::DuplicateView {
                name: view.name.clone(),
            });
        }
    }
}

fn validate_table_shape(config: &AppConfig, errors: &mut Vec<ValidationError>) {
    if config.routes.is_empty() {
        errors.push(ValidationError::NoRoutes);
        return;
    }

    let mut seen_patterns = HashSet::new();
    let mut catch_all: Option<(usize, &str)> = None;

    for (index, route) in config.routes.iter().enumerate() {
        match PathPattern::parse(&route.pattern) {
            Ok(pattern) => {
                if pattern.is_catch_all() {
                    match catch_all {
                        None => catch_all = Some((index, &route.name)),
                        Some((_, first)) => errors.push(ValidationError::MultipleCatchAll {
                            first: first.to_string(),
                            second: route.name.clone(),
                        }),
                    }
                }
            }
            Err(e) => errors.push(ValidationError::InvalidPattern {
                route: route.name.clone(),
                reason: e.to_string(),
            }),
        }

        if !seen_patterns.insert(route.pattern.as_str()) {
            errors.push(ValidationError::DuplicatePattern {
                pattern: route.pattern.clone(),
            });
        }

        match (&route.view, &route.redirect) {
            (Some(_), Some(_)) => errors.push(ValidationError::AmbiguousTarget {
                route: route.name.clone(),
            }),
            (None, None) => errors.push(ValidationError::MissingTarget {
                route: route.name.clone(),
            }),
            _ => {}
        }
    }

    match catch_all {
        None => errors.push(ValidationError::MissingCatchAll),
        Some((index, name)) if index != config.routes.len() - 1 => {
            errors.push(ValidationError::CatchAllNotLast {
                route: name.to_string(),
            });
        }
        Some(_) => {}
    }
}

/// Check that every view target exists and every redirect chain ends in
/// a registered view. Runs on a table that already passed shape checks.
fn validate_targets(config: &AppConfig, errors: &mut Vec<ValidationError>) {
    let table = match RouteTable::from_config(&config.routes) {
        Ok(table) => table,
        // Shape checks passed, so compilation cannot fail; keep the
        // arm explicit rather than panicking on a future invariant slip.
        Err(e) => {
            errors.push(ValidationError::InvalidPattern {
                route: "<table>".to_string(),
                reason: e.to_string(),
            });
            return;
        }
    };

    for route in &config.routes {
        if let Some(view) = &route.view {
            if !config.views.iter().any(|v| &v.name == view) {
                errors.push(ValidationError::UnknownView {
                    route: route.name.clone(),
                    view: view.clone(),
                });
            }
        }
        if let Some(target) = &route.redirect {
            match resolve(&table, target) {
                Ok(resolution) => {
                    if !config
                        .views
                        .iter()
                        .any(|v| v.name == resolution.view.as_str())
                    {
                        errors.push(ValidationError::UnknownView {
                            route: resolution.route.clone(),
                            view: resolution.view.to_string(),
                        });
                    }
                }
                Err(e) => errors.push(ValidationError::BadRedirect {
                    route: route.name.clone(),
                    target: target.clone(),
                    reason: e.to_string(),
                }),
            }
        }
    }
}
