//! Registered views and references to them.
//!
//! # Responsibilities
//! - Hold the set of mountable views declared in config
//! - Resolve a `ViewRef` to its spec for the shell page
//! - Serve as the referential-integrity target for route validation

use serde::{Deserialize, Serialize};

use crate::config::ViewConfig;

/// An opaque reference to a view, by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewRef(String);

impl ViewRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ViewRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the shell needs to mount a view. Internals stay opaque.
#[derive(Debug, Clone, Serialize)]
pub struct ViewSpec {
    /// Unique view name, referenced by route targets.
    pub name: String,
    /// Title for the shell page.
    pub title: String,
}

/// The set of views the table may target.
#[derive(Debug, Default)]
pub struct ViewRegistry {
    views: Vec<ViewSpec>,
}

impl ViewRegistry {
    /// Build the registry from config. A missing title falls back to
    /// the view name.
    pub fn from_config(views: &[ViewConfig]) -> Self {
        let views = views
            .iter()
            .map(|v| ViewSpec {
                name: v.name.clone(),
                title: v.title.clone().unwrap_or_else(|| v.name.clone()),
            })
            .collect();
        Self { views }
    }

    /// Look up a view by reference.
    pub fn get(&self, view: &ViewRef) -> Option<&ViewSpec> {
        self.views.iter().find(|v| v.name == view.as_str())
    }

    /// True if a view with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.views.iter().any(|v| v.name == name)
    }

    pub fn specs(&self) -> &[ViewSpec] {
        &self.views
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_default_registry() {
        let registry = ViewRegistry::from_config(&AppConfig::default().views);
        assert!(registry.contains("task-one"));
        assert!(registry.contains("task-two"));
        assert!(!registry.contains("task-three"));

        let spec = registry.get(&ViewRef::new("task-one")).unwrap();
        assert_eq!(spec.title, "Task One");
    }

    #[test]
    fn test_title_falls_back_to_name() {
        let registry = ViewRegistry::from_config(&[ViewConfig {
            name: "bare".into(),
            title: None,
        }]);
        assert_eq!(registry.get(&ViewRef::new("bare")).unwrap().title, "bare");
    }
}
