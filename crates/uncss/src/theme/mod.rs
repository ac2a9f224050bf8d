//! Theme values and usage tracking.
//!
//! A [`Theme`] is a read-only snapshot of named design values that rules can
//! look up while matching. Themes can be built programmatically or loaded
//! from YAML:
//!
//! ```rust
//! use uncss::Theme;
//!
//! let theme = Theme::from_yaml(r#"
//! perspective:
//!   near: 300px
//!   distant: 1200px
//! "#).unwrap();
//!
//! assert_eq!(theme.perspective("near"), Some("300px"));
//! ```
//!
//! Rules that resolve through the theme do not inline the raw value; they
//! emit a reference to the theme's CSS variable
//! ([`generate_theme_variable`]) and record the lookup on a
//! [`ThemeTracker`], so the surrounding build can tell which theme values a
//! generated stylesheet depends on.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use serde::Deserialize;

use crate::error::ThemeError;

/// Read-only theme snapshot consulted during rule matching.
///
/// `Theme::default()` ships the built-in perspective scale; themes loaded
/// from YAML contain exactly what the file defines.
#[derive(Debug, Clone, Deserialize)]
pub struct Theme {
    #[serde(default)]
    perspective: HashMap<String, String>,
}

impl Default for Theme {
    fn default() -> Self {
        let perspective = [
            ("dramatic", "100px"),
            ("near", "300px"),
            ("normal", "500px"),
            ("midrange", "800px"),
            ("distant", "1200px"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        Self { perspective }
    }
}

impl Theme {
    /// Creates an empty theme with no values.
    pub fn new() -> Self {
        Self {
            perspective: HashMap::new(),
        }
    }

    /// Parses a theme from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ThemeError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads a theme from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Adds a perspective value (builder style).
    pub fn with_perspective(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.perspective.insert(key.into(), value.into());
        self
    }

    /// Looks up a perspective value by key.
    pub fn perspective(&self, key: &str) -> Option<&str> {
        self.perspective.get(key).map(String::as_str)
    }
}

/// Builds the CSS variable reference for a theme value.
///
/// Rules emit this reference instead of the raw theme value, keeping the
/// generated CSS stable when the theme changes.
pub fn generate_theme_variable(category: &str, key: &str) -> String {
    format!("var(--un-{category}-{key})")
}

/// Records which theme values a generation run depended on.
///
/// Purely additive per-run state; the surrounding build snapshots it with
/// [`ThemeTracker::used`] for dependency/invalidation bookkeeping. Matching
/// is single-threaded (handlers are pure functions of their inputs), so a
/// `RefCell` is all the interior mutability needed.
#[derive(Debug, Default)]
pub struct ThemeTracker {
    used: RefCell<BTreeSet<(String, String)>>,
}

impl ThemeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `category.key` was resolved through the theme.
    pub fn track(&self, category: &str, key: &str) {
        self.used
            .borrow_mut()
            .insert((category.to_string(), key.to_string()));
    }

    /// Returns true if `category.key` has been tracked this run.
    pub fn contains(&self, category: &str, key: &str) -> bool {
        self.used
            .borrow()
            .contains(&(category.to_string(), key.to_string()))
    }

    /// Snapshots the tracked set in sorted order.
    pub fn used(&self) -> Vec<(String, String)> {
        self.used.borrow().iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_perspective_scale() {
        let theme = Theme::default();
        assert_eq!(theme.perspective("near"), Some("300px"));
        assert_eq!(theme.perspective("distant"), Some("1200px"));
        assert_eq!(theme.perspective("bogus"), None);
    }

    #[test]
    fn test_empty_theme() {
        let theme = Theme::new();
        assert_eq!(theme.perspective("near"), None);
    }

    #[test]
    fn test_from_yaml() {
        let theme = Theme::from_yaml("perspective:\n  close: 200px\n").unwrap();
        assert_eq!(theme.perspective("close"), Some("200px"));
        // Loaded themes define exactly what the file says.
        assert_eq!(theme.perspective("near"), None);
    }

    #[test]
    fn test_from_yaml_missing_section() {
        let theme = Theme::from_yaml("{}").unwrap();
        assert_eq!(theme.perspective("near"), None);
    }

    #[test]
    fn test_from_yaml_invalid() {
        assert!(Theme::from_yaml("perspective: [not, a, map]").is_err());
    }

    #[test]
    fn test_builder() {
        let theme = Theme::new().with_perspective("close", "250px");
        assert_eq!(theme.perspective("close"), Some("250px"));
    }

    #[test]
    fn test_theme_variable() {
        assert_eq!(
            generate_theme_variable("perspective", "near"),
            "var(--un-perspective-near)"
        );
    }

    #[test]
    fn test_tracker() {
        let tracker = ThemeTracker::new();
        assert!(!tracker.contains("perspective", "near"));
        tracker.track("perspective", "near");
        tracker.track("perspective", "near");
        tracker.track("spacing", "DEFAULT");
        assert!(tracker.contains("perspective", "near"));
        assert_eq!(
            tracker.used(),
            vec![
                ("perspective".to_string(), "near".to_string()),
                ("spacing".to_string(), "DEFAULT".to_string()),
            ]
        );
    }
}
