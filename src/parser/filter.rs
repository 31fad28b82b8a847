//! Path inclusion policy for `SF:` markers.
//!
//! A trace usually covers the project, its tests, build scripts under
//! `target/` and every dependency pulled from the registry. Only the
//! project's own sources are interesting for gap analysis.

use crate::utils::config::{EXCLUDE_MARKERS, INCLUDE_MARKER};

/// Substring-based filter deciding which source files are analyzed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathFilter {
    /// Marker every accepted path must contain
    pub include: String,

    /// Markers that reject a path outright
    pub exclude: Vec<String>,
}

impl Default for PathFilter {
    fn default() -> Self {
        Self {
            include: INCLUDE_MARKER.to_string(),
            exclude: EXCLUDE_MARKERS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

impl PathFilter {
    /// Create a filter with the default project-source markers
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the include marker
    pub fn with_include(mut self, marker: impl Into<String>) -> Self {
        self.include = marker.into();
        self
    }

    /// Add extra exclusion markers on top of the current ones
    pub fn with_exclusions<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(markers.into_iter().map(Into::into));
        self
    }

    /// Check whether a path belongs to the analyzed project sources
    pub fn accepts(&self, path: &str) -> bool {
        path.contains(self.include.as_str())
            && !self.exclude.iter().any(|marker| path.contains(marker.as_str()))
    }
}
