//! Documentation versions.
//!
//! The version list is ordered as it appears in `frxdocs.toml`; that order
//! drives both the build and the version selector.

use serde::{Deserialize, Serialize};

/// A documented release of the library.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    /// Identifier, also the Markdown file stem and URL segment (e.g. `v0.0.2`).
    pub id: String,
    /// Label shown in the version selector.
    pub label: String,
    /// Whether this is the latest release.
    pub is_latest: bool,
}

/// Ordered, immutable list of configured versions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VersionList {
    versions: Vec<Version>,
}

impl VersionList {
    /// Create a version list, keeping the given order.
    #[must_use]
    pub fn new(versions: Vec<Version>) -> Self {
        Self { versions }
    }

    /// All versions in configuration order.
    #[must_use]
    pub fn all(&self) -> &[Version] {
        &self.versions
    }

    /// Version identifiers in configuration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.versions.iter().map(|v| v.id.as_str())
    }

    /// Look up a version by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Version> {
        self.versions.iter().find(|v| v.id == id)
    }

    /// Whether a version with this id is configured.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// The latest version: the first one flagged latest, else the first one.
    ///
    /// Returns `None` only for an empty list.
    #[must_use]
    pub fn latest(&self) -> Option<&Version> {
        self.versions
            .iter()
            .find(|v| v.is_latest)
            .or_else(|| self.versions.first())
    }

    /// Display label for a version id, falling back to the id itself.
    #[must_use]
    pub fn label<'a>(&'a self, id: &'a str) -> &'a str {
        self.get(id).map_or(id, |v| v.label.as_str())
    }

    /// Number of configured versions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// Whether no versions are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}
