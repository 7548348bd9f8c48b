//! Read-only access to the built documentation.

use std::path::{Path, PathBuf};

use frxdocs_config::{Version, VersionList};
use frxdocs_document::{DocsBundle, Document, Section};

/// Error loading the documentation artifact.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid documentation artifact: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable documentation store, loaded once at startup.
#[derive(Debug)]
pub struct DocsStore {
    bundle: DocsBundle,
    versions: VersionList,
}

impl DocsStore {
    /// Create a store from a bundle and the configured versions.
    ///
    /// When no versions are configured, every version present in the bundle
    /// is offered in sorted order and none is flagged latest.
    #[must_use]
    pub fn new(bundle: DocsBundle, versions: VersionList) -> Self {
        let versions = if versions.is_empty() {
            tracing::debug!("No versions configured, using artifact keys");
            VersionList::new(
                bundle
                    .versions()
                    .map(|id| Version {
                        id: id.to_owned(),
                        label: id.to_owned(),
                        is_latest: false,
                    })
                    .collect(),
            )
        } else {
            versions
        };

        for version in versions.ids() {
            if bundle.get(version).is_none() {
                tracing::warn!(version, "Configured version has no built documentation");
            }
        }

        Self { bundle, versions }
    }

    /// Load a store from a `docs.json` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid artifact.
    pub fn load(path: &Path, versions: VersionList) -> Result<Self, StoreError> {
        let json = std::fs::read_to_string(path).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json(&json, versions)?;
        tracing::info!(
            path = %path.display(),
            documents = store.bundle.len(),
            "Loaded documentation"
        );
        Ok(store)
    }

    /// Parse a store from `docs.json` text.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the artifact shape.
    pub fn from_json(json: &str, versions: VersionList) -> Result<Self, StoreError> {
        let bundle: DocsBundle = serde_json::from_str(json)?;
        Ok(Self::new(bundle, versions))
    }

    /// Document for a version, if it was built.
    #[must_use]
    pub fn get_doc_data(&self, version: &str) -> Option<&Document> {
        self.bundle.get(version)
    }

    /// Section of a version by exact id. The first match wins.
    #[must_use]
    pub fn get_section(&self, version: &str, section_id: &str) -> Option<&Section> {
        self.get_doc_data(version)?.section(section_id)
    }

    /// Version records in configuration order.
    #[must_use]
    pub fn versions(&self) -> &[Version] {
        self.versions.all()
    }

    /// Version ids in configuration order.
    #[must_use]
    pub fn available_versions(&self) -> Vec<&str> {
        self.versions.ids().collect()
    }

    /// The version flagged latest, else the first one.
    #[must_use]
    pub fn latest_version(&self) -> Option<&str> {
        self.versions.latest().map(|v| v.id.as_str())
    }

    /// Display label for a version id, or the id itself when unknown.
    #[must_use]
    pub fn version_label<'a>(&'a self, id: &'a str) -> &'a str {
        self.versions.label(id)
    }

    /// Where `/docs` should send the reader.
    ///
    /// The latest version's first section, or its `installation` section
    /// when the version has no built data. `None` without any version.
    #[must_use]
    pub fn entry_path(&self) -> Option<String> {
        let latest = self.latest_version()?;
        let section = self
            .get_doc_data(latest)
            .and_then(Document::first_section)
            .map_or("installation", |s| s.id.as_str());
        Some(frxdocs_document::section_href(latest, section))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const ARTIFACT: &str = r#"{
  "v0.0.1": {
    "title": "frx v0.0.1",
    "version": "v0.0.1",
    "sections": [
      { "id": "main", "title": "frx v0.0.1", "content": "<p>old</p>", "level": 1, "toc": [] }
    ],
    "navigation": [{ "id": "main", "title": "frx v0.0.1", "href": "/docs/v0.0.1/main" }]
  },
  "v0.0.2": {
    "title": "frx Documentation",
    "version": "v0.0.2",
    "sections": [
      {
        "id": "installation",
        "title": "Installation",
        "content": "<h2 id=\"installation\">Installation</h2>",
        "level": 2,
        "toc": [{ "id": "requirements", "title": "Requirements", "level": 3 }]
      },
      { "id": "quick-start", "title": "Quick Start", "content": "<p>go</p>", "level": 2, "toc": [] }
    ],
    "navigation": [
      { "id": "installation", "title": "Installation", "href": "/docs/v0.0.2/installation" },
      { "id": "quick-start", "title": "Quick Start", "href": "/docs/v0.0.2/quick-start" }
    ]
  }
}"#;

    fn version(id: &str, label: &str, is_latest: bool) -> Version {
        Version {
            id: id.to_owned(),
            label: label.to_owned(),
            is_latest,
        }
    }

    fn store() -> DocsStore {
        let versions = VersionList::new(vec![
            version("v0.0.2", "v0.0.2 (latest)", true),
            version("v0.0.1", "v0.0.1", false),
        ]);
        DocsStore::from_json(ARTIFACT, versions).unwrap()
    }

    #[test]
    fn test_get_doc_data() {
        let store = store();
        assert_eq!(store.get_doc_data("v0.0.2").unwrap().title, "frx Documentation");
        assert!(store.get_doc_data("v9").is_none());
    }

    #[test]
    fn test_get_section() {
        let store = store();
        let section = store.get_section("v0.0.2", "installation").unwrap();
        assert_eq!(section.toc[0].id, "requirements");
        assert!(store.get_section("v0.0.2", "missing").is_none());
        assert!(store.get_section("v9", "installation").is_none());
    }

    #[test]
    fn test_version_queries() {
        let store = store();
        assert_eq!(store.available_versions(), vec!["v0.0.2", "v0.0.1"]);
        assert_eq!(store.latest_version(), Some("v0.0.2"));
        assert_eq!(store.version_label("v0.0.2"), "v0.0.2 (latest)");
        assert_eq!(store.version_label("v7"), "v7");
        assert_eq!(store.versions().len(), 2);
    }

    #[test]
    fn test_versions_fall_back_to_artifact() {
        let store = DocsStore::from_json(ARTIFACT, VersionList::default()).unwrap();
        assert_eq!(store.available_versions(), vec!["v0.0.1", "v0.0.2"]);
        assert_eq!(store.latest_version(), Some("v0.0.1"));
    }

    #[test]
    fn test_entry_path() {
        assert_eq!(store().entry_path().as_deref(), Some("/docs/v0.0.2/installation"));

        let versions = VersionList::new(vec![version("v0.0.1", "v0.0.1", true)]);
        let store = DocsStore::from_json(ARTIFACT, versions).unwrap();
        assert_eq!(store.entry_path().as_deref(), Some("/docs/v0.0.1/main"));
    }

    #[test]
    fn test_entry_path_without_data() {
        let versions = VersionList::new(vec![version("v1.0.0", "v1.0.0", true)]);
        let store = DocsStore::new(DocsBundle::new(), versions);
        assert_eq!(store.entry_path().as_deref(), Some("/docs/v1.0.0/installation"));

        let empty = DocsStore::new(DocsBundle::new(), VersionList::default());
        assert_eq!(empty.entry_path(), None);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs.json");
        std::fs::write(&path, ARTIFACT).unwrap();

        let store = DocsStore::load(&path, VersionList::default()).unwrap();
        assert!(store.get_doc_data("v0.0.2").is_some());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = DocsStore::load(&dir.path().join("docs.json"), VersionList::default())
            .unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
    }

    #[test]
    fn test_invalid_json() {
        let err = DocsStore::from_json("{\"v1\": 3}", VersionList::default()).unwrap_err();
        assert!(matches!(err, StoreError::Parse(_)));
    }
}
