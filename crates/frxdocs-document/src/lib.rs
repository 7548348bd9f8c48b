//! Document tree types for frxdocs.
//!
//! These types describe the `docs.json` artifact written by the builder and
//! read by the site. The JSON shape is:
//!
//! ```text
//! {
//!   "<version>": {
//!     "title": "...",
//!     "version": "<version>",
//!     "sections": [{ "id", "title", "content", "level", "toc": [{ "id", "title", "level" }] }],
//!     "navigation": [{ "id", "title", "href" }]
//!   }
//! }
//! ```
//!
//! Values are created once per build and never mutated afterwards.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Identifier of the synthetic section used when a document has no
/// level-2 headings.
pub const MAIN_SECTION_ID: &str = "main";

/// Sub-heading entry used for in-page navigation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocItem {
    /// Anchor id (slug of the heading text).
    pub id: String,
    /// Literal heading text.
    pub title: String,
    /// Heading level, 3 or 4.
    pub level: u8,
}

/// A level-2 fragment of a document, rendered independently.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Slug of the heading text, or [`MAIN_SECTION_ID`].
    pub id: String,
    /// Literal heading text.
    pub title: String,
    /// Rendered HTML body.
    pub content: String,
    /// 2 for heading sections, 1 for the whole-document fallback.
    pub level: u8,
    /// Level-3/4 headings inside this section, in document order.
    pub toc: Vec<TocItem>,
}

/// Sidebar link derived from a section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Section id.
    pub id: String,
    /// Section title.
    pub title: String,
    /// Link target (`/docs/<version>/<section-id>`).
    pub href: String,
}

impl NavItem {
    /// Derive the navigation entry for a section of `version`.
    #[must_use]
    pub fn for_section(version: &str, section: &Section) -> Self {
        Self {
            id: section.id.clone(),
            title: section.title.clone(),
            href: section_href(version, &section.id),
        }
    }
}

/// URL path of a section page.
#[must_use]
pub fn section_href(version: &str, section_id: &str) -> String {
    format!("/docs/{version}/{section_id}")
}

/// The documentation for one version.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Document title (front-matter `title` or a default).
    pub title: String,
    /// Version id this document belongs to.
    pub version: String,
    /// Sections in document order.
    pub sections: Vec<Section>,
    /// One entry per section, same order.
    pub navigation: Vec<NavItem>,
}

impl Document {
    /// Find a section by id. The first match wins when ids collide.
    #[must_use]
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// The section shown for a bare version URL.
    #[must_use]
    pub fn first_section(&self) -> Option<&Section> {
        self.sections.first()
    }
}

/// All documents of one build, keyed by version id.
///
/// Keys serialize in sorted order so that identical input produces
/// identical JSON.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocsBundle {
    documents: BTreeMap<String, Document>,
}

impl DocsBundle {
    /// Create an empty bundle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document, replacing any previous one for the same version.
    pub fn insert(&mut self, document: Document) {
        self.documents.insert(document.version.clone(), document);
    }

    /// Document for a version.
    #[must_use]
    pub fn get(&self, version: &str) -> Option<&Document> {
        self.documents.get(version)
    }

    /// Version ids present in the bundle, sorted.
    pub fn versions(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }

    /// Number of documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the bundle has no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
