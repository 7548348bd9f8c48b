//! "On This Page" panel.

use frxdocs_document::{Section, TocItem};

/// Panel heading.
pub const TOC_HEADING: &str = "On This Page";

/// Shown when a section has no sub-headings.
pub const EMPTY_TOC_MESSAGE: &str = "No subsections";

/// Entry in the panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TocLink {
    /// Anchor id of the heading.
    pub id: String,
    /// Heading text.
    pub title: String,
    /// Level-4 headings are indented under their level-3 parent.
    pub indented: bool,
}

impl From<&TocItem> for TocLink {
    fn from(item: &TocItem) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            indented: item.level >= 4,
        }
    }
}

/// Table of contents for the section being viewed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TocPanel {
    /// Entries in document order.
    pub links: Vec<TocLink>,
}

impl TocPanel {
    /// Panel for a section.
    #[must_use]
    pub fn for_section(section: &Section) -> Self {
        Self {
            links: section.toc.iter().map(TocLink::from).collect(),
        }
    }

    /// Whether the panel shows [`EMPTY_TOC_MESSAGE`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
