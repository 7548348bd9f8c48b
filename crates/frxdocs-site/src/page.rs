//! Resolution of `/docs/{version}[/{section}]` into a renderable page.

use frxdocs_config::Version;
use frxdocs_document::{Document, Section};

use crate::sidebar::{SidebarGroup, build_sidebar};
use crate::store::DocsStore;
use crate::toc::TocPanel;

/// Everything needed to render one documentation page.
#[derive(Debug)]
pub struct DocPage<'a> {
    /// Version being viewed.
    pub version: &'a str,
    /// Label of the version being viewed.
    pub version_label: &'a str,
    /// All versions, for the selector.
    pub versions: &'a [Version],
    /// Document of the version.
    pub document: &'a Document,
    /// Section being viewed.
    pub section: &'a Section,
    /// Grouped sidebar links.
    pub sidebar: Vec<SidebarGroup>,
    /// "On This Page" panel.
    pub toc: TocPanel,
}

/// Why a page could not be resolved.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error("Version {0} not found")]
    VersionNotFound(String),
    #[error("Section \"{section}\" not found in version {version}")]
    SectionNotFound { version: String, section: String },
}

impl DocsStore {
    /// Resolve a page. Without a section id, the version's first section is
    /// shown.
    ///
    /// # Errors
    ///
    /// Returns [`PageError`] for an unknown version or section.
    pub fn page<'a>(
        &'a self,
        version: &'a str,
        section_id: Option<&str>,
    ) -> Result<DocPage<'a>, PageError> {
        let document = self
            .get_doc_data(version)
            .ok_or_else(|| PageError::VersionNotFound(version.to_owned()))?;

        let section = match section_id {
            Some(id) => document.section(id),
            None => document.first_section(),
        }
        .ok_or_else(|| PageError::SectionNotFound {
            version: version.to_owned(),
            section: section_id.unwrap_or_default().to_owned(),
        })?;

        Ok(DocPage {
            version,
            version_label: self.version_label(version),
            versions: self.versions(),
            document,
            section,
            sidebar: build_sidebar(&document.navigation, Some(&section.id)),
            toc: TocPanel::for_section(section),
        })
    }
}

#[cfg(test)]
mod tests {
    use frxdocs_config::VersionList;
    use frxdocs_document::{DocsBundle, NavItem, TocItem};
    use pretty_assertions::assert_eq;

    use super::*;

    fn store() -> DocsStore {
        let sections = vec![
            Section {
                id: "installation".to_owned(),
                title: "Installation".to_owned(),
                content: "<h2 id=\"installation\">Installation</h2>".to_owned(),
                level: 2,
                toc: vec![TocItem {
                    id: "requirements".to_owned(),
                    title: "Requirements".to_owned(),
                    level: 3,
                }],
            },
            Section {
                id: "quick-start".to_owned(),
                title: "Quick Start".to_owned(),
                content: String::new(),
                level: 2,
                toc: Vec::new(),
            },
        ];
        let navigation = sections
            .iter()
            .map(|s| NavItem::for_section("v0.0.2", s))
            .collect();

        let mut bundle = DocsBundle::new();
        bundle.insert(Document {
            title: "frx v0.0.2".to_owned(),
            version: "v0.0.2".to_owned(),
            sections,
            navigation,
        });
        DocsStore::new(bundle, VersionList::default())
    }

    #[test]
    fn test_page_for_section() {
        let store = store();
        let page = store.page("v0.0.2", Some("quick-start")).unwrap();

        assert_eq!(page.section.title, "Quick Start");
        assert_eq!(page.version_label, "v0.0.2");
        assert!(page.toc.is_empty());
        assert!(page.sidebar[0].items[1].active);
    }

    #[test]
    fn test_bare_version_uses_first_section() {
        let store = store();
        let page = store.page("v0.0.2", None).unwrap();
        assert_eq!(page.section.id, "installation");
        assert_eq!(page.toc.links.len(), 1);
    }

    #[test]
    fn test_unknown_section_message() {
        let err = store().page("v0.0.2", Some("nope")).unwrap_err();
        assert_eq!(err.to_string(), "Section \"nope\" not found in version v0.0.2");
    }

    #[test]
    fn test_unknown_version() {
        let err = store().page("v9", Some("installation")).unwrap_err();
        assert_eq!(err, PageError::VersionNotFound("v9".to_owned()));
        assert_eq!(err.to_string(), "Version v9 not found");
    }
}
