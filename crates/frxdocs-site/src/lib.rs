//! Documentation store and page models for frxdocs.
//!
//! This crate provides:
//! - [`DocsStore`]: read-only lookups over the `docs.json` artifact
//! - [`DocPage`]: a resolved page with its sidebar and table of contents
//! - Sidebar grouping ([`build_sidebar`]) and the "On This Page" panel ([`TocPanel`])
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::Path;
//! use frxdocs_config::VersionList;
//! use frxdocs_site::DocsStore;
//!
//! let store = DocsStore::load(Path::new("data/docs.json"), VersionList::default())?;
//! let page = store.page("v0.0.2", Some("installation"))?;
//! println!("{}", page.section.title);
//! # Ok(())
//! # }
//! ```

mod page;
mod sidebar;
mod store;
mod toc;

pub use page::{DocPage, PageError};
pub use sidebar::{SIDEBAR_GROUPS, SidebarGroup, SidebarLink, build_sidebar, group_key};
pub use store::{DocsStore, StoreError};
pub use toc::{EMPTY_TOC_MESSAGE, TOC_HEADING, TocLink, TocPanel};
