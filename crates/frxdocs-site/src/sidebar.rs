//! Grouped sidebar navigation.
//!
//! Sections are placed into fixed groups by id. Sections whose id is in no
//! group do not appear in the sidebar.

use frxdocs_document::NavItem;

/// Sidebar groups in display order, each with the section ids it accepts.
pub const SIDEBAR_GROUPS: &[(&str, &[&str])] = &[
    ("Getting Started", &["installation", "quick-start"]),
    (
        "Core Modules",
        &[
            "http-middleware-httpx",
            "error-handling-errorx",
            "logging-logs",
            "id-generation-idgen",
            "context-cache-ctxcache",
            "language-extensions-lang",
        ],
    ),
    (
        "Advanced",
        &["best-practices", "configuration-options", "contributing"],
    ),
];

/// Group keys expanded when a page loads.
const EXPANDED_BY_DEFAULT: &[&str] = &["getting-started", "core-modules"];

/// A collapsible group of sidebar links.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarGroup {
    /// Lower-cased title with whitespace runs replaced by `-`.
    pub key: String,
    /// Display title.
    pub title: &'static str,
    /// Whether the group starts expanded.
    pub expanded: bool,
    /// Links in navigation order.
    pub items: Vec<SidebarLink>,
}

/// A link to one section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarLink {
    /// Section id.
    pub id: String,
    /// Section title.
    pub title: String,
    /// Link target.
    pub href: String,
    /// Whether this is the section being viewed.
    pub active: bool,
}

/// Group key for a title: `"Core Modules"` -> `"core-modules"`.
#[must_use]
pub fn group_key(title: &str) -> String {
    title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// Build the sidebar for a document's navigation.
///
/// Empty groups are omitted.
#[must_use]
pub fn build_sidebar(navigation: &[NavItem], current_section: Option<&str>) -> Vec<SidebarGroup> {
    SIDEBAR_GROUPS
        .iter()
        .filter_map(|&(title, ids)| {
            let items: Vec<SidebarLink> = navigation
                .iter()
                .filter(|item| ids.contains(&item.id.as_str()))
                .map(|item| SidebarLink {
                    id: item.id.clone(),
                    title: item.title.clone(),
                    href: item.href.clone(),
                    active: current_section == Some(item.id.as_str()),
                })
                .collect();

            if items.is_empty() {
                return None;
            }

            let key = group_key(title);
            Some(SidebarGroup {
                expanded: EXPANDED_BY_DEFAULT.contains(&key.as_str()),
                key,
                title,
                items,
            })
        })
        .collect()
}
