//! HTML page templates.
//!
//! Pages are assembled as strings. Layout of a documentation page:
//!
//! ```text
//! ┌──────────┬──────────────────────────────┬───────────┐
//! │ sidebar  │ title, version badge         │ On This   │
//! │ versions │ section HTML                 │ Page      │
//! │ groups   │ (.markdown-content)          │           │
//! └──────────┴──────────────────────────────┴───────────┘
//! ```

use std::fmt::Write;

use frxdocs_config::Version;
use frxdocs_renderer::escape_html as escape;
use frxdocs_site::{DocPage, EMPTY_TOC_MESSAGE, SidebarGroup, TOC_HEADING, TocPanel};

use crate::state::SiteInfo;

/// Chrome shared by documentation and not-found pages.
struct Chrome<'a> {
    site: &'a SiteInfo,
    versions: &'a [Version],
    current_version: Option<&'a str>,
    sidebar: &'a [SidebarGroup],
}

/// Render the landing page.
pub(crate) fn render_landing(site: &SiteInfo) -> String {
    let mut html = String::with_capacity(2048);
    write_head(&mut html, &site.name);
    html.push_str("<body class=\"landing\">\n<main class=\"hero\">\n");
    let _ = writeln!(html, "<h1>{}</h1>", escape(&site.name));
    if !site.tagline.is_empty() {
        let _ = writeln!(html, "<p class=\"tagline\">{}</p>", escape(&site.tagline));
    }
    html.push_str("<div class=\"hero-actions\">\n");
    html.push_str("<a class=\"button primary\" href=\"/docs\">Get Started</a>\n");
    if let Some(repository) = &site.repository {
        let _ = writeln!(
            html,
            "<a class=\"button\" href=\"{}\">GitHub</a>",
            escape(repository)
        );
    }
    html.push_str("</div>\n</main>\n");
    write_tail(&mut html);
    html
}

/// Render one documentation section with sidebar and table of contents.
pub(crate) fn render_doc_page(site: &SiteInfo, page: &DocPage<'_>) -> String {
    let mut html = String::with_capacity(page.section.content.len() + 8192);
    let title = format!("{} - {}", page.section.title, site.name);
    write_head(&mut html, &title);
    html.push_str("<body>\n<div class=\"layout\">\n");

    write_sidebar(
        &mut html,
        &Chrome {
            site,
            versions: page.versions,
            current_version: Some(page.version),
            sidebar: &page.sidebar,
        },
    );

    html.push_str("<main class=\"content\">\n<article>\n<header class=\"page-header\">\n");
    let _ = writeln!(html, "<h1>{}</h1>", escape(&page.section.title));
    let _ = writeln!(
        html,
        "<span class=\"version-badge\">Version: {}</span>",
        escape(page.version)
    );
    html.push_str("</header>\n<div class=\"markdown-content\">\n");
    html.push_str(&page.section.content);
    html.push_str("\n</div>\n</article>\n</main>\n");

    write_toc(&mut html, &page.toc);

    html.push_str("</div>\n");
    write_tail(&mut html);
    html
}

/// Render a not-found page with an inline message.
pub(crate) fn render_not_found(
    site: &SiteInfo,
    versions: &[Version],
    current_version: Option<&str>,
    sidebar: &[SidebarGroup],
    message: &str,
) -> String {
    let mut html = String::with_capacity(4096);
    write_head(&mut html, &format!("Not found - {}", site.name));
    html.push_str("<body>\n<div class=\"layout\">\n");

    write_sidebar(
        &mut html,
        &Chrome {
            site,
            versions,
            current_version,
            sidebar,
        },
    );

    html.push_str("<main class=\"content\">\n<div class=\"not-found\">\n");
    let _ = writeln!(html, "<p class=\"error\">{}</p>", escape(message));
    html.push_str("<p><a href=\"/docs\">Back to the documentation</a></p>\n");
    html.push_str("</div>\n</main>\n");

    write_toc(&mut html, &TocPanel::default());

    html.push_str("</div>\n");
    write_tail(&mut html);
    html
}

fn write_head(html: &mut String, title: &str) {
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape(title));
    html.push_str("<link rel=\"stylesheet\" href=\"/assets/app.css\">\n");
    html.push_str("<script src=\"/assets/app.js\" defer></script>\n");
    html.push_str("</head>\n");
}

fn write_tail(html: &mut String) {
    html.push_str("</body>\n</html>\n");
}

fn write_sidebar(html: &mut String, chrome: &Chrome<'_>) {
    html.push_str("<aside class=\"sidebar\">\n<div class=\"sidebar-header\">\n");
    let _ = writeln!(
        html,
        "<a href=\"/\" class=\"brand\">{}</a>",
        escape(&chrome.site.name)
    );
    if let Some(repository) = &chrome.site.repository {
        let _ = writeln!(
            html,
            "<a href=\"{}\" class=\"repo-link\" title=\"View on GitHub\">GitHub</a>",
            escape(repository)
        );
    }
    html.push_str("</div>\n");

    write_version_select(html, chrome.versions, chrome.current_version);

    html.push_str("<nav class=\"sidebar-nav\">\n");
    for group in chrome.sidebar {
        let open = if group.expanded { " open" } else { "" };
        let _ = writeln!(
            html,
            "<details class=\"nav-group\" data-group=\"{}\"{open}>",
            escape(&group.key)
        );
        let _ = writeln!(html, "<summary>{}</summary>", escape(group.title));
        html.push_str("<ul>\n");
        for item in &group.items {
            let class = if item.active { " class=\"active\"" } else { "" };
            let _ = writeln!(
                html,
                "<li><a href=\"{}\"{class}>{}</a></li>",
                escape(&item.href),
                escape(&item.title)
            );
        }
        html.push_str("</ul>\n</details>\n");
    }
    html.push_str("</nav>\n</aside>\n");
}

fn write_version_select(html: &mut String, versions: &[Version], current: Option<&str>) {
    if versions.is_empty() {
        return;
    }
    html.push_str("<div class=\"version-select\">\n<h3>Version</h3>\n");
    html.push_str("<select data-version-select aria-label=\"Version\">\n");
    for version in versions {
        let selected = if current == Some(version.id.as_str()) {
            " selected"
        } else {
            ""
        };
        let _ = writeln!(
            html,
            "<option value=\"{}\"{selected}>{}</option>",
            escape(&version.id),
            escape(&version.label)
        );
    }
    html.push_str("</select>\n</div>\n");
}

fn write_toc(html: &mut String, toc: &TocPanel) {
    html.push_str("<aside class=\"toc\">\n");
    let _ = writeln!(html, "<h3>{TOC_HEADING}</h3>");
    if toc.is_empty() {
        let _ = writeln!(html, "<p class=\"toc-empty\">{EMPTY_TOC_MESSAGE}</p>");
    } else {
        html.push_str("<nav>\n<ul>\n");
        for link in &toc.links {
            let class = if link.indented { " class=\"indent\"" } else { "" };
            let _ = writeln!(
                html,
                "<li{class}><a href=\"#{}\" data-toc-target=\"{}\">{}</a></li>",
                escape(&link.id),
                escape(&link.id),
                escape(&link.title)
            );
        }
        html.push_str("</ul>\n</nav>\n");
    }
    html.push_str("</aside>\n");
}
