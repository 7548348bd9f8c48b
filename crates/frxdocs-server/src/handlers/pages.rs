//! HTML page endpoints.
//!
//! Successful pages carry an `ETag` and honor `If-None-Match`. Unknown
//! versions and sections render a 404 page with an inline message.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use frxdocs_site::{PageError, build_sidebar};
use md5::{Digest, Md5};

use crate::state::AppState;
use crate::templates;

/// Handle GET /.
pub(crate) async fn landing(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let html = templates::render_landing(&state.site);
    cached_html(&state, &headers, html)
}

/// Handle GET /docs.
///
/// Redirects to the latest version's first section.
pub(crate) async fn docs_index(State(state): State<Arc<AppState>>) -> Response {
    match state.store.entry_path() {
        Some(path) => Redirect::temporary(&path).into_response(),
        None => not_found(&state, None, "No documentation versions are available"),
    }
}

/// Handle GET /docs/{version}.
pub(crate) async fn version_page(
    Path(version): Path<String>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Response {
    render_page(&state, &headers, &version, None)
}

/// Handle GET /docs/{version}/{section}.
pub(crate) async fn section_page(
    Path((version, section)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Response {
    render_page(&state, &headers, &version, Some(&section))
}

fn render_page(
    state: &AppState,
    headers: &HeaderMap,
    version: &str,
    section: Option<&str>,
) -> Response {
    match state.store.page(version, section) {
        Ok(page) => {
            let html = templates::render_doc_page(&state.site, &page);
            cached_html(state, headers, html)
        }
        Err(err) => {
            tracing::debug!(version, section, error = %err, "Page not found");
            let current = match &err {
                PageError::VersionNotFound(_) => None,
                PageError::SectionNotFound { .. } => Some(version),
            };
            not_found(state, current, &err.to_string())
        }
    }
}

fn not_found(state: &AppState, version: Option<&str>, message: &str) -> Response {
    let sidebar = version
        .and_then(|v| state.store.get_doc_data(v))
        .map(|doc| build_sidebar(&doc.navigation, None))
        .unwrap_or_default();
    let html = templates::render_not_found(
        &state.site,
        state.store.versions(),
        version,
        &sidebar,
        message,
    );
    (StatusCode::NOT_FOUND, Html(html)).into_response()
}

/// Build an HTML response with `ETag` and `Last-Modified`, or 304 when the
/// client already has it.
fn cached_html(state: &AppState, headers: &HeaderMap, html: String) -> Response {
    let etag = compute_etag(&state.version, &html);

    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return StatusCode::NOT_MODIFIED.into_response();
    }

    (
        [
            (header::ETAG, etag),
            (
                header::LAST_MODIFIED,
                state
                    .last_modified
                    .format("%a, %d %b %Y %H:%M:%S GMT")
                    .to_string(),
            ),
            (header::CACHE_CONTROL, "no-cache".to_owned()),
        ],
        Html(html),
    )
        .into_response()
}

/// Compute `ETag` from version and content.
///
/// Uses MD5 hash truncated to 64 bits (16 hex chars).
fn compute_etag(version: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_etag_includes_version() {
        assert_ne!(compute_etag("1.0.0", "content"), compute_etag("1.0.1", "content"));
    }

    #[test]
    fn test_compute_etag_includes_content() {
        assert_ne!(compute_etag("1.0.0", "content1"), compute_etag("1.0.0", "content2"));
    }

    #[test]
    fn test_compute_etag_format() {
        let etag = compute_etag("1.0.0", "content");

        assert!(etag.starts_with('"'));
        assert!(etag.ends_with('"'));
        assert_eq!(etag.len(), 18);
    }
}
