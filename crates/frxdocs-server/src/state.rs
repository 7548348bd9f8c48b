//! Application state.
//!
//! Shared state for all request handlers. Nothing in it changes after
//! startup, so handlers read it without locking.

use chrono::{DateTime, Utc};
use frxdocs_site::DocsStore;

/// Site identity shown in page chrome.
#[derive(Clone, Debug)]
pub(crate) struct SiteInfo {
    /// Project name.
    pub(crate) name: String,
    /// Landing page tagline.
    pub(crate) tagline: String,
    /// Source repository URL.
    pub(crate) repository: Option<String>,
}

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Built documentation.
    pub(crate) store: DocsStore,
    /// Site identity.
    pub(crate) site: SiteInfo,
    /// Application version for `ETag` computation.
    pub(crate) version: String,
    /// Modification time of the loaded artifact.
    pub(crate) last_modified: DateTime<Utc>,
}
