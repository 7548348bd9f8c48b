//! HTTP server for the frxdocs documentation site.
//!
//! This crate serves the built `docs.json` artifact with axum:
//! - HTML pages: landing page, `/docs` redirect, one page per section
//! - JSON API: versions, documents, sections
//! - Embedded static assets (`/assets/app.css`, `/assets/app.js`)
//!
//! The artifact is loaded once at startup into an immutable
//! [`DocsStore`](frxdocs_site::DocsStore) shared by all handlers.
//!
//! # Quick Start
//!
//! ```ignore
//! use frxdocs_config::Config;
//! use frxdocs_server::{run_server, server_config_from_config};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::load(None, None).unwrap();
//!     let server_config = server_config_from_config(&config, env!("CARGO_PKG_VERSION").to_owned());
//!     run_server(server_config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum router (frxdocs-server)
//!                        │
//!                        ├─► HTML routes ──► templates ──► DocsStore
//!                        │
//!                        ├─► API routes (JSON) ──► DocsStore
//!                        │
//!                        └─► Embedded assets
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;
mod static_files;
mod templates;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use frxdocs_config::VersionList;
use frxdocs_site::DocsStore;

pub use error::ServerError;
use state::{AppState, SiteInfo};

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Path of the `docs.json` artifact.
    pub docs_path: PathBuf,
    /// Configured versions.
    pub versions: VersionList,
    /// Project name.
    pub site_name: String,
    /// Landing page tagline.
    pub tagline: String,
    /// Source repository URL.
    pub repository: Option<String>,
    /// Application version (part of every `ETag`).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            docs_path: PathBuf::from("data/docs.json"),
            versions: VersionList::default(),
            site_name: "frx".to_owned(),
            tagline: String::new(),
            repository: None,
            version: String::new(),
        }
    }
}

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the artifact cannot be loaded or the address cannot
/// be bound.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = DocsStore::load(&config.docs_path, config.versions.clone())?;

    let last_modified: DateTime<Utc> = std::fs::metadata(&config.docs_path)
        .and_then(|meta| meta.modified())
        .map_or_else(|_| Utc::now(), DateTime::from);

    let state = Arc::new(AppState {
        store,
        site: SiteInfo {
            name: config.site_name,
            tagline: config.tagline,
            repository: config.repository,
        },
        version: config.version,
        last_modified,
    });

    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        return;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from frxdocs config.
#[must_use]
pub fn server_config_from_config(config: &frxdocs_config::Config, version: String) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        docs_path: config.content_resolved.output_path.clone(),
        versions: config.versions.clone(),
        site_name: config.site.name.clone(),
        tagline: config.site.tagline.clone(),
        repository: config.site.repository.clone(),
        version,
    }
}
