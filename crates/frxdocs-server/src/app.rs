//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{api, pages};
use crate::middleware::security;
use crate::state::AppState;
use crate::static_files;

/// Create the application router.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let page_routes = Router::new()
        .route("/", get(pages::landing))
        .route("/docs", get(pages::docs_index))
        .route("/docs/", get(pages::docs_index))
        .route("/docs/{version}", get(pages::version_page))
        .route("/docs/{version}/{section}", get(pages::section_page));

    let api_routes = Router::new()
        .route("/api/versions", get(api::get_versions))
        .route("/api/docs/{version}", get(api::get_document))
        .route("/api/docs/{version}/{section}", get(api::get_section));

    let router = Router::new()
        .merge(page_routes)
        .merge(api_routes)
        .merge(static_files::static_router());

    security::with_security_headers(router)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}
