//! Static file serving.
//!
//! The stylesheet and client script are compiled into the binary.

use std::sync::Arc;

use axum::Router;
use axum::extract::Path;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use crate::state::AppState;

/// Embedded assets: (file name, content type, body).
const ASSETS: &[(&str, &str, &str)] = &[
    ("app.css", "text/css; charset=utf-8", include_str!("../assets/app.css")),
    (
        "app.js",
        "text/javascript; charset=utf-8",
        include_str!("../assets/app.js"),
    ),
];

/// Look up an embedded asset by file name.
fn lookup(name: &str) -> Option<(&'static str, &'static str)> {
    ASSETS
        .iter()
        .find(|(file, _, _)| *file == name)
        .map(|&(_, mime, body)| (mime, body))
}

/// Create router for `/assets/*`.
pub(crate) fn static_router() -> Router<Arc<AppState>> {
    Router::new().route("/assets/{*path}", get(serve_asset))
}

async fn serve_asset(Path(path): Path<String>) -> Response {
    match lookup(&path) {
        Some((mime, body)) => (
            [
                (header::CONTENT_TYPE, mime),
                (header::CACHE_CONTROL, "public, max-age=3600"),
            ],
            body,
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_assets() {
        let (mime, body) = lookup("app.js").unwrap();
        assert!(mime.starts_with("text/javascript"));
        assert!(body.contains("IntersectionObserver"));

        let (mime, _) = lookup("app.css").unwrap();
        assert!(mime.starts_with("text/css"));
    }

    #[test]
    fn test_unknown_asset() {
        assert!(lookup("index.html").is_none());
        assert!(lookup("../Cargo.toml").is_none());
    }
}
