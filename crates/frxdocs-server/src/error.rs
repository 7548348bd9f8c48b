//! Error types for the JSON API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// No documentation for the version.
    #[error("Version not found: {0}")]
    VersionNotFound(String),

    /// The version exists but has no such section.
    #[error("Section \"{section}\" not found in version {version}")]
    SectionNotFound { version: String, section: String },
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let body = match &self {
            Self::VersionNotFound(version) => {
                json!({"error": "Version not found", "version": version})
            }
            Self::SectionNotFound { version, section } => json!({
                "error": self.to_string(),
                "version": version,
                "section": section,
            }),
        };

        (StatusCode::NOT_FOUND, axum::Json(body)).into_response()
    }
}
