//! JSON API endpoints.
//!
//! Expose the built artifact as-is: documents and sections use the same
//! shape as `docs.json`.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use frxdocs_config::Version;
use frxdocs_document::{Document, Section};
use serde::Serialize;

use crate::error::ServerError;
use crate::state::AppState;

/// Response for GET /api/versions.
#[derive(Serialize)]
pub(crate) struct VersionsResponse {
    /// Versions in configuration order.
    versions: Vec<Version>,
    /// Id of the latest version.
    latest: Option<String>,
}

/// Handle GET /api/versions.
pub(crate) async fn get_versions(State(state): State<Arc<AppState>>) -> Json<VersionsResponse> {
    Json(VersionsResponse {
        versions: state.store.versions().to_vec(),
        latest: state.store.latest_version().map(str::to_owned),
    })
}

/// Handle GET /api/docs/{version}.
pub(crate) async fn get_document(
    Path(version): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Document>, ServerError> {
    state
        .store
        .get_doc_data(&version)
        .cloned()
        .map(Json)
        .ok_or(ServerError::VersionNotFound(version))
}

/// Handle GET /api/docs/{version}/{section}.
pub(crate) async fn get_section(
    Path((version, section)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Section>, ServerError> {
    let document = state
        .store
        .get_doc_data(&version)
        .ok_or_else(|| ServerError::VersionNotFound(version.clone()))?;
    document
        .section(&section)
        .cloned()
        .map(Json)
        .ok_or(ServerError::SectionNotFound { version, section })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_versions_response_serialization() {
        let response = VersionsResponse {
            versions: vec![Version {
                id: "v0.0.2".to_owned(),
                label: "v0.0.2".to_owned(),
                is_latest: true,
            }],
            latest: Some("v0.0.2".to_owned()),
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["versions"][0]["id"], "v0.0.2");
        assert_eq!(json["versions"][0]["isLatest"], true);
        assert_eq!(json["latest"], "v0.0.2");
    }
}
