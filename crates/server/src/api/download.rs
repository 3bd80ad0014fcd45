//! Download API handler - the boundary to the blob store.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use paperstack_core::metrics::DOWNLOADS_SERVED_TOTAL;

use crate::state::AppState;

use super::ErrorResponse;

#[derive(Debug, Deserialize)]
pub struct DownloadParams {
    #[serde(default)]
    pub path: Option<String>,
}

/// GET /api/v1/download?path=...
///
/// Serves the blob as an attachment. A missing `path` is a client error;
/// any store failure is a server error. On success the matching resource
/// id (if the path is known) is recorded in the download tracker.
pub async fn download(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DownloadParams>,
) -> impl IntoResponse {
    let path = match params.path.as_deref().filter(|p| !p.is_empty()) {
        Some(path) => path.to_string(),
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "File path is required".to_string(),
                }),
            )
                .into_response()
        }
    };

    let blob = match state.blobs().download(&path).await {
        Ok(blob) => blob,
        Err(e) => {
            tracing::error!("Error downloading file {}: {}", path, e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to download file".to_string(),
                }),
            )
                .into_response();
        }
    };

    // Best-effort: track the download when the path maps to a known row.
    match state.resources().find_by_path(&path) {
        Ok(Some(resource)) => state.downloads().record(&resource.id),
        Ok(None) => {}
        Err(e) => tracing::warn!("Download lookup failed for {}: {}", path, e),
    }
    DOWNLOADS_SERVED_TOTAL.inc();

    let filename = path.rsplit('/').next().unwrap_or(&path).to_string();

    (
        [
            (header::CONTENT_TYPE, blob.content_type),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={filename}"),
            ),
        ],
        blob.bytes,
    )
        .into_response()
}
