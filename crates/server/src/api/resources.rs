//! Resource listing - the catalogue snapshot boundary.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use paperstack_core::Resource;

use crate::state::AppState;

use super::ErrorResponse;

#[derive(Debug, Serialize)]
pub struct ResourceListResponse {
    pub resources: Vec<Resource>,
    pub total: usize,
}

/// GET /api/v1/resources
///
/// The full verified resource list, newest first. Fetched once per page
/// load; all further filtering happens client-side (or via /catalogue).
pub async fn list_resources(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ResourceListResponse>, impl IntoResponse> {
    match state.resources().list_verified() {
        Ok(resources) => {
            let total = resources.len();
            Ok(Json(ResourceListResponse { resources, total }))
        }
        Err(e) => {
            tracing::error!("Failed to list resources: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}
