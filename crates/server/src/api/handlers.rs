use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use paperstack_core::{Config, Unit, ALLOWED_UNITS};

use crate::metrics;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<Config> {
    Json(state.config().clone())
}

/// The fixed unit list backing the upload form dropdown.
pub async fn get_units() -> Json<&'static [Unit]> {
    Json(ALLOWED_UNITS)
}

pub async fn get_metrics() -> String {
    metrics::gather()
}
