//! Upload API handler.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use paperstack_core::{FieldIssue, Resource, UploadError, UploadForm, UploadedFile};

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub resources: Vec<Resource>,
}

#[derive(Debug, Serialize)]
pub struct UploadFailure {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<FieldIssue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl UploadFailure {
    fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            issues: None,
            message: None,
        }
    }
}

/// POST /api/v1/upload
///
/// Multipart form: `unitName`, `resourceType`, conditional
/// `yearCompleted`/`yearOfCandidates`/`semester`/`weekNumber`, and one or
/// more `files` attachments.
pub async fn upload(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, impl IntoResponse> {
    let mut form = UploadForm::default();

    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "files" => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let content_type = field.content_type().unwrap_or("").to_string();
                match field.bytes().await {
                    Ok(bytes) => form.files.push(UploadedFile {
                        name: file_name,
                        content_type,
                        bytes: bytes.to_vec(),
                    }),
                    Err(e) => {
                        return Err((
                            StatusCode::BAD_REQUEST,
                            Json(UploadFailure::new(format!("Failed to read file: {}", e))),
                        ))
                    }
                }
            }
            "unitName" => form.unit_name = plain_text(field).await,
            "resourceType" => form.resource_type = plain_text(field).await,
            "yearCompleted" => form.year_completed = plain_text(field).await,
            "yearOfCandidates" => form.year_of_candidates = plain_text(field).await,
            "semester" => form.semester = plain_text(field).await,
            "weekNumber" => form.week_number = plain_text(field).await,
            _ => {}
        }
    }

    match state.uploader().upload(form).await {
        Ok(resources) => Ok(Json(UploadResponse {
            success: true,
            resources,
        })),
        Err(UploadError::Validation(issues)) => {
            let mut failure = UploadFailure::new("Validation failed");
            failure.issues = Some(issues);
            Err((StatusCode::BAD_REQUEST, Json(failure)))
        }
        Err(e) if e.is_storage_configuration() => {
            let mut failure = UploadFailure::new("Storage configuration error");
            failure.message =
                Some("Please contact administrator about bucket setup".to_string());
            Err((StatusCode::BAD_REQUEST, Json(failure)))
        }
        Err(e) => {
            tracing::error!("Upload failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(UploadFailure::new(e.to_string())),
            ))
        }
    }
}

async fn plain_text(field: axum::extract::multipart::Field<'_>) -> Option<String> {
    match field.text().await {
        Ok(text) if !text.is_empty() => Some(text),
        _ => None,
    }
}
