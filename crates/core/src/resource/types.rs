//! Types for the resource store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Resource type value for past exam papers.
pub const TYPE_PAST_PAPER: &str = "past_paper";
/// Resource type value for weekly lesson notes.
pub const TYPE_LESSON_NOTES: &str = "lesson_notes";

/// An uploaded academic document plus its metadata.
///
/// `resource_type` is kept as a plain string: the upload pipeline only admits
/// the closed set, but rows with other values still render generically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    /// Opaque unique identifier (UUID v4).
    pub id: String,
    /// Display label for the academic unit.
    pub unit_name: String,
    /// One of `past_paper` / `lesson_notes`.
    pub resource_type: String,
    /// Generated file name (last segment of `file_path`).
    pub file_name: String,
    /// Key into the blob store.
    pub file_path: String,
    /// Size in bytes.
    pub file_size: u64,
    /// MIME type of the stored blob.
    pub file_type: String,
    /// Externally resolvable link to the blob.
    pub public_url: String,
    /// Year the paper was sat (past papers).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_completed: Option<i32>,
    /// Candidate cohort label (past papers).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_of_candidates: Option<String>,
    /// Semester label (past papers).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester: Option<String>,
    /// Teaching week, 1-14 (lesson notes).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_number: Option<i32>,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
    /// Admin flag gating visibility in the public catalogue.
    pub is_verified: bool,
}

/// Input for creating a resource row. Id, timestamp and the verification
/// flag are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewResource {
    pub unit_name: String,
    pub resource_type: String,
    pub file_name: String,
    pub file_path: String,
    pub file_size: u64,
    pub file_type: String,
    pub public_url: String,
    pub year_completed: Option<i32>,
    pub year_of_candidates: Option<String>,
    pub semester: Option<String>,
    pub week_number: Option<i32>,
}

/// Errors for resource store operations.
#[derive(Debug, Error)]
pub enum ResourceStoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Not found: {0}")]
    NotFound(String),
}
