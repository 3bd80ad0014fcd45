//! Types for the upload pipeline.

use serde::Serialize;
use thiserror::Error;

use crate::blob::BlobError;
use crate::resource::{ResourceStoreError, TYPE_LESSON_NOTES, TYPE_PAST_PAPER};

/// Maximum size per uploaded file.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Document MIME types accepted by the upload form.
pub const ACCEPTED_FILE_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.ms-powerpoint",
    "application/vnd.openxmlformats-officedocument.presentationml.presentation",
];

/// One file attachment from the upload form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Original client file name.
    pub name: String,
    /// Declared MIME type.
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Raw upload form as received over the wire, before validation.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub unit_name: Option<String>,
    pub resource_type: Option<String>,
    pub year_completed: Option<String>,
    pub year_of_candidates: Option<String>,
    pub semester: Option<String>,
    pub week_number: Option<String>,
    pub files: Vec<UploadedFile>,
}

/// A single field-level validation failure.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldIssue {
    /// Form field the issue applies to.
    pub path: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(path: &str, message: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            message: message.into(),
        }
    }
}

/// The closed set of resource kinds the form admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    PastPaper,
    LessonNotes,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::PastPaper => TYPE_PAST_PAPER,
            ResourceKind::LessonNotes => TYPE_LESSON_NOTES,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            TYPE_PAST_PAPER => Some(ResourceKind::PastPaper),
            TYPE_LESSON_NOTES => Some(ResourceKind::LessonNotes),
            _ => None,
        }
    }
}

/// An upload form that passed validation, with numeric fields parsed once.
#[derive(Debug)]
pub struct ValidatedUpload {
    pub unit_name: String,
    pub kind: ResourceKind,
    pub year_completed: Option<i32>,
    pub year_of_candidates: Option<String>,
    pub semester: Option<String>,
    pub week_number: Option<i32>,
    pub files: Vec<UploadedFile>,
}

/// Errors for the upload pipeline.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The form failed validation; nothing was stored.
    #[error("Validation failed")]
    Validation(Vec<FieldIssue>),

    #[error(transparent)]
    Storage(#[from] BlobError),

    #[error(transparent)]
    Store(#[from] ResourceStoreError),
}

impl UploadError {
    /// Whether the underlying cause is a storage configuration problem
    /// (missing bucket) rather than a generic failure.
    pub fn is_storage_configuration(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_configuration())
    }
}
