//! Blob storage - the object store holding the uploaded documents.
//!
//! Keyed by a path string (`{resource_type}/{file_name}`). The filesystem
//! implementation keeps everything under a configured bucket directory.

mod fs;

pub use fs::FsBlobStore;

use async_trait::async_trait;
use thiserror::Error;

/// Bytes plus content type, as returned by a download.
#[derive(Debug, Clone)]
pub struct Blob {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// Trait for blob storage backends.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store bytes under the given path, creating intermediate directories.
    async fn upload(&self, path: &str, bytes: &[u8]) -> Result<(), BlobError>;

    /// Fetch the blob stored under the given path.
    async fn download(&self, path: &str) -> Result<Blob, BlobError>;

    /// Externally resolvable URL for the given path.
    fn public_url(&self, path: &str) -> String;

    /// Check that the backend is properly configured and reachable.
    async fn validate(&self) -> Result<(), BlobError>;
}

/// Errors for blob store operations.
#[derive(Debug, Error)]
pub enum BlobError {
    /// The bucket (storage root) is missing or not a directory. Kept
    /// distinct from generic failures so callers can surface an
    /// actionable configuration message.
    #[error("Storage bucket not configured: {0}")]
    BucketMissing(String),

    #[error("Blob not found: {0}")]
    NotFound(String),

    #[error("Invalid blob path: {0}")]
    InvalidPath(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BlobError {
    /// Whether this is the storage-misconfiguration case that deserves an
    /// actionable message rather than a generic failure.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::BucketMissing(_))
    }
}

/// MIME type for a blob path, from its extension.
pub fn content_type_for(path: &str) -> &'static str {
    let ext = path.rsplit('.').next().unwrap_or_default();
    match ext.to_ascii_lowercase().as_str() {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "ppt" => "application/vnd.ms-powerpoint",
        "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        _ => "application/octet-stream",
    }
}
