//! Testing utilities and mock implementations.
//!
//! Used by the in-crate unit tests and the server's integration tests, so
//! no real storage infrastructure is needed to exercise the API.

use async_trait::async_trait;

use crate::blob::{Blob, BlobError, BlobStore};

/// A blob store whose operations always fail, for error-path tests.
pub struct FailingBlobStore {
    kind: FailureKind,
}

enum FailureKind {
    Io,
    BucketMissing,
}

impl FailingBlobStore {
    /// Fails every call with a generic I/O error.
    pub fn io_error() -> Self {
        Self {
            kind: FailureKind::Io,
        }
    }

    /// Fails every call with the missing-bucket configuration error.
    pub fn bucket_missing() -> Self {
        Self {
            kind: FailureKind::BucketMissing,
        }
    }

    fn error(&self) -> BlobError {
        match self.kind {
            FailureKind::Io => BlobError::Io(std::io::Error::other("simulated failure")),
            FailureKind::BucketMissing => BlobError::BucketMissing("resources".to_string()),
        }
    }
}

#[async_trait]
impl BlobStore for FailingBlobStore {
    async fn upload(&self, _path: &str, _bytes: &[u8]) -> Result<(), BlobError> {
        Err(self.error())
    }

    async fn download(&self, _path: &str) -> Result<Blob, BlobError> {
        Err(self.error())
    }

    fn public_url(&self, path: &str) -> String {
        format!("http://localhost/files/{path}")
    }

    async fn validate(&self) -> Result<(), BlobError> {
        Err(self.error())
    }
}

/// Test fixtures and helper functions.
pub mod fixtures {
    use chrono::Utc;

    use crate::resource::Resource;

    /// Create a verified test resource with reasonable defaults.
    pub fn resource(
        id: &str,
        unit_name: &str,
        resource_type: &str,
        year_completed: Option<i32>,
    ) -> Resource {
        Resource {
            id: id.to_string(),
            unit_name: unit_name.to_string(),
            resource_type: resource_type.to_string(),
            file_name: format!("{id}.pdf"),
            file_path: format!("{resource_type}/{id}.pdf"),
            file_size: 1024,
            file_type: "application/pdf".to_string(),
            public_url: format!("http://localhost:8080/files/{resource_type}/{id}.pdf"),
            year_completed,
            year_of_candidates: None,
            semester: None,
            week_number: None,
            created_at: Utc::now(),
            is_verified: true,
        }
    }
}
