//! File system blob store implementation.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use super::{content_type_for, Blob, BlobError, BlobStore};

/// Blob store rooted at a local bucket directory.
pub struct FsBlobStore {
    root: PathBuf,
    public_base_url: String,
}

impl FsBlobStore {
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve a blob key to an absolute path, rejecting traversal.
    fn resolve(&self, path: &str) -> Result<PathBuf, BlobError> {
        if path.is_empty() {
            return Err(BlobError::InvalidPath(path.to_string()));
        }

        let relative = Path::new(path);
        let safe = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        if !safe {
            return Err(BlobError::InvalidPath(path.to_string()));
        }

        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn upload(&self, path: &str, bytes: &[u8]) -> Result<(), BlobError> {
        self.validate().await?;

        let target = self.resolve(path)?;
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&target, bytes).await?;
        Ok(())
    }

    async fn download(&self, path: &str) -> Result<Blob, BlobError> {
        self.validate().await?;

        let target = self.resolve(path)?;
        let bytes = fs::read(&target).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BlobError::NotFound(path.to_string())
            } else {
                BlobError::Io(e)
            }
        })?;

        Ok(Blob {
            bytes,
            content_type: content_type_for(path).to_string(),
        })
    }

    fn public_url(&self, path: &str) -> String {
        format!("{}/{}", self.public_base_url, path)
    }

    async fn validate(&self) -> Result<(), BlobError> {
        match fs::metadata(&self.root).await {
            Ok(meta) if meta.is_dir() => Ok(()),
            _ => Err(BlobError::BucketMissing(self.root.display().to_string())),
        }
    }
}
