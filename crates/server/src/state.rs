use std::sync::Arc;

use paperstack_core::{BlobStore, Config, DownloadTracker, ResourceStore, Uploader};

/// Shared application state
pub struct AppState {
    config: Config,
    resources: Arc<dyn ResourceStore>,
    blobs: Arc<dyn BlobStore>,
    downloads: Arc<dyn DownloadTracker>,
}

impl AppState {
    pub fn new(
        config: Config,
        resources: Arc<dyn ResourceStore>,
        blobs: Arc<dyn BlobStore>,
        downloads: Arc<dyn DownloadTracker>,
    ) -> Self {
        Self {
            config,
            resources,
            blobs,
            downloads,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn resources(&self) -> Arc<dyn ResourceStore> {
        Arc::clone(&self.resources)
    }

    pub fn blobs(&self) -> Arc<dyn BlobStore> {
        Arc::clone(&self.blobs)
    }

    pub fn downloads(&self) -> Arc<dyn DownloadTracker> {
        Arc::clone(&self.downloads)
    }

    pub fn uploader(&self) -> Uploader {
        Uploader::new(self.blobs(), self.resources())
    }
}
