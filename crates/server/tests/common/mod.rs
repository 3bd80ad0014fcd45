//! Common test utilities for in-process API testing.
//!
//! Builds the real router over an in-memory resource store, a tempdir blob
//! bucket and a tempdir download tracker, so endpoint tests need no running
//! server or external storage.

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use paperstack_core::{
    Config, FsBlobStore, JsonFileTracker, NewResource, Resource, ResourceStore,
    SqliteResourceStore,
};
use paperstack_server::api::create_router;
use paperstack_server::state::AppState;

pub const BOUNDARY: &str = "paperstack-test-boundary";

/// Test fixture wrapping an in-process server with temp-backed storage.
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Handle to the resource store, for seeding and assertions
    pub resources: Arc<SqliteResourceStore>,
    /// Handle to the download tracker
    pub downloads: Arc<JsonFileTracker>,
    /// Bucket directory for raw blob assertions
    pub bucket: PathBuf,
    /// Keeps the temp storage alive for the test duration
    #[allow(dead_code)]
    pub temp_dir: TempDir,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Create a fixture with a fresh bucket directory.
    pub fn new() -> Self {
        Self::build(true)
    }

    /// Create a fixture whose bucket directory is missing, to exercise the
    /// storage-misconfiguration path.
    pub fn without_bucket() -> Self {
        Self::build(false)
    }

    fn build(create_bucket: bool) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let bucket = temp_dir.path().join("resources");
        if create_bucket {
            std::fs::create_dir_all(&bucket).unwrap();
        }

        let mut config = Config::default();
        config.storage.root = bucket.clone();
        config.downloads.tracker_path = temp_dir.path().join("downloads.json");

        let resources = Arc::new(SqliteResourceStore::in_memory().unwrap());
        let blobs = Arc::new(FsBlobStore::new(
            bucket.clone(),
            config.storage.public_base_url.clone(),
        ));
        let downloads = Arc::new(JsonFileTracker::open(&config.downloads.tracker_path));

        let app_state = Arc::new(AppState::new(
            config,
            resources.clone(),
            blobs,
            downloads.clone(),
        ));
        let router = create_router(app_state);

        Self {
            router,
            resources,
            downloads,
            bucket,
            temp_dir,
        }
    }

    /// Seed a verified resource and its backing blob.
    pub fn seed_resource(&self, unit_name: &str, resource_type: &str, year: Option<i32>) -> Resource {
        let file_name = format!("{}_{}.pdf", unit_name.replace(' ', "_"), resource_type);
        let file_path = format!("{resource_type}/{file_name}");

        let blob_path = self.bucket.join(&file_path);
        std::fs::create_dir_all(blob_path.parent().unwrap()).unwrap();
        std::fs::write(&blob_path, b"%PDF-1.4 seeded").unwrap();

        let resource = self
            .resources
            .insert(&NewResource {
                unit_name: unit_name.to_string(),
                resource_type: resource_type.to_string(),
                file_name,
                file_path,
                file_size: 15,
                file_type: "application/pdf".to_string(),
                public_url: String::new(),
                year_completed: year,
                year_of_candidates: None,
                semester: None,
                week_number: None,
            })
            .unwrap();
        self.resources.mark_verified(&resource.id).unwrap();
        resource
    }

    /// GET a path and parse the body as JSON.
    pub async fn get(&self, path: &str) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .uri(path)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        TestResponse { status, body }
    }

    /// GET a path and return the raw response for header/body assertions.
    pub async fn get_raw(&self, path: &str) -> axum::http::Response<Body> {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .uri(path)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// POST a multipart form built with [`MultipartBuilder`].
    pub async fn post_multipart(&self, path: &str, body: Vec<u8>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(path)
                    .header(
                        "content-type",
                        format!("multipart/form-data; boundary={BOUNDARY}"),
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        TestResponse { status, body }
    }
}

/// Builds multipart/form-data bodies for upload tests.
#[derive(Default)]
pub struct MultipartBuilder {
    body: Vec<u8>,
}

impl MultipartBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, file_name: &str, content_type: &str, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"files\"; \
                 filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn build(mut self) -> Vec<u8> {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        self.body
    }
}
