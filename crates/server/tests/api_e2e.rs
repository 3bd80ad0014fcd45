//! End-to-end API tests running the full server stack in-process.

mod common;

use axum::http::StatusCode;
use http_body_util::BodyExt;
use paperstack_core::DownloadTracker;

use common::TestFixture;

// =============================================================================
// Basic API Tests
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let fixture = TestFixture::new();
    let response = fixture.get("/api/v1/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}

#[tokio::test]
async fn test_config_endpoint_exposes_catalogue_settings() {
    let fixture = TestFixture::new();
    let response = fixture.get("/api/v1/config").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["catalogue"]["debounce_ms"], 300);
    assert_eq!(response.body["catalogue"]["default_per_page"], 18);
}

#[tokio::test]
async fn test_units_endpoint_lists_selectable_units() {
    let fixture = TestFixture::new();
    let response = fixture.get("/api/v1/units").await;

    assert_eq!(response.status, StatusCode::OK);
    let units = response.body.as_array().unwrap();
    assert_eq!(units.len(), 5);
    assert!(units
        .iter()
        .any(|u| u["value"] == "hci" && u["label"] == "Human Centered Interaction"));
}

#[tokio::test]
async fn test_metrics_endpoint_renders_prometheus_text() {
    let fixture = TestFixture::new();
    let response = fixture.get_raw("/api/v1/metrics").await;

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("paperstack_downloads_served_total"));
}

// =============================================================================
// Resource List Tests
// =============================================================================

#[tokio::test]
async fn test_resources_empty_initially() {
    let fixture = TestFixture::new();
    let response = fixture.get("/api/v1/resources").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 0);
    assert!(response.body["resources"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_resources_lists_verified_newest_first() {
    let fixture = TestFixture::new();
    let older = fixture.seed_resource("Algebra", "past_paper", Some(2022));
    let newer = fixture.seed_resource("Biology", "lesson_notes", None);

    let response = fixture.get("/api/v1/resources").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 2);
    let resources = response.body["resources"].as_array().unwrap();
    assert_eq!(resources[0]["id"], newer.id);
    assert_eq!(resources[1]["id"], older.id);
}

// =============================================================================
// Catalogue Tests
// =============================================================================

#[tokio::test]
async fn test_catalogue_search_matches_unit_name() {
    let fixture = TestFixture::new();
    fixture.seed_resource("Machine Learning", "lesson_notes", None);
    fixture.seed_resource("Algebra", "past_paper", Some(2023));

    let response = fixture.get("/api/v1/catalogue?search=machine").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total_count"], 1);
    assert_eq!(response.body["items"][0]["unit_name"], "Machine Learning");
}

#[tokio::test]
async fn test_catalogue_type_filter() {
    let fixture = TestFixture::new();
    fixture.seed_resource("Algebra", "past_paper", Some(2023));
    fixture.seed_resource("Biology", "lesson_notes", None);

    let filtered = fixture.get("/api/v1/catalogue?type=past_paper").await;
    assert_eq!(filtered.body["total_count"], 1);
    assert_eq!(filtered.body["items"][0]["resource_type"], "past_paper");

    // "all" disables the filter.
    let all = fixture.get("/api/v1/catalogue?type=all").await;
    assert_eq!(all.body["total_count"], 2);
}

#[tokio::test]
async fn test_catalogue_name_sort() {
    let fixture = TestFixture::new();
    fixture.seed_resource("Zoology", "past_paper", Some(2021));
    fixture.seed_resource("Algebra", "past_paper", Some(2023));

    let response = fixture.get("/api/v1/catalogue?sort=name-asc").await;
    let items = response.body["items"].as_array().unwrap();
    assert_eq!(items[0]["unit_name"], "Algebra");
    assert_eq!(items[1]["unit_name"], "Zoology");
}

#[tokio::test]
async fn test_catalogue_pagination_and_page_clamp() {
    let fixture = TestFixture::new();
    fixture.seed_resource("Algebra", "past_paper", Some(2021));
    fixture.seed_resource("Biology", "past_paper", Some(2022));
    fixture.seed_resource("Chemistry", "past_paper", Some(2023));

    let response = fixture
        .get("/api/v1/catalogue?per_page=2&page=2")
        .await;
    assert_eq!(response.body["total_count"], 3);
    assert_eq!(response.body["total_pages"], 2);
    assert_eq!(response.body["page"], 2);
    assert_eq!(response.body["items"].as_array().unwrap().len(), 1);

    // A cursor past the end clamps to the last page instead of going blank.
    let clamped = fixture
        .get("/api/v1/catalogue?per_page=2&page=9")
        .await;
    assert_eq!(clamped.body["page"], 2);
    assert_eq!(clamped.body["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_catalogue_category_options_include_all() {
    let fixture = TestFixture::new();
    fixture.seed_resource("Algebra", "past_paper", Some(2023));
    fixture.seed_resource("Biology", "lesson_notes", None);

    let response = fixture.get("/api/v1/catalogue").await;
    let options = response.body["category_options"].as_array().unwrap();
    assert_eq!(options[0], "all");
    assert!(options.iter().any(|o| o == "past_paper"));
    assert!(options.iter().any(|o| o == "lesson_notes"));
}

#[tokio::test]
async fn test_catalogue_layout_drives_grid_classes() {
    let fixture = TestFixture::new();

    let row = fixture.get("/api/v1/catalogue?layout=row").await;
    assert_eq!(row.body["grid_classes"], "grid-cols-1 gap-4");

    let default = fixture.get("/api/v1/catalogue").await;
    assert_eq!(
        default.body["grid_classes"],
        "grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6"
    );
}

// =============================================================================
// Download Tests
// =============================================================================

#[tokio::test]
async fn test_download_requires_path() {
    let fixture = TestFixture::new();

    let missing = fixture.get("/api/v1/download").await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing.body["error"], "File path is required");

    let empty = fixture.get("/api/v1/download?path=").await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);
    assert_eq!(empty.body["error"], "File path is required");
}

#[tokio::test]
async fn test_download_unknown_path_is_server_error() {
    let fixture = TestFixture::new();
    let response = fixture
        .get("/api/v1/download?path=past_paper/missing.pdf")
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["error"], "Failed to download file");
}

#[tokio::test]
async fn test_download_serves_attachment_and_records_it() {
    let fixture = TestFixture::new();
    let resource = fixture.seed_resource("Machine Learning", "lesson_notes", None);
    assert!(!fixture.downloads.is_downloaded(&resource.id));

    let response = fixture
        .get_raw(&format!("/api/v1/download?path={}", resource.file_path))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "application/pdf"
    );
    assert_eq!(
        response.headers()["content-disposition"].to_str().unwrap(),
        format!("attachment; filename={}", resource.file_name)
    );

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"%PDF-1.4 seeded");

    assert!(fixture.downloads.is_downloaded(&resource.id));
}

#[tokio::test]
async fn test_downloaded_resources_sort_first() {
    let fixture = TestFixture::new();
    let plain = fixture.seed_resource("Algebra", "past_paper", Some(2023));
    let fetched = fixture.seed_resource("Biology", "past_paper", Some(2022));

    fixture
        .get_raw(&format!("/api/v1/download?path={}", fetched.file_path))
        .await;

    let response = fixture
        .get("/api/v1/catalogue?sort=downloaded-first")
        .await;
    let items = response.body["items"].as_array().unwrap();
    assert_eq!(items[0]["id"], fetched.id);
    assert_eq!(items[1]["id"], plain.id);
}
