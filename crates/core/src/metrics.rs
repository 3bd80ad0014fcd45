//! Prometheus metrics for core components.

use once_cell::sync::Lazy;
use prometheus::{IntCounter, IntCounterVec, Opts, Registry};

/// Upload attempts by result ("success", "validation_failed", "storage_failed").
pub static UPLOADS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("paperstack_uploads_total", "Total upload attempts"),
        &["result"],
    )
    .unwrap()
});

/// Individual files stored by successful uploads.
pub static UPLOAD_FILES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "paperstack_upload_files_total",
        "Total files stored via upload",
    )
    .unwrap()
});

/// Downloads served from the blob store.
pub static DOWNLOADS_SERVED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "paperstack_downloads_served_total",
        "Total resource downloads served",
    )
    .unwrap()
});

/// Register the core metrics with a registry.
pub fn register_core_metrics(registry: &Registry) {
    let _ = registry.register(Box::new(UPLOADS_TOTAL.clone()));
    let _ = registry.register(Box::new(UPLOAD_FILES_TOTAL.clone()));
    let _ = registry.register(Box::new(DOWNLOADS_SERVED_TOTAL.clone()));
}
