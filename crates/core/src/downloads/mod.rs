//! Download tracking - which resource ids the local user has fetched.
//!
//! Backs the downloaded-first sort and the per-card "downloaded" badge.
//! Persistence is best-effort: a missing or corrupt file degrades to an
//! empty set, and write failures degrade to in-memory-only tracking for
//! the session. Nothing here is ever fatal.

mod json_file;

pub use json_file::JsonFileTracker;

use std::sync::Mutex;

/// Trait for tracking completed downloads across sessions.
pub trait DownloadTracker: Send + Sync {
    /// Record a completed download. Idempotent; duplicates are not added.
    fn record(&self, id: &str);

    /// Whether the given resource id has been downloaded.
    fn is_downloaded(&self, id: &str) -> bool;

    /// All downloaded ids, in recording order.
    fn downloaded_ids(&self) -> Vec<String>;
}

/// In-memory tracker, used when durable storage is unavailable and in tests.
#[derive(Default)]
pub struct MemoryTracker {
    items: Mutex<Vec<String>>,
}

impl MemoryTracker {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DownloadTracker for MemoryTracker {
    fn record(&self, id: &str) {
        let mut items = self.items.lock().unwrap();
        if !items.iter().any(|i| i == id) {
            items.push(id.to_string());
        }
    }

    fn is_downloaded(&self, id: &str) -> bool {
        self.items.lock().unwrap().iter().any(|i| i == id)
    }

    fn downloaded_ids(&self) -> Vec<String> {
        self.items.lock().unwrap().clone()
    }
}
