//! File-backed download tracker.
//!
//! One file holds a JSON array of resource id strings - the durable
//! key-value rendition of the browser's `downloadedItems` entry.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::warn;

use super::DownloadTracker;

/// Download tracker persisted as a JSON array in a single file.
pub struct JsonFileTracker {
    path: PathBuf,
    items: Mutex<Vec<String>>,
}

impl JsonFileTracker {
    /// Open a tracker backed by `path`, reading any existing state.
    ///
    /// An absent file starts empty; a malformed one is treated as empty
    /// with a warning, never an error.
    pub fn open(path: &Path) -> Self {
        let items = match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<Vec<String>>(&contents) {
                Ok(items) => items,
                Err(e) => {
                    warn!(
                        "Malformed download history at {}, starting empty: {}",
                        path.display(),
                        e
                    );
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };

        Self {
            path: path.to_path_buf(),
            items: Mutex::new(items),
        }
    }

    /// Write-through the current set. Failures keep the in-memory state.
    fn persist(&self, items: &[String]) {
        let json = match serde_json::to_string(items) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize download history: {}", e);
                return;
            }
        };

        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        if let Err(e) = std::fs::write(&self.path, json) {
            warn!(
                "Failed to persist download history to {}: {}",
                self.path.display(),
                e
            );
        }
    }
}

impl DownloadTracker for JsonFileTracker {
    fn record(&self, id: &str) {
        let mut items = self.items.lock().unwrap();
        if items.iter().any(|i| i == id) {
            return;
        }
        items.push(id.to_string());
        self.persist(&items);
    }

    fn is_downloaded(&self, id: &str) -> bool {
        self.items.lock().unwrap().iter().any(|i| i == id)
    }

    fn downloaded_ids(&self) -> Vec<String> {
        self.items.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_absent_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let tracker = JsonFileTracker::open(&dir.path().join("downloads.json"));
        assert!(tracker.downloaded_ids().is_empty());
    }

    #[test]
    fn test_malformed_file_degrades_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("downloads.json");
        std::fs::write(&path, "not json").unwrap();

        let tracker = JsonFileTracker::open(&path);
        assert!(tracker.downloaded_ids().is_empty());
    }

    #[test]
    fn test_record_round_trips_across_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("downloads.json");

        let tracker = JsonFileTracker::open(&path);
        tracker.record("r1");
        tracker.record("r2");
        assert!(tracker.is_downloaded("r1"));

        let reloaded = JsonFileTracker::open(&path);
        assert!(reloaded.is_downloaded("r1"));
        assert_eq!(reloaded.downloaded_ids(), vec!["r1", "r2"]);
    }

    #[test]
    fn test_duplicate_ids_tolerated_on_load_not_produced() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("downloads.json");
        std::fs::write(&path, r#"["r1","r1","r2"]"#).unwrap();

        let tracker = JsonFileTracker::open(&path);
        assert_eq!(tracker.downloaded_ids().len(), 3);

        tracker.record("r1");
        assert_eq!(tracker.downloaded_ids().len(), 3);
    }

    #[test]
    fn test_unwritable_path_degrades_to_memory_only() {
        let tracker = JsonFileTracker::open(Path::new("/proc/paperstack/downloads.json"));
        tracker.record("r1");
        assert!(tracker.is_downloaded("r1"));
    }
}
