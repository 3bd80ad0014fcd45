//! Resource metadata store.
//!
//! One row per uploaded document. Only verified rows are ever handed to the
//! catalogue; new uploads start unverified and are flipped by an admin.

mod sqlite;
mod types;

pub use sqlite::SqliteResourceStore;
pub use types::*;

/// Trait for resource metadata storage.
pub trait ResourceStore: Send + Sync {
    /// Insert a new resource row.
    ///
    /// The store assigns the id and creation timestamp. New rows are always
    /// unverified.
    fn insert(&self, new: &NewResource) -> Result<Resource, ResourceStoreError>;

    /// List all verified resources, newest first.
    ///
    /// This is the catalogue snapshot boundary: the full list is fetched once
    /// per page load and filtered in memory from there.
    fn list_verified(&self) -> Result<Vec<Resource>, ResourceStoreError>;

    /// Look up a resource by its blob store path.
    fn find_by_path(&self, file_path: &str) -> Result<Option<Resource>, ResourceStoreError>;

    /// Flip the verification flag, making the resource publicly visible.
    fn mark_verified(&self, id: &str) -> Result<(), ResourceStoreError>;

    /// Total number of rows, verified or not.
    fn count(&self) -> Result<u64, ResourceStoreError>;
}
