//! paperstack-core - domain logic for the academic resource sharing service.
//!
//! The catalogue engine ([`catalog`]) is the heart of the crate: a pure
//! filter/sort/paginate pipeline over an immutable snapshot of verified
//! resources. Around it sit the resource metadata store ([`resource`]), the
//! blob store ([`blob`]), the download tracker ([`downloads`]) and the
//! upload pipeline ([`upload`]).

pub mod blob;
pub mod catalog;
pub mod config;
pub mod downloads;
pub mod metrics;
pub mod resource;
pub mod testing;
pub mod units;
pub mod upload;

pub use blob::{content_type_for, Blob, BlobError, BlobStore, FsBlobStore};
pub use catalog::{
    category_options, debounced, visible_page, CatalogueEngine, CataloguePage, CatalogueQuery,
    Debouncer, LayoutType, SortOption, PER_PAGE_OPTIONS, SEARCH_DEBOUNCE_MS,
};
pub use config::{
    load_config, load_config_from_str, validate_config, CatalogueConfig, Config, ConfigError,
    DatabaseConfig, DownloadsConfig, ServerConfig, StorageConfig,
};
pub use downloads::{DownloadTracker, JsonFileTracker, MemoryTracker};
pub use resource::{
    NewResource, Resource, ResourceStore, ResourceStoreError, SqliteResourceStore,
    TYPE_LESSON_NOTES, TYPE_PAST_PAPER,
};
pub use units::{unit_label, Unit, ALLOWED_UNITS};
pub use upload::{
    generate_file_name, FieldIssue, ResourceKind, UploadError, UploadForm, UploadedFile, Uploader,
    ValidatedUpload, ACCEPTED_FILE_TYPES, MAX_FILE_SIZE,
};
