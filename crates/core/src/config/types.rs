use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::PathBuf;

use crate::catalog::{PER_PAGE_OPTIONS, SEARCH_DEBOUNCE_MS};

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub downloads: DownloadsConfig,
    #[serde(default)]
    pub catalogue: CatalogueConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    "0.0.0.0".parse().unwrap()
}

fn default_port() -> u16 {
    8080
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from("paperstack.db")
}

/// Blob storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Bucket directory holding the uploaded documents.
    #[serde(default = "default_storage_root")]
    pub root: PathBuf,
    /// Base URL prefixed onto blob paths to form public links.
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: default_storage_root(),
            public_base_url: default_public_base_url(),
        }
    }
}

fn default_storage_root() -> PathBuf {
    PathBuf::from("resources")
}

fn default_public_base_url() -> String {
    "http://localhost:8080/files".to_string()
}

/// Download tracker configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DownloadsConfig {
    /// File holding the downloaded-resource id history.
    #[serde(default = "default_tracker_path")]
    pub tracker_path: PathBuf,
}

impl Default for DownloadsConfig {
    fn default() -> Self {
        Self {
            tracker_path: default_tracker_path(),
        }
    }
}

fn default_tracker_path() -> PathBuf {
    PathBuf::from("downloads.json")
}

/// Catalogue engine configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogueConfig {
    /// Quiet window before search input takes effect, in milliseconds.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Default page size; must be one of the enumerated options.
    #[serde(default = "default_per_page")]
    pub default_per_page: usize,
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            default_per_page: default_per_page(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    SEARCH_DEBOUNCE_MS
}

fn default_per_page() -> usize {
    PER_PAGE_OPTIONS[0]
}
