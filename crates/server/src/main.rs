use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use paperstack_core::{
    load_config, validate_config, BlobStore, Config, DownloadTracker, FsBlobStore,
    JsonFileTracker, ResourceStore, SqliteResourceStore,
};

use paperstack_server::api::create_router;
use paperstack_server::state::AppState;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine config path
    let config_path = std::env::var("PAPERSTACK_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration; a missing default file just means defaults.
    let config = if config_path.exists() || std::env::var("PAPERSTACK_CONFIG").is_ok() {
        info!("Loading configuration from {:?}", config_path);
        load_config(&config_path)
            .with_context(|| format!("Failed to load config from {:?}", config_path))?
    } else {
        info!("No config file found, using defaults");
        Config::default()
    };

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully");
    info!("Database path: {:?}", config.database.path);
    info!("Storage bucket: {:?}", config.storage.root);

    // Create SQLite resource store
    let resources: Arc<dyn ResourceStore> = Arc::new(
        SqliteResourceStore::new(&config.database.path)
            .context("Failed to create resource store")?,
    );
    info!("Resource store initialized");

    // Create blob store, creating the bucket directory if needed
    std::fs::create_dir_all(&config.storage.root)
        .with_context(|| format!("Failed to create storage bucket {:?}", config.storage.root))?;
    let blobs: Arc<dyn BlobStore> = Arc::new(FsBlobStore::new(
        config.storage.root.clone(),
        config.storage.public_base_url.clone(),
    ));
    if let Err(e) = blobs.validate().await {
        warn!("Blob store validation failed: {}", e);
    }
    info!("Blob store initialized");

    // Create download tracker
    let downloads: Arc<dyn DownloadTracker> =
        Arc::new(JsonFileTracker::open(&config.downloads.tracker_path));
    info!(
        "Download tracker initialized ({} downloads on record)",
        downloads.downloaded_ids().len()
    );

    // Create app state
    let state = Arc::new(AppState::new(config.clone(), resources, blobs, downloads));

    // Create router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(config.server.host, config.server.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutting down...");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
