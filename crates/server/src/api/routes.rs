use axum::{
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use paperstack_core::MAX_FILE_SIZE;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use super::{catalogue, download, handlers, middleware, resources, upload};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // Dashboard static files path (configurable via env)
    let dashboard_dir =
        std::env::var("DASHBOARD_DIR").unwrap_or_else(|_| "dashboard/dist".to_string());

    // Raw blobs are also served directly; public_url points here.
    let files_dir = state.config().storage.root.clone();

    // API routes
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        .route("/metrics", get(handlers::get_metrics))
        .route("/units", get(handlers::get_units))
        // Catalogue
        .route("/resources", get(resources::list_resources))
        .route("/catalogue", get(catalogue::get_catalogue))
        // Blob boundary
        .route("/download", get(download::download))
        .route(
            "/upload",
            post(upload::upload)
                // Room for several attachments plus multipart framing; each
                // file is capped at MAX_FILE_SIZE by validation.
                .layer(DefaultBodyLimit::max(MAX_FILE_SIZE as usize * 6)),
        )
        .with_state(state);

    // Serve dashboard with SPA fallback
    let index_path = format!("{}/index.html", dashboard_dir);
    let serve_dir = ServeDir::new(&dashboard_dir).fallback(ServeFile::new(&index_path));

    Router::new()
        .nest("/api/v1", api_routes)
        .nest_service("/files", ServeDir::new(files_dir))
        .fallback_service(serve_dir)
        .layer(axum_middleware::from_fn(middleware::metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
