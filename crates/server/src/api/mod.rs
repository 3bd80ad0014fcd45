pub mod catalogue;
pub mod download;
pub mod handlers;
pub mod middleware;
pub mod resources;
pub mod routes;
pub mod upload;

pub use routes::create_router;

use serde::Serialize;

/// Shared error envelope for API responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
