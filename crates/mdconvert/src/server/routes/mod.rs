//! API routes for the conversion server

pub mod convert;

use axum::{extract::DefaultBodyLimit, routing::post, Router};

use crate::server::state::AppState;

/// Build all API routes
pub fn api_routes(max_upload_size: usize) -> Router<AppState> {
    Router::new()
        // Conversion - with larger body limit for file uploads
        .route(
            "/convert/",
            post(convert::convert_file).layer(DefaultBodyLimit::max(max_upload_size)),
        )
}
