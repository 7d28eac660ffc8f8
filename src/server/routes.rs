//! Router configuration for the web server.

use std::path::Path;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

/// Create the router serving `site_dir`, with `index.html` for directories.
pub fn create_router(site_dir: &Path) -> Router {
    let files = ServeDir::new(site_dir).append_index_html_on_directories(true);
    Router::new()
        .fallback_service(files)
        .layer(CorsLayer::permissive())
}
