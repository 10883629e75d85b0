//! Static File Serving
//!
//! Serves the optional browser frontend (upload page, `process.html`) from
//! the configured static directory. Paths that match no API route fall
//! through to it.

use axum::Router;
use std::path::Path;
use tower_http::services::ServeDir;
use tracing::{info, warn};

pub fn router(static_dir: &Path) -> Router {
    if static_dir.is_dir() {
        info!(path = %static_dir.display(), "Serving static frontend");
    } else {
        warn!(path = %static_dir.display(), "Static directory not found, frontend will 404");
    }

    Router::new().fallback_service(ServeDir::new(static_dir).append_index_html_on_directories(true))
}
