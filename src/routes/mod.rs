//! API Routes
//!
//! - `POST /upload` - upload a document and extract its text
//! - `POST /process` - word count and excerpt of the current document
//! - `POST /ask` - question answering over the current document
//! - `GET /health` - health check
//! - everything else - static frontend

pub mod ask;
pub mod health;
pub mod process;
pub mod static_files;
pub mod upload;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::middleware::apply_cors;
use crate::models::AppState;

pub(crate) const NO_DOCUMENT: &str = "No document analyzed yet";
pub(crate) const NO_FILE_UPLOADED: &str = "No file uploaded";
pub(crate) const NO_FILE_SELECTED: &str = "No selected file";
pub(crate) const NO_READABLE_CONTENT: &str = "File uploaded but no readable content found";

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let static_dir = state.config.server.static_dir.clone();
    let cors_origins = state.config.server.cors_allowed_origins.clone();

    let router = Router::new()
        .merge(upload::router(state.clone()))
        .merge(process::router(state.clone()))
        .merge(ask::router(state.clone()))
        .merge(health::router(state))
        .merge(static_files::router(&static_dir))
        .layer(TraceLayer::new_for_http());

    apply_cors(router, &cors_origins)
}
