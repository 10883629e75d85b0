// docqa - upload a document, then ask questions about it through Azure OpenAI

pub mod analysis;
pub mod config;
pub mod extraction;
pub mod llm;
pub mod middleware;
pub mod models;
pub mod qa;
pub mod routes;
pub mod store;
pub mod types;
pub mod utils;

// Re-exports for convenience
pub use config::Config;
pub use models::AppState;

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
