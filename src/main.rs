use docqa::{config::Config, create_router, utils::init_logger, AppState};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded: {:?}", config.server);

    if !config.azure.is_complete() {
        warn!("Azure OpenAI is not fully configured; /ask will answer with an error message");
    }

    let host = config.server.host.clone();
    let port = config.server.port;

    // Create shared state and router
    let state = AppState::new(config);
    let app = create_router(state);

    // Start server
    let listener = TcpListener::bind((host.as_str(), port)).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
