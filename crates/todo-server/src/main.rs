//! Todo Server Binary

use std::sync::Arc;

use todo_server::{serve, AppState, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,todo_server=debug,tower_http=debug".into()),
        )
        .init();

    let config = ServerConfig::load()?;
    let state = Arc::new(AppState::with_persistence(&config.database_path)?);

    serve(&config.addr, state).await
}
