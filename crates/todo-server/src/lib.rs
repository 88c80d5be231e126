//! Todo Server - htmx front end for todo-core
//!
//! Serves a page shell and HTML fragments that htmx swaps into the page.

pub mod config;
pub mod http;
pub mod render;

use std::path::Path;
use std::sync::{Arc, Mutex};

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use todo_core::Repository;

pub use config::{ConfigError, ServerConfig};

/// Shared application state
pub struct AppState {
    pub repository: Mutex<Repository>,
}

impl AppState {
    pub fn new(repository: Repository) -> Self {
        Self {
            repository: Mutex::new(repository),
        }
    }

    /// Open the database at `db_path`
    pub fn with_persistence(db_path: impl AsRef<Path>) -> todo_core::Result<Self> {
        let repository = Repository::new(db_path)?;
        Ok(Self::new(repository))
    }

    /// Backed by a private in-memory database
    pub fn in_memory() -> todo_core::Result<Self> {
        Ok(Self::new(Repository::in_memory()?))
    }
}

/// Create the router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(http::index))
        .route("/todos", get(http::list_todos))
        .route("/todos", post(http::create_todo))
        .route("/todos/toggle/{id}", post(http::toggle_todo))
        .route("/todos/{id}", delete(http::delete_todo))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server
pub async fn serve(addr: &str, state: Arc<AppState>) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Todo server listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
