//! Catanalyzer Server - HTTP API for the board editor
//!
//! This crate provides the web backend:
//! - Board editing (resources, number tokens, randomize, clear)
//! - Analysis of the current board with result selection
//! - Static file serving for the front-end

mod error;
mod routes;
mod state;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;

pub use error::ApiError;
pub use state::{BoardSession, ServerState};

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: String,
    /// Radius of the board the editor starts with
    pub radius: i32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8003,
            static_dir: "catanalyzer/web".to_string(),
            radius: catanalyzer_core::DEFAULT_RADIUS,
        }
    }
}

/// Create the router with all routes
pub fn create_router(config: &ServerConfig, state: Arc<ServerState>) -> Router {
    let static_service = ServeDir::new(&config.static_dir);

    Router::new()
        // Status endpoint
        .route("/api/status", get(routes::status::status_handler))
        // Board editor
        .route(
            "/api/board",
            get(routes::board::get_board).put(routes::board::replace_board),
        )
        .route("/api/board/resource", post(routes::board::set_resource))
        .route("/api/board/number", post(routes::board::set_number))
        .route("/api/board/randomize", post(routes::board::randomize_board))
        .route("/api/board/clear", post(routes::board::clear_board))
        // Analysis
        .route("/api/analyze", post(routes::analysis::run_analysis))
        .route("/api/analysis", get(routes::analysis::get_analysis))
        .route("/api/analysis/select", post(routes::analysis::select_spot))
        // Shared state
        .with_state(state)
        // Static file serving (must be last)
        .fallback_service(static_service)
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = Arc::new(ServerState::new(config.radius));
    let router = create_router(&config, state);

    tracing::info!("Catanalyzer server starting on http://0.0.0.0:{}", config.port);
    tracing::info!("Static files served from: {}", config.static_dir);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutting down");
}
