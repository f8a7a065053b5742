//! Axum server setup
//!
//! Server skeleton with:
//! - Localhost-only CORS by default
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;
use crate::config::AppConfig;

/// Origins allowed when CORS is not permissive
const LOCAL_ORIGINS: &[&str] = &[
    "http://localhost:5002",
    "http://127.0.0.1:5002",
    "http://localhost:3000",
    "http://127.0.0.1:3000",
];

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:5002)
    pub bind_addr: SocketAddr,

    /// Allow permissive CORS (default: false = localhost only)
    ///
    /// WARNING: Setting this to true allows any origin.
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5002)),
            cors_permissive: false,
        }
    }
}

/// Shared application state.
///
/// Immutable after startup; handlers only borrow the pool from it.
pub struct AppState {
    pub pool: PgPool,
    pub config: AppConfig,
}

/// Build the application router with all routes and layers.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = if state.config.server.cors_permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = LOCAL_ORIGINS
            .iter()
            .copied()
            .map(HeaderValue::from_static)
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .merge(routes::health::router())
        .merge(routes::libraries::router())
        .merge(routes::staff::router())
        .merge(routes::sponsors::router())
        .merge(routes::visitors::router())
        .merge(routes::stats::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server until Ctrl+C or SIGTERM.
///
/// # Example
///
/// ```ignore
/// let config = AppConfig::from_env()?;
/// let pool = create_pool(&config.db).await?;
/// run_server(pool, config).await?;
/// ```
pub async fn run_server(pool: PgPool, config: AppConfig) -> Result<(), ServerError> {
    if config.uses_dev_secret() {
        tracing::warn!("SECRET_KEY not set, using development secret");
    }
    let bind_addr = config.server.bind_addr;
    let app = build_router(Arc::new(AppState { pool, config }));

    let listener = TcpListener::bind(bind_addr).await?;
    tracing::info!("Server listening on {}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
