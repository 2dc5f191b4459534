//! REST API for the catalog and the sizing calculation.
//!
//! Endpoints:
//! - `GET /catalog`: loads with their default attributes
//! - `GET /presets`: built-in scenario names
//! - `GET /presets/{name}`: report for a built-in scenario
//! - `POST /calculate`: report for a scenario sent as JSON

mod handlers;
mod types;

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tracing::info;

use crate::catalog::LoadCatalog;
use crate::config::SizerConfig;

pub use types::ErrorResponse;

/// Immutable application state shared across all request handlers.
///
/// Built once at startup and wrapped in `Arc`; every request computes a fresh
/// result, so no locks are needed.
pub struct AppState {
    /// Validated calculator configuration.
    pub config: SizerConfig,
    /// Effective catalog derived from `config`.
    pub catalog: LoadCatalog,
}

impl AppState {
    pub fn new(config: SizerConfig) -> Self {
        let catalog = config.catalog();
        Self { config, catalog }
    }
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/catalog", get(handlers::get_catalog))
        .route("/presets", get(handlers::list_presets))
        .route("/presets/{name}", get(handlers::get_preset))
        .route("/calculate", post(handlers::calculate))
        .with_state(state)
}

/// Binds to the given address and serves the API until the process exits.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind or the server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "API server listening");
    axum::serve(listener, app).await
}
