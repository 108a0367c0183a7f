//! REST API for a completed forecast run.
//!
//! Provides three GET endpoints:
//! - `/forecast`: run configuration, forecast table, and error metrics
//! - `/series`: observed series with the forecast overlay, with optional range filtering
//! - `/trace`: global best fitness after each evaluation pass

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use log::info;

use crate::config::RunConfig;
use crate::error::Result;
use crate::runner::RunOutput;

pub use types::{ErrorResponse, ForecastResponse, SeriesPoint, SeriesQuery, TracePoint};

/// Immutable application state shared across all request handlers.
///
/// Constructed once after the run completes and wrapped in `Arc`; all data
/// is read-only.
pub struct AppState {
    /// Configuration used for this run.
    pub config: RunConfig,
    /// Run output.
    pub output: RunOutput,
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/forecast", get(handlers::get_forecast))
        .route("/series", get(handlers::get_series))
        .route("/trace", get(handlers::get_trace))
        .with_state(state)
}

/// Binds to the given address and serves the API until the process exits.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("API server listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
