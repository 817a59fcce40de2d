//! # DXF Analyzer Server
//!
//! HTTP surface for the drawing analysis pipeline. The service
//! accepts a DXF file upload, decodes it into primitives, runs the
//! core analysis, and returns the result as JSON.
//!
//! ## Endpoints
//!
//! - `POST /analyze-dxf` - multipart DXF upload, JSON analysis result
//! - `GET /` - service information
//! - `GET /health` - liveness probe
//!
//! The service holds no state: each request is an independent core
//! invocation on the runtime.

pub mod config;
pub mod decoder;
pub mod handlers;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use config::ServerConfig;
pub use decoder::{decode_drawing, decode_file, DecodeError};
pub use handlers::AnalyzeResponse;

/// Uploaded drawings can get large; the axum default of 2 MB is far
/// too small for production DXF exports.
const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Builds the service router with all endpoints and middleware.
pub fn app() -> Router {
    Router::new()
        .route("/", get(handlers::service_info))
        .route("/health", get(handlers::health_check))
        .route("/analyze-dxf", post(handlers::analyze_dxf))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Binds the listener and serves requests until shutdown.
pub async fn run(config: &ServerConfig) -> anyhow::Result<()> {
    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("listening on {}", address);

    axum::serve(listener, app()).await?;
    Ok(())
}
