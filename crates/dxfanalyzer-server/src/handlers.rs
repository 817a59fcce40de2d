//! HTTP request handlers for the analysis endpoints.

use std::io::Write;

use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;
use tracing::{error, info};

use dxfanalyzer_core::analyzer::{analyze, AnalysisResult};

use crate::decoder;

/// Successful analysis envelope. The result fields are flattened so
/// the response body reads `{success, statistics, bounding_box, ...}`.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    #[serde(flatten)]
    pub result: AnalysisResult,
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "DXF Analyzer API",
    }))
}

/// Service information endpoint
pub async fn service_info() -> impl IntoResponse {
    Json(json!({
        "name": "DXF Analyzer API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "endpoints": {
            "analyze": "POST /analyze-dxf",
            "health": "GET /health",
        },
    }))
}

/// Analyzes an uploaded DXF file.
///
/// A drawing that fails to decode is reported as
/// `{success: false, error}` rather than a transport error; transport
/// errors are reserved for bad requests (missing upload, wrong file
/// type, unreadable body).
pub async fn analyze_dxf(mut multipart: Multipart) -> Result<Response, (StatusCode, String)> {
    let field = loop {
        match multipart.next_field().await {
            Ok(Some(field)) if field.file_name().is_some() => break field,
            Ok(Some(_)) => continue,
            Ok(None) => {
                return Err((StatusCode::BAD_REQUEST, "missing file upload".to_string()));
            }
            Err(err) => {
                return Err((
                    StatusCode::BAD_REQUEST,
                    format!("invalid multipart body: {err}"),
                ));
            }
        }
    };

    let filename = field.file_name().unwrap_or_default().to_string();
    if !filename.to_lowercase().ends_with(".dxf") {
        return Err((
            StatusCode::BAD_REQUEST,
            "file must be a DXF drawing".to_string(),
        ));
    }

    let data = field.bytes().await.map_err(|err| {
        (
            StatusCode::BAD_REQUEST,
            format!("failed to read upload: {err}"),
        )
    })?;

    info!("analyzing upload {} ({} bytes)", filename, data.len());

    // Spool to a temp file; the DXF reader wants a seekable source and
    // the file is cleaned up when the handle drops.
    let mut spool = tempfile::NamedTempFile::new().map_err(|err| {
        error!("failed to create temp file: {}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "failed to store upload".to_string(),
        )
    })?;
    spool.write_all(&data).map_err(|err| {
        error!("failed to write temp file: {}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "failed to store upload".to_string(),
        )
    })?;

    match decoder::decode_file(spool.path()) {
        Ok(primitives) => {
            let result = analyze(&primitives);
            Ok(Json(AnalyzeResponse {
                success: true,
                result,
            })
            .into_response())
        }
        Err(err) => {
            error!("failed to decode {}: {}", filename, err);
            Ok(Json(json!({
                "success": false,
                "error": err.to_string(),
            }))
            .into_response())
        }
    }
}
