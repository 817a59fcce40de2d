//! # DXF Analyzer
//!
//! A Rust-based analysis service for DXF vector drawings:
//! - Sampling of lines, polylines, circles, and arcs into point sequences
//! - Phantom-entity detection (construction layers, origin artifacts,
//!   out-of-scale geometry)
//! - Bounding box, total cut length, and design statistics
//! - HTTP upload endpoint returning JSON results
//!
//! ## Architecture
//!
//! DXF Analyzer is organized as a workspace with multiple crates:
//!
//! 1. **dxfanalyzer-core** - Pure analysis pipeline: sampling,
//!    classification, aggregation
//! 2. **dxfanalyzer-server** - DXF decoding and the HTTP service
//! 3. **dxfanalyzer** - Main binary that wires logging and the server

// Re-export the public API for main.rs and embedding callers
pub use dxfanalyzer_core::{
    analyze, AnalysisResult, Arc, BoundingBox, Circle, ClassifiedPrimitive, CutLength,
    DesignStatistics, DesignSummary, Line, Point, Polyline, Primitive, PrimitiveKind,
    SampledPrimitive, Verdict,
};

pub use dxfanalyzer_server::{app, decode_file, run, AnalyzeResponse, DecodeError, ServerConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
