//! # DXF Analyzer Core
//!
//! Analysis pipeline for 2-D vector drawings. Given a decoded list of
//! geometric primitives (lines, polylines, circles, arcs), the
//! pipeline:
//!
//! 1. **Samples** every primitive into an ordered point sequence with
//!    a closed-form length.
//! 2. **Estimates** global design statistics (centroid, maximum
//!    extent) over the full sampled set.
//! 3. **Classifies** each primitive as a real design element or a
//!    phantom artifact, using ordered heuristic rules scaled by the
//!    design statistics.
//! 4. **Aggregates** the valid primitives into cut-length totals and
//!    a bounding box, with full per-entity detail for audit.
//!
//! The pipeline is pure and synchronous: it never touches files,
//! sockets, or processes, holds no state between runs, and is safe to
//! invoke concurrently for independent inputs. Individual degenerate
//! primitives degrade to phantom records; they never abort a run.
//!
//! ## Usage
//!
//! ```rust
//! use dxfanalyzer_core::{analyze, Line, Point, Primitive};
//!
//! let primitives = vec![Primitive::Line(Line {
//!     start: Point::new(1.0, 1.0),
//!     end: Point::new(11.0, 1.0),
//!     layer: "CUT".to_string(),
//!     visible: true,
//! })];
//!
//! let result = analyze(&primitives);
//! assert_eq!(result.statistics.valid_entities, 1);
//! assert_eq!(result.cut_length.total_mm, 10.0);
//! ```

pub mod analyzer;
pub mod geometry;
pub mod phantom;
pub mod primitive;
pub mod sampler;
pub mod stats;

// Re-export all public types from submodules
pub use analyzer::{
    analyze, AnalysisResult, ClassifiedPrimitive, CutLength, DesignSummary, EntityPartition,
};
pub use geometry::{BoundingBox, Point};
pub use phantom::{classify, Verdict};
pub use primitive::{Arc, Circle, Line, Polyline, Primitive, PrimitiveKind};
pub use sampler::{sample, SampledPrimitive};
pub use stats::{design_statistics, DesignStatistics};
