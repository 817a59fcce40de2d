//! Phantom entity detection.
//!
//! Exported drawings routinely carry artifacts that are not part of
//! the design: stray construction lines anchored at the coordinate
//! origin, reference geometry on dedicated layers, wildly out-of-scale
//! segments. The rules here reject those so cut metrics only count
//! real geometry.
//!
//! Rules are evaluated in fixed priority order and the first match
//! decides; there is no scoring or rule combination. The length and
//! distance thresholds are multiples of the design's maximum dimension
//! so they scale with drawing size; the coordinate bound is an
//! absolute sanity limit.

use crate::geometry::Point;
use crate::primitive::{Primitive, PrimitiveKind};
use crate::sampler::SampledPrimitive;
use crate::stats::DesignStatistics;

/// Layer names that only ever hold reference or construction geometry.
const PHANTOM_LAYERS: [&str; 5] = ["DEFPOINTS", "PHANTOM", "HIDDEN", "CONSTRUCTION", "TEMP"];

/// Tolerance for detecting line endpoints at the coordinate origin.
const ORIGIN_TOLERANCE: f64 = 0.001;

/// Line length threshold as a multiple of the design's max dimension.
const LENGTH_FACTOR: f64 = 10.0;

/// Line midpoint distance threshold as a multiple of the design's max
/// dimension.
const DISTANCE_FACTOR: f64 = 5.0;

/// Absolute coordinate sanity bound, in source units.
const COORDINATE_LIMIT: f64 = 50_000.0;

/// Classification verdict for a single primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Valid,
    Phantom(String),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }
}

/// Classifies one sampled primitive against the rejection rules.
///
/// Never fails: degraded input (a primitive the sampler could not
/// read) surfaces as the "no valid points" rejection rather than an
/// error.
pub fn classify(
    sampled: &SampledPrimitive,
    primitive: &Primitive,
    stats: &DesignStatistics,
) -> Verdict {
    if sampled.points.is_empty() {
        return Verdict::Phantom("no valid points".to_string());
    }

    let layer_name = primitive.layer().to_uppercase();
    if PHANTOM_LAYERS.contains(&layer_name.as_str()) {
        return Verdict::Phantom(format!("phantom layer: {}", layer_name));
    }

    if !primitive.is_visible() {
        return Verdict::Phantom("invisible entity".to_string());
    }

    // Line-only rules. Polylines and arcs are deliberately exempt from
    // the length and distance checks; only lines show up as stray
    // construction artifacts in practice.
    if sampled.kind == PrimitiveKind::Line && sampled.points.len() >= 2 {
        let start = sampled.points[0];
        let end = sampled.points[1];

        if near_origin(&start) || near_origin(&end) {
            return Verdict::Phantom("line connects to origin (0,0)".to_string());
        }

        let line_length = start.distance_to(&end);
        if line_length > stats.max_dimension * LENGTH_FACTOR {
            return Verdict::Phantom(format!("line too long: {:.2}mm", line_length));
        }

        let midpoint = Point::new((start.x + end.x) / 2.0, (start.y + end.y) / 2.0);
        let distance_to_design = midpoint.distance_to(&stats.center);
        if distance_to_design > stats.max_dimension * DISTANCE_FACTOR {
            return Verdict::Phantom(format!(
                "line far from design: {:.2}mm",
                distance_to_design
            ));
        }
    }

    for point in &sampled.points {
        if point.x.abs() > COORDINATE_LIMIT || point.y.abs() > COORDINATE_LIMIT {
            return Verdict::Phantom(format!(
                "extreme coordinates: ({:.2}, {:.2})",
                point.x, point.y
            ));
        }
    }

    Verdict::Valid
}

fn near_origin(point: &Point) -> bool {
    point.x.abs() < ORIGIN_TOLERANCE && point.y.abs() < ORIGIN_TOLERANCE
}
