//! Normalizes primitives into sampled point sequences.
//!
//! Circle and arc lengths are closed-form rather than re-derived from
//! the samples, so the length metric carries no discretization error.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::primitive::{Arc, Circle, Line, Polyline, Primitive, PrimitiveKind};

/// Number of samples used to approximate a full circle.
const CIRCLE_SAMPLES: usize = 16;

/// Number of interpolation segments along an arc (17 points, both
/// endpoints inclusive).
const ARC_SEGMENTS: usize = 16;

/// A primitive normalized to an ordered point sequence plus a scalar
/// length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampledPrimitive {
    #[serde(rename = "entity_type")]
    pub kind: PrimitiveKind,
    pub points: Vec<Point>,
    pub length: f64,
    pub layer: String,
}

/// Samples one primitive.
///
/// Never fails: unusable geometry (non-finite coordinates, negative
/// radius) yields an empty point sequence and zero length, which the
/// classifier rejects downstream as "no valid points".
pub fn sample(primitive: &Primitive) -> SampledPrimitive {
    let (points, length) = match primitive {
        Primitive::Line(line) => sample_line(line),
        Primitive::Polyline(polyline) => sample_polyline(polyline),
        Primitive::Circle(circle) => sample_circle(circle),
        Primitive::Arc(arc) => sample_arc(arc),
    };

    SampledPrimitive {
        kind: primitive.kind(),
        points,
        length,
        layer: primitive.layer().to_string(),
    }
}

fn is_finite(point: &Point) -> bool {
    point.x.is_finite() && point.y.is_finite()
}

fn sample_line(line: &Line) -> (Vec<Point>, f64) {
    if !is_finite(&line.start) || !is_finite(&line.end) {
        return (Vec::new(), 0.0);
    }

    let length = line.start.distance_to(&line.end);
    (vec![line.start, line.end], length)
}

fn sample_polyline(polyline: &Polyline) -> (Vec<Point>, f64) {
    if polyline.vertices.iter().any(|v| !is_finite(v)) {
        return (Vec::new(), 0.0);
    }

    let points = polyline.vertices.clone();
    let length = points
        .windows(2)
        .map(|pair| pair[0].distance_to(&pair[1]))
        .sum();
    (points, length)
}

fn sample_circle(circle: &Circle) -> (Vec<Point>, f64) {
    if !is_finite(&circle.center) || !circle.radius.is_finite() || circle.radius < 0.0 {
        return (Vec::new(), 0.0);
    }

    // Counter-clockwise from the positive x-axis.
    let mut points = Vec::with_capacity(CIRCLE_SAMPLES);
    for i in 0..CIRCLE_SAMPLES {
        let angle = 2.0 * PI * i as f64 / CIRCLE_SAMPLES as f64;
        points.push(Point::new(
            circle.center.x + circle.radius * angle.cos(),
            circle.center.y + circle.radius * angle.sin(),
        ));
    }

    (points, 2.0 * PI * circle.radius)
}

fn sample_arc(arc: &Arc) -> (Vec<Point>, f64) {
    if !is_finite(&arc.center)
        || !arc.radius.is_finite()
        || arc.radius < 0.0
        || !arc.start_angle.is_finite()
        || !arc.end_angle.is_finite()
    {
        return (Vec::new(), 0.0);
    }

    let start = arc.start_angle.to_radians();
    let end = arc.end_angle.to_radians();

    // Raw signed angular difference, no wrap-around correction.
    let mut points = Vec::with_capacity(ARC_SEGMENTS + 1);
    for i in 0..=ARC_SEGMENTS {
        let angle = start + (end - start) * i as f64 / ARC_SEGMENTS as f64;
        points.push(Point::new(
            arc.center.x + arc.radius * angle.cos(),
            arc.center.y + arc.radius * angle.sin(),
        ));
    }

    (points, (end - start).abs() * arc.radius)
}
