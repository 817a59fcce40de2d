//! Drawing primitives accepted by the analysis pipeline.
//!
//! The set of primitive kinds is closed: every decoder feeding this
//! pipeline maps its source entities onto these four variants, and the
//! sampler matches over them exhaustively.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// A straight segment between two endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
    pub layer: String,
    pub visible: bool,
}

/// A sequence of vertices connected by straight segments.
///
/// Vertices are kept exactly as stored in the source drawing; a closed
/// contour is represented by a repeated first/last vertex, never
/// synthesized here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub vertices: Vec<Point>,
    pub layer: String,
    pub visible: bool,
}

/// A full circle given by center and radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    pub layer: String,
    pub visible: bool,
}

/// A circular arc. Angles are in degrees, as stored in DXF.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub layer: String,
    pub visible: bool,
}

/// The original entity kind of a primitive, kept through the pipeline
/// for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PrimitiveKind {
    Line,
    Polyline,
    Circle,
    Arc,
}

impl PrimitiveKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveKind::Line => "LINE",
            PrimitiveKind::Polyline => "POLYLINE",
            PrimitiveKind::Circle => "CIRCLE",
            PrimitiveKind::Arc => "ARC",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One decoded geometric element from a vector drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    Line(Line),
    Polyline(Polyline),
    Circle(Circle),
    Arc(Arc),
}

impl Primitive {
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Primitive::Line(_) => PrimitiveKind::Line,
            Primitive::Polyline(_) => PrimitiveKind::Polyline,
            Primitive::Circle(_) => PrimitiveKind::Circle,
            Primitive::Arc(_) => PrimitiveKind::Arc,
        }
    }

    pub fn layer(&self) -> &str {
        match self {
            Primitive::Line(line) => &line.layer,
            Primitive::Polyline(polyline) => &polyline.layer,
            Primitive::Circle(circle) => &circle.layer,
            Primitive::Arc(arc) => &arc.layer,
        }
    }

    pub fn is_visible(&self) -> bool {
        match self {
            Primitive::Line(line) => line.visible,
            Primitive::Polyline(polyline) => polyline.visible,
            Primitive::Circle(circle) => circle.visible,
            Primitive::Arc(arc) => arc.visible,
        }
    }
}
