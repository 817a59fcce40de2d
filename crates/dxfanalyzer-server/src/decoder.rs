//! Decodes DXF drawings into analysis primitives.
//!
//! Only the entity kinds the analyzer understands are converted:
//! LINE, LWPOLYLINE, POLYLINE, CIRCLE, and ARC. Everything else is
//! skipped. Arc angles stay in degrees, matching the DXF
//! representation; the sampler converts them to radians.

use std::path::Path;

use dxf::entities::EntityType;
use dxf::Drawing;
use thiserror::Error;
use tracing::debug;

use dxfanalyzer_core::geometry::Point;
use dxfanalyzer_core::primitive::{Arc, Circle, Line, Polyline, Primitive};

/// Failure to obtain primitives from an on-disk drawing.
///
/// Distinct from an empty decode result: a drawing with zero
/// supported entities decodes successfully to an empty list.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The file could not be read.
    #[error("failed to read drawing: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a parseable DXF drawing.
    #[error("failed to parse DXF: {0}")]
    Dxf(#[from] dxf::DxfError),
}

/// Loads a DXF file and decodes its modelspace entities.
pub fn decode_file(path: &Path) -> Result<Vec<Primitive>, DecodeError> {
    let mut file = std::fs::File::open(path)?;
    let drawing = Drawing::load(&mut file)?;
    Ok(decode_drawing(&drawing))
}

/// Converts the supported modelspace entities of a loaded drawing.
pub fn decode_drawing(drawing: &Drawing) -> Vec<Primitive> {
    let mut primitives = Vec::new();

    for entity in drawing.entities() {
        let layer = entity.common.layer.clone();
        let visible = entity.common.is_visible;

        match &entity.specific {
            EntityType::Line(line) => {
                primitives.push(Primitive::Line(Line {
                    start: Point::new(line.p1.x, line.p1.y),
                    end: Point::new(line.p2.x, line.p2.y),
                    layer,
                    visible,
                }));
            }
            EntityType::LwPolyline(polyline) => {
                let vertices = polyline
                    .vertices
                    .iter()
                    .map(|v| Point::new(v.x, v.y))
                    .collect();
                primitives.push(Primitive::Polyline(Polyline {
                    vertices,
                    layer,
                    visible,
                }));
            }
            EntityType::Polyline(polyline) => {
                let vertices = polyline
                    .vertices()
                    .map(|v| Point::new(v.location.x, v.location.y))
                    .collect();
                primitives.push(Primitive::Polyline(Polyline {
                    vertices,
                    layer,
                    visible,
                }));
            }
            EntityType::Circle(circle) => {
                primitives.push(Primitive::Circle(Circle {
                    center: Point::new(circle.center.x, circle.center.y),
                    radius: circle.radius,
                    layer,
                    visible,
                }));
            }
            EntityType::Arc(arc) => {
                primitives.push(Primitive::Arc(Arc {
                    center: Point::new(arc.center.x, arc.center.y),
                    radius: arc.radius,
                    start_angle: arc.start_angle,
                    end_angle: arc.end_angle,
                    layer,
                    visible,
                }));
            }
            _ => {}
        }
    }

    debug!("decoded {} supported entities", primitives.len());
    primitives
}
