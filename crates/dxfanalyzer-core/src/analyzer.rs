//! Drawing analysis pipeline: sampling, phantom detection,
//! aggregation.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::geometry::{BoundingBox, Point};
use crate::phantom::{classify, Verdict};
use crate::primitive::Primitive;
use crate::sampler::{sample, SampledPrimitive};
use crate::stats::design_statistics;

/// A sampled primitive together with its classification verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedPrimitive {
    #[serde(flatten)]
    pub sampled: SampledPrimitive,
    pub is_valid: bool,
    pub rejection_reason: Option<String>,
}

/// Entity counts and reference statistics for one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSummary {
    pub total_entities: usize,
    pub valid_entities: usize,
    pub phantom_entities: usize,
    pub design_center: Point,
    pub max_design_dimension: f64,
}

/// Total traversal length of the valid primitives.
///
/// Both totals are rounded for reporting (2 decimals for mm, 3 for m);
/// the sums feeding them keep full precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutLength {
    pub total_mm: f64,
    pub total_m: f64,
}

impl CutLength {
    fn from_mm(total_mm: f64) -> Self {
        Self {
            total_mm: round_to(total_mm, 2),
            total_m: round_to(total_mm / 1000.0, 3),
        }
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Valid and phantom primitives, each preserving input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityPartition {
    pub valid: Vec<ClassifiedPrimitive>,
    pub phantom: Vec<ClassifiedPrimitive>,
}

/// Complete result of analyzing one drawing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub statistics: DesignSummary,
    pub bounding_box: BoundingBox,
    pub cut_length: CutLength,
    pub entities: EntityPartition,
}

/// Runs the full pipeline over a decoded primitive list.
///
/// Best-effort per primitive: an entity the sampler cannot read
/// becomes a phantom record instead of aborting the run, so the
/// result always covers the entire input.
pub fn analyze(primitives: &[Primitive]) -> AnalysisResult {
    info!("analyzing {} primitives", primitives.len());

    let sampled: Vec<SampledPrimitive> = primitives.iter().map(sample).collect();
    let stats = design_statistics(&sampled);

    let mut valid = Vec::new();
    let mut phantom = Vec::new();

    for (primitive, sampled) in primitives.iter().zip(sampled) {
        match classify(&sampled, primitive, &stats) {
            Verdict::Valid => valid.push(ClassifiedPrimitive {
                sampled,
                is_valid: true,
                rejection_reason: None,
            }),
            Verdict::Phantom(reason) => {
                debug!(
                    "rejected {} on layer {}: {}",
                    sampled.kind, sampled.layer, reason
                );
                phantom.push(ClassifiedPrimitive {
                    sampled,
                    is_valid: false,
                    rejection_reason: Some(reason),
                });
            }
        }
    }

    let bounding_box =
        BoundingBox::from_points(valid.iter().flat_map(|entity| entity.sampled.points.iter()));
    let total_mm: f64 = valid.iter().map(|entity| entity.sampled.length).sum();

    info!(
        "analysis complete: {} valid, {} phantom",
        valid.len(),
        phantom.len()
    );

    AnalysisResult {
        statistics: DesignSummary {
            total_entities: primitives.len(),
            valid_entities: valid.len(),
            phantom_entities: phantom.len(),
            design_center: stats.center,
            max_design_dimension: stats.max_dimension,
        },
        bounding_box,
        cut_length: CutLength::from_mm(total_mm),
        entities: EntityPartition { valid, phantom },
    }
}
