//! Global design statistics used as the reference scale for phantom
//! detection.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::sampler::SampledPrimitive;

/// Fallback extent for drawings that yield no sample points, keeping
/// the distance thresholds finite and non-zero.
const FALLBACK_MAX_DIMENSION: f64 = 1000.0;

/// Centroid and maximum extent of the full sampled point set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignStatistics {
    pub center: Point,
    pub max_dimension: f64,
}

/// Computes statistics over every sampled primitive, valid and phantom
/// alike. Statistics run before classification so the thresholds they
/// feed are not self-referential.
///
/// The centroid is point-weighted: a primitive contributing more
/// samples has proportionally more influence.
pub fn design_statistics(sampled: &[SampledPrimitive]) -> DesignStatistics {
    let mut count = 0usize;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut min_x = f64::MAX;
    let mut max_x = f64::MIN;
    let mut min_y = f64::MAX;
    let mut max_y = f64::MIN;

    for primitive in sampled {
        for point in &primitive.points {
            sum_x += point.x;
            sum_y += point.y;
            min_x = min_x.min(point.x);
            max_x = max_x.max(point.x);
            min_y = min_y.min(point.y);
            max_y = max_y.max(point.y);
            count += 1;
        }
    }

    if count == 0 {
        return DesignStatistics {
            center: Point::new(0.0, 0.0),
            max_dimension: FALLBACK_MAX_DIMENSION,
        };
    }

    DesignStatistics {
        center: Point::new(sum_x / count as f64, sum_y / count as f64),
        max_dimension: (max_x - min_x).max(max_y - min_y),
    }
}
