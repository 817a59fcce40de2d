//! Basic geometric value types shared across the analysis pipeline.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Represents a 2D point with X and Y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point with the given X and Y coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Axis-aligned bounding box.
///
/// Constructed from a non-empty point set, `max_x >= min_x` and
/// `max_y >= min_y` always hold; the empty set maps to the degenerate
/// `(0, 0, 0, 0)` box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Creates a bounding box from explicit corner coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Computes the bounding box of a point set.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Self {
        let mut min_x = f64::MAX;
        let mut max_x = f64::MIN;
        let mut min_y = f64::MAX;
        let mut max_y = f64::MIN;
        let mut has_points = false;

        for point in points {
            min_x = min_x.min(point.x);
            max_x = max_x.max(point.x);
            min_y = min_y.min(point.y);
            max_y = max_y.max(point.y);
            has_points = true;
        }

        if !has_points {
            return Self::new(0.0, 0.0, 0.0, 0.0);
        }

        Self::new(min_x, min_y, max_x, max_y)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }
}

// Serialized with the derived dimensions included so API consumers do
// not have to recompute them from the corners.
impl Serialize for BoundingBox {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("BoundingBox", 7)?;
        state.serialize_field("min_x", &self.min_x)?;
        state.serialize_field("min_y", &self.min_y)?;
        state.serialize_field("max_x", &self.max_x)?;
        state.serialize_field("max_y", &self.max_y)?;
        state.serialize_field("width", &self.width())?;
        state.serialize_field("height", &self.height())?;
        state.serialize_field("area", &self.area())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
    }

    #[test]
    fn test_bounding_box_empty_set() {
        let bbox = BoundingBox::from_points(std::iter::empty::<&Point>());
        assert_eq!(bbox, BoundingBox::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(bbox.area(), 0.0);
    }

    #[test]
    fn test_bounding_box_single_point() {
        let points = [Point::new(5.0, 5.0)];
        let bbox = BoundingBox::from_points(points.iter());
        assert_eq!(bbox, BoundingBox::new(5.0, 5.0, 5.0, 5.0));
        assert_eq!(bbox.width(), 0.0);
        assert_eq!(bbox.height(), 0.0);
        assert_eq!(bbox.area(), 0.0);
    }

    #[test]
    fn test_bounding_box_dimensions() {
        let points = [
            Point::new(-2.0, 1.0),
            Point::new(4.0, -3.0),
            Point::new(0.0, 5.0),
        ];
        let bbox = BoundingBox::from_points(points.iter());
        assert_eq!(bbox, BoundingBox::new(-2.0, -3.0, 4.0, 5.0));
        assert_eq!(bbox.width(), 6.0);
        assert_eq!(bbox.height(), 8.0);
        assert_eq!(bbox.area(), 48.0);
    }
}
