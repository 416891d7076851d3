//! Points and segments in grid space.

use serde::{Deserialize, Serialize};

/// A point in 2D grid space.
///
/// `x` runs along columns, `y` along rows, both fractional: a contour
/// crossing halfway down the left edge of cell (0, 0) sits at
/// `(0.0, 0.5)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coordinate-wise match: both `|Δx|` and `|Δy|` strictly below
    /// `tolerance`.
    pub fn approx_eq(&self, other: &Point, tolerance: f64) -> bool {
        (self.x - other.x).abs() < tolerance && (self.y - other.y).abs() < tolerance
    }
}

/// A directed line segment between two points, as emitted by the tracer
/// for a single cell and iso-value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    /// Create a new segment.
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}
