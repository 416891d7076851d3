//! Marching-squares cell tracing.
//!
//! One call looks at a single 2x2 block of samples and decides where the
//! contour for one iso-value crosses that cell, interpolating crossing
//! points linearly along the cell edges. Cells are independent; the
//! stitching stage in [`crate::layer`] reconnects the per-cell segments
//! into polylines.

use crate::point::{Point, Segment};

/// The four samples bounding one grid cell.
///
/// For the cell at `(row, col)` these are the field values at
/// `(row, col)`, `(row, col+1)`, `(row+1, col)`, and `(row+1, col+1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellCorners {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_left: f64,
    pub bottom_right: f64,
}

impl CellCorners {
    /// Create a new set of corner samples.
    pub fn new(top_left: f64, top_right: f64, bottom_left: f64, bottom_right: f64) -> Self {
        Self {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }

    /// Whether any corner is NaN, in which case the cell cannot be traced.
    pub fn any_nan(&self) -> bool {
        self.top_left.is_nan()
            || self.top_right.is_nan()
            || self.bottom_left.is_nan()
            || self.bottom_right.is_nan()
    }
}

/// Trace the contour for `isovalue` through the cell at `(row, col)`.
///
/// Returns 0, 1, or 2 segments in grid coordinates (x along columns,
/// y along rows). The 4-bit case code sets bit 0 when the top-left corner
/// is strictly above the iso-value, bit 1 for top-right, bit 2 for
/// bottom-right, and bit 3 for bottom-left.
///
/// The two saddle configurations (codes 5 and 10, diagonally opposite
/// corners above) always emit two separate segments rather than resolving
/// the ambiguity from the cell center; downstream consumers rely on that
/// split.
pub fn trace_cell(row: usize, col: usize, corners: &CellCorners, isovalue: f64) -> Vec<Segment> {
    let mut flags = 0u8;
    if corners.top_left > isovalue {
        flags |= 1;
    }
    if corners.top_right > isovalue {
        flags |= 2;
    }
    if corners.bottom_right > isovalue {
        flags |= 4;
    }
    if corners.bottom_left > isovalue {
        flags |= 8;
    }

    // All corners on the same side of the iso-value.
    if flags == 0 || flags == 15 {
        return vec![];
    }

    let top_frac = edge_fraction(isovalue, corners.top_left, corners.top_right);
    let bottom_frac = edge_fraction(isovalue, corners.bottom_left, corners.bottom_right);
    let right_frac = edge_fraction(isovalue, corners.top_right, corners.bottom_right);
    let left_frac = edge_fraction(isovalue, corners.top_left, corners.bottom_left);

    let x = col as f64;
    let y = row as f64;
    let top = Point::new(x + top_frac, y);
    let right = Point::new(x + 1.0, y + right_frac);
    let bottom = Point::new(x + bottom_frac, y + 1.0);
    let left = Point::new(x, y + left_frac);

    match flags {
        1 | 14 => vec![Segment::new(left, top)],
        2 | 13 => vec![Segment::new(top, right)],
        3 | 12 => vec![Segment::new(left, right)],
        4 | 11 => vec![Segment::new(right, bottom)],
        5 => vec![Segment::new(top, right), Segment::new(left, bottom)],
        6 | 9 => vec![Segment::new(top, bottom)],
        7 | 8 => vec![Segment::new(left, bottom)],
        10 => vec![Segment::new(left, top), Segment::new(bottom, right)],
        _ => unreachable!("flags 0 and 15 handled above"),
    }
}

/// Fractional position of the iso-crossing along an edge running from
/// the `from` corner to the `to` corner.
///
/// Equal corners would divide by zero, so that case falls back to the
/// edge midpoint (0.5), deterministically.
fn edge_fraction(isovalue: f64, from: f64, to: f64) -> f64 {
    if to == from {
        0.5
    } else {
        (isovalue - from).abs() / (to - from).abs()
    }
}
