//! Per-iso-value path collections and incremental segment stitching.

use serde::Serialize;

use crate::path::{Joint, Path};
use crate::point::Segment;
use crate::trace::{trace_cell, CellCorners};

/// Endpoint-matching tolerance used by [`IsoLayer::new`].
///
/// This is tight enough that adjacent-cell crossing points (which agree
/// exactly, being computed from the same two samples) always match, while
/// distinct crossings on a unit cell grid stay far apart.
pub const DEFAULT_TOLERANCE: f64 = 1e-5;

/// The contour set for one iso-value: an unordered collection of maximal
/// paths, grown one segment at a time.
///
/// After every [`IsoLayer::add_segment`] call no two paths in the
/// collection share a matchable endpoint; a segment that bridges two
/// existing paths fuses them on the spot.
#[derive(Debug, Clone, Serialize)]
pub struct IsoLayer {
    isovalue: f64,
    tolerance: f64,
    paths: Vec<Path>,
}

impl IsoLayer {
    /// Create an empty layer for `isovalue` with [`DEFAULT_TOLERANCE`].
    pub fn new(isovalue: f64) -> Self {
        Self::with_tolerance(isovalue, DEFAULT_TOLERANCE)
    }

    /// Create an empty layer with a caller-chosen endpoint tolerance.
    ///
    /// The tolerance is not validated. It must be positive and smaller
    /// than the minimum distance between distinct contour endpoints;
    /// too large a value conflates unrelated contours, too small (or
    /// non-positive) a value leaves every segment as its own path.
    pub fn with_tolerance(isovalue: f64, tolerance: f64) -> Self {
        Self {
            isovalue,
            tolerance,
            paths: Vec::new(),
        }
    }

    /// The iso-value this layer contours.
    pub fn isovalue(&self) -> f64 {
        self.isovalue
    }

    /// The endpoint-matching tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// The paths assembled so far. Collection order carries no meaning;
    /// point order within each path does.
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Consume the layer, yielding its paths.
    pub fn into_paths(self) -> Vec<Path> {
        self.paths
    }

    /// Number of paths in the layer.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the layer holds no paths.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Trace one cell and stitch whatever segments it produces.
    pub fn trace_cell(&mut self, row: usize, col: usize, corners: &CellCorners) {
        for segment in trace_cell(row, col, corners, self.isovalue) {
            self.add_segment(segment);
        }
    }

    /// Stitch one segment into the layer.
    ///
    /// A single linear scan finds the first and, if any, second existing
    /// path whose end matches one of the segment's; a segment's interior
    /// never matters and a well-formed segment cannot touch more than two
    /// paths, so the scan stops after the second hit.
    ///
    /// - No match: the segment becomes a new two-point path.
    /// - One match: the segment extends that path in place.
    /// - Two matches: the segment extends the first path, then the
    ///   extended path is absorbed into the second and dropped from the
    ///   collection. This is the union step that connects two partial
    ///   contours once the sweep reaches the cell between them.
    pub fn add_segment(&mut self, segment: Segment) {
        let incoming = Path::from(segment);

        let mut first_match: Option<(usize, Joint)> = None;
        let mut second_match: Option<usize> = None;
        for (index, existing) in self.paths.iter().enumerate() {
            if let Some(joint) = existing.joint(&incoming, self.tolerance) {
                if first_match.is_none() {
                    first_match = Some((index, joint));
                } else {
                    second_match = Some(index);
                    break;
                }
            }
        }

        match (first_match, second_match) {
            (None, _) => self.paths.push(incoming),
            (Some((index, joint)), None) => self.paths[index].absorb(incoming, joint),
            (Some((first, joint)), Some(second)) => {
                self.paths[first].absorb(incoming, joint);
                let bridged = self.paths.remove(first);
                // The scan visits paths in order, so first < second and
                // the removal shifts the second match down by one.
                let second = second - 1;
                match self.paths[second].joint(&bridged, self.tolerance) {
                    Some(joint) => self.paths[second].absorb(bridged, joint),
                    // Only reachable when tolerance conflated two matches
                    // on the same endpoint; keep the path rather than
                    // dropping its points.
                    None => self.paths.insert(first, bridged),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
        Segment::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    #[test]
    fn test_disjoint_segments_become_paths() {
        let mut layer = IsoLayer::new(0.5);
        layer.add_segment(seg(0.0, 0.0, 1.0, 0.0));
        layer.add_segment(seg(5.0, 5.0, 6.0, 5.0));
        assert_eq!(layer.len(), 2);
    }

    #[test]
    fn test_chain_extends_in_place() {
        let mut layer = IsoLayer::new(0.5);
        layer.add_segment(seg(0.0, 0.0, 1.0, 0.0));
        layer.add_segment(seg(1.0, 0.0, 2.0, 0.0));
        layer.add_segment(seg(2.0, 0.0, 3.0, 0.0));
        assert_eq!(layer.len(), 1);
        assert_eq!(layer.paths()[0].len(), 4);
    }

    #[test]
    fn test_bridge_segment_fuses_two_paths() {
        let mut layer = IsoLayer::new(0.5);
        layer.add_segment(seg(0.0, 0.0, 1.0, 0.0));
        layer.add_segment(seg(2.0, 0.0, 3.0, 0.0));
        assert_eq!(layer.len(), 2);

        layer.add_segment(seg(1.0, 0.0, 2.0, 0.0));
        assert_eq!(layer.len(), 1);

        let points = layer.paths()[0].points();
        assert_eq!(points.len(), 4);
        // One continuous run, no duplicated interior point.
        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        assert!(xs == vec![0.0, 1.0, 2.0, 3.0] || xs == vec![3.0, 2.0, 1.0, 0.0]);
    }

    #[test]
    fn test_reversed_segment_still_matches() {
        let mut layer = IsoLayer::new(0.5);
        layer.add_segment(seg(0.0, 0.0, 1.0, 0.0));
        // Same contact point but flipped direction: end-to-end join.
        layer.add_segment(seg(2.0, 0.0, 1.0, 0.0));
        assert_eq!(layer.len(), 1);
        assert_eq!(layer.paths()[0].len(), 3);
    }

    #[test]
    fn test_tolerance_respected() {
        let mut layer = IsoLayer::with_tolerance(0.5, 1e-6);
        layer.add_segment(seg(0.0, 0.0, 1.0, 0.0));
        // Off by more than the tolerance: stays separate.
        layer.add_segment(seg(1.00001, 0.0, 2.0, 0.0));
        assert_eq!(layer.len(), 2);

        let mut loose = IsoLayer::with_tolerance(0.5, 1e-3);
        loose.add_segment(seg(0.0, 0.0, 1.0, 0.0));
        loose.add_segment(seg(1.00001, 0.0, 2.0, 0.0));
        assert_eq!(loose.len(), 1);
    }

    #[test]
    fn test_closing_segment_keeps_one_path() {
        let mut layer = IsoLayer::new(0.5);
        layer.add_segment(seg(0.0, 0.0, 1.0, 0.0));
        layer.add_segment(seg(1.0, 0.0, 1.0, 1.0));
        layer.add_segment(seg(1.0, 1.0, 0.0, 1.0));
        assert_eq!(layer.len(), 1);

        // The closing segment touches the single path at both ends.
        layer.add_segment(seg(0.0, 1.0, 0.0, 0.0));
        assert_eq!(layer.len(), 1);
        assert!(layer.paths()[0].is_closed(DEFAULT_TOLERANCE));
        assert_eq!(layer.paths()[0].len(), 5);
    }
}
