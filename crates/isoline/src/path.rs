//! Polylines and the endpoint-join rules that grow them.

use serde::{Deserialize, Serialize};

use crate::point::{Point, Segment};

/// How two paths may be joined at their ends.
///
/// "Start" and "end" are the first and last points of each path; interior
/// points never participate. The discriminants are ordered by the fixed
/// precedence [`Path::joint`] evaluates them in, which matters when a path
/// touches another at both ends (a nearly closed loop): the first matching
/// orientation wins, and that choice is observable in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Joint {
    /// This path's start meets the other's end: the other path leads in.
    StartToEnd,
    /// This path's end meets the other's start: the other path leads out.
    EndToStart,
    /// Both starts meet: the other path joins reversed at the front.
    StartToStart,
    /// Both ends meet: the other path joins reversed at the back.
    EndToEnd,
}

/// An ordered polyline of at least two points.
///
/// Consecutive points are the literal endpoints of the segments that were
/// merged to build the path. A path is a closed loop when its first and
/// last points coincide within tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    /// Create a two-point path from a segment's endpoints.
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            points: vec![start, end],
        }
    }

    /// The first point.
    pub fn start(&self) -> Point {
        self.points[0]
    }

    /// The last point.
    pub fn end(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// The point sequence, in order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points in the path.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a path holds at least its original two points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consume the path, yielding its points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Whether the first and last points coincide within `tolerance`.
    pub fn is_closed(&self, tolerance: f64) -> bool {
        self.start().approx_eq(&self.end(), tolerance)
    }

    /// Classify how `other` can join this path, if at all.
    ///
    /// The four orientations are checked in the fixed order start/end,
    /// end/start, start/start, end/end, and the first hit is returned.
    /// When tolerance-boundary input makes more than one orientation
    /// plausible this order decides the merge, so it is kept stable.
    pub fn joint(&self, other: &Path, tolerance: f64) -> Option<Joint> {
        let start = self.start();
        let end = self.end();
        if start.approx_eq(&other.end(), tolerance) {
            Some(Joint::StartToEnd)
        } else if end.approx_eq(&other.start(), tolerance) {
            Some(Joint::EndToStart)
        } else if start.approx_eq(&other.start(), tolerance) {
            Some(Joint::StartToStart)
        } else if end.approx_eq(&other.end(), tolerance) {
            Some(Joint::EndToEnd)
        } else {
            None
        }
    }

    /// Merge `other` into this path at the given joint, consuming it.
    ///
    /// The shared endpoint is kept once: whichever of `other`'s points
    /// coincides with this path's end is dropped, and `other` is reversed
    /// first for the same-start / same-end orientations. The caller is
    /// expected to pass the joint obtained from [`Path::joint`] for the
    /// same pair.
    pub fn absorb(&mut self, other: Path, joint: Joint) {
        let mut incoming = other.points;
        match joint {
            Joint::StartToEnd => {
                // Other leads in: prepend it, dropping its last point.
                incoming.pop();
                incoming.append(&mut self.points);
                self.points = incoming;
            }
            Joint::EndToStart => {
                // Other leads out: append it, dropping its first point.
                self.points.extend(incoming.into_iter().skip(1));
            }
            Joint::StartToStart => {
                // Reverse other and prepend, dropping its (shared) first
                // point, which after the reverse sits at the back.
                incoming.reverse();
                incoming.pop();
                incoming.append(&mut self.points);
                self.points = incoming;
            }
            Joint::EndToEnd => {
                // Reverse other and append, dropping its (shared) last
                // point, which after the reverse sits at the front.
                incoming.pop();
                incoming.reverse();
                self.points.append(&mut incoming);
            }
        }
    }
}

impl From<Segment> for Path {
    fn from(segment: Segment) -> Self {
        Self::new(segment.start, segment.end)
    }
}
