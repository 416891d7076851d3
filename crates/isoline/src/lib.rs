//! Iso-contour extraction over scalar fields.
//!
//! This crate turns a [`scalar_field::ScalarField`] into, per requested
//! iso-value, a set of continuous polylines in grid space. It does this in
//! two stages:
//!
//! - **Tracing**: a marching-squares pass over every interior 2x2 cell
//!   block emits 0, 1, or 2 line segments per cell, with crossing points
//!   linearly interpolated along the cell edges ([`trace`]).
//! - **Stitching**: each segment is merged into the growing set of paths
//!   for its iso-value by matching endpoints within a numeric tolerance,
//!   in any of the four join orientations ([`path`], [`layer`]).
//!
//! Coordinates stay in grid units (x along columns, y along rows,
//! `x ∈ [0, cols-1]`, `y ∈ [0, rows-1]`); scaling into output units is the
//! consumer's job.
//!
//! # Example
//!
//! ```
//! use scalar_field::ScalarField;
//! use isoline::{extract_layer, DEFAULT_TOLERANCE};
//!
//! // A small bump in the middle of a flat field.
//! let field = ScalarField::from_rows(vec![
//!     vec![0.0, 0.0, 0.0],
//!     vec![0.0, 1.0, 0.0],
//!     vec![0.0, 0.0, 0.0],
//! ]).unwrap();
//!
//! let layer = extract_layer(&field, 0.5, DEFAULT_TOLERANCE);
//! assert_eq!(layer.len(), 1);
//! assert!(layer.paths()[0].is_closed(DEFAULT_TOLERANCE));
//! ```

pub mod extract;
pub mod layer;
pub mod path;
pub mod point;
pub mod trace;

pub use extract::{extract_layer, extract_layers, spread_isovalues};
pub use layer::{IsoLayer, DEFAULT_TOLERANCE};
pub use path::{Joint, Path};
pub use point::{Point, Segment};
pub use trace::{trace_cell, CellCorners};
