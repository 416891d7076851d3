//! Rectangular scalar-field storage for contour extraction.
//!
//! A [`ScalarField`] is an immutable `rows x cols` grid of `f64` samples,
//! conceptually a height map with values in 0.0-1.0 (any ordered numeric
//! range works). It is the input boundary of the contouring core: field
//! generation happens upstream, contour tracing happens downstream in the
//! `isoline` crate.
//!
//! Construction is the only place validation happens. A field that exists
//! is guaranteed rectangular and at least 2x2, so the cell sweep in the
//! tracer never has to re-check bounds.

pub mod error;
pub mod field;

pub use error::{FieldError, Result};
pub use field::ScalarField;
