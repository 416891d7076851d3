//! Error types for scalar-field construction.

use thiserror::Error;

/// Errors that can occur while building a [`crate::ScalarField`].
///
/// All of these are construction-time failures; once a field exists it is
/// rectangular and large enough to contour, and reads cannot fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The grid has fewer than 2 rows or 2 columns, so it contains no
    /// interior cell to trace.
    #[error("grid is {rows}x{cols}, need at least 2x2")]
    TooSmall { rows: usize, cols: usize },

    /// A row's length differs from the first row's length.
    #[error("row {row} has {actual} samples, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// The flat sample buffer does not match `rows * cols`.
    #[error("sample buffer has {actual} values, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}

impl FieldError {
    /// Create a TooSmall error.
    pub fn too_small(rows: usize, cols: usize) -> Self {
        Self::TooSmall { rows, cols }
    }

    /// Create a RaggedRow error.
    pub fn ragged_row(row: usize, expected: usize, actual: usize) -> Self {
        Self::RaggedRow {
            row,
            expected,
            actual,
        }
    }

    /// Create a LengthMismatch error.
    pub fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::LengthMismatch { expected, actual }
    }
}

/// Result type for scalar-field operations.
pub type Result<T> = std::result::Result<T, FieldError>;
