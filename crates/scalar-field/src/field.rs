//! Grid storage and accessors.

use serde::Serialize;

use crate::error::{FieldError, Result};

/// An immutable `rows x cols` grid of scalar samples in row-major order.
///
/// Row 0 is the top of the field; column 0 is the left edge. Values are
/// read-only after construction, which is what makes a concurrent sweep
/// over several iso-values safe for callers that want one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScalarField {
    values: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl ScalarField {
    /// Build a field from nested rows.
    ///
    /// Fails on ragged input or on a grid smaller than 2x2.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map(Vec::len).unwrap_or(0);
        if n_rows < 2 || n_cols < 2 {
            return Err(FieldError::too_small(n_rows, n_cols));
        }
        let mut values = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(FieldError::ragged_row(i, n_cols, row.len()));
            }
            values.extend(row);
        }
        Ok(Self {
            values,
            rows: n_rows,
            cols: n_cols,
        })
    }

    /// Build a field from a flat row-major sample buffer.
    pub fn from_values(rows: usize, cols: usize, values: Vec<f64>) -> Result<Self> {
        if rows < 2 || cols < 2 {
            return Err(FieldError::too_small(rows, cols));
        }
        if values.len() != rows * cols {
            return Err(FieldError::length_mismatch(rows * cols, values.len()));
        }
        Ok(Self { values, rows, cols })
    }

    /// Build a field with every sample set to `value`.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Result<Self> {
        Self::from_values(rows, cols, vec![value; rows * cols])
    }

    /// Build a field by evaluating `f(row, col)` at every grid point.
    pub fn from_fn(rows: usize, cols: usize, f: impl Fn(usize, usize) -> f64) -> Result<Self> {
        if rows < 2 || cols < 2 {
            return Err(FieldError::too_small(rows, cols));
        }
        let mut values = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                values.push(f(r, c));
            }
        }
        Ok(Self { values, rows, cols })
    }

    /// Number of rows in the grid.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the grid.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The sample at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows()` or `col >= cols()`, like slice indexing.
    /// The contour sweep stays inside `rows-1 x cols-1` by construction
    /// and never trips this.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(
            row < self.rows && col < self.cols,
            "sample ({row}, {col}) out of bounds for {}x{} field",
            self.rows,
            self.cols
        );
        self.values[row * self.cols + col]
    }

    /// The sample at `(row, col)`, or `None` when out of range.
    pub fn try_get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.values[row * self.cols + col])
        } else {
            None
        }
    }

    /// The flat row-major sample buffer.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Smallest non-NaN sample, or `None` for an all-NaN field.
    pub fn min(&self) -> Option<f64> {
        self.values
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.min(v))))
    }

    /// Largest non-NaN sample, or `None` for an all-NaN field.
    pub fn max(&self) -> Option<f64> {
        self.values
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.max(v))))
    }
}
