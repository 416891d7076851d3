//! Full-grid contour extraction.
//!
//! One pass over the field's interior cells feeds every active iso-layer,
//! so contouring ten iso-values costs one sweep, not ten.

use scalar_field::ScalarField;

use crate::layer::IsoLayer;
use crate::trace::CellCorners;

/// Extract the contour paths for a single iso-value.
pub fn extract_layer(field: &ScalarField, isovalue: f64, tolerance: f64) -> IsoLayer {
    extract_layers(field, &[isovalue], tolerance)
        .pop()
        .unwrap_or_else(|| IsoLayer::with_tolerance(isovalue, tolerance))
}

/// Extract contour paths for a set of iso-values in one grid sweep.
///
/// Cells are visited in row-major order, left to right, top to bottom;
/// within a layer that makes the stitching order stable, which matters
/// for inputs sitting exactly on the tolerance boundary. Cells with a
/// NaN corner are skipped. Iso-values strictly between the field's
/// minimum and maximum produce non-empty layers; anything outside that
/// range yields an empty one.
pub fn extract_layers(field: &ScalarField, isovalues: &[f64], tolerance: f64) -> Vec<IsoLayer> {
    let mut layers: Vec<IsoLayer> = isovalues
        .iter()
        .map(|&v| IsoLayer::with_tolerance(v, tolerance))
        .collect();

    for row in 0..field.rows() - 1 {
        for col in 0..field.cols() - 1 {
            let corners = CellCorners::new(
                field.get(row, col),
                field.get(row, col + 1),
                field.get(row + 1, col),
                field.get(row + 1, col + 1),
            );
            if corners.any_nan() {
                continue;
            }
            for layer in &mut layers {
                layer.trace_cell(row, col, &corners);
            }
        }
    }

    tracing::debug!(
        rows = field.rows(),
        cols = field.cols(),
        num_layers = layers.len(),
        total_paths = layers.iter().map(IsoLayer::len).sum::<usize>(),
        "extracted iso-layers"
    );

    layers
}

/// `count` evenly spaced iso-values from `low` to `high` inclusive.
///
/// Handy for topography-style banding; pair it with the field's
/// `min()`/`max()` to stay strictly inside the sampled range. `count`
/// of 0 gives nothing and 1 gives just `low`.
pub fn spread_isovalues(low: f64, high: f64, count: usize) -> Vec<f64> {
    match count {
        0 => vec![],
        1 => vec![low],
        _ => {
            let step = (high - low) / (count - 1) as f64;
            (0..count).map(|i| low + step * i as f64).collect()
        }
    }
}
