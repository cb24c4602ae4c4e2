//! Curve selection: resolve a (thickness, density) pair into one column of
//! the absorption matrix.
//!
//! This is the single place where a disagreement between a file's actual
//! column count and the assumed grid layout surfaces, as a typed
//! [`SelectError::Dimension`]. The loader deliberately defers that check to
//! here.

use super::model::MeasurementDataset;
use crate::error::SelectError;

/// Extract the absorption-vs-frequency curve for one (thickness, density)
/// pair, one value per matrix row.
///
/// Pure function of its inputs; both values must be members of the dataset's
/// grid axes (the selection widgets only offer those).
pub fn select_curve(
    dataset: &MeasurementDataset,
    thickness_mm: f64,
    density_kg_m3: f64,
) -> Result<Vec<f64>, SelectError> {
    let column = dataset.grid.column_of(thickness_mm, density_kg_m3)?;
    dataset
        .absorption
        .column(column)
        .ok_or(SelectError::Dimension {
            column,
            columns: dataset.absorption.column_count(),
        })
}
