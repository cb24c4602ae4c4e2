use crate::error::{Axis, SelectError};

// ---------------------------------------------------------------------------
// AxisGrid – the (thickness × density) column layout
// ---------------------------------------------------------------------------

/// The material-parameter grid that indexes the absorption matrix columns.
///
/// Columns are laid out thickness-major, density-minor: for the default grid
/// the 9 data columns are (10,75), (10,110), (10,150), (20,75), … (30,150).
/// The grid is an explicit value carried by each dataset, not a constant
/// buried in the loader, so a file with a different layout can be described
/// without touching the parsing code.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisGrid {
    /// Material thickness steps (mm).
    pub thicknesses_mm: Vec<f64>,
    /// Material density steps (kg/m³).
    pub densities_kg_m3: Vec<f64>,
}

impl Default for AxisGrid {
    fn default() -> Self {
        AxisGrid {
            thicknesses_mm: vec![10.0, 20.0, 30.0],
            densities_kg_m3: vec![75.0, 110.0, 150.0],
        }
    }
}

impl AxisGrid {
    /// Number of (thickness, density) combinations, i.e. the expected number
    /// of absorption data columns.
    pub fn column_count(&self) -> usize {
        self.thicknesses_mm.len() * self.densities_kg_m3.len()
    }

    /// Map a (thickness, density) pair to its matrix column.
    ///
    /// The mapping is a bijection between grid pairs and `0..column_count()`.
    /// Values not on the grid are a caller contract violation and come back
    /// as [`SelectError::OffGrid`].
    pub fn column_of(&self, thickness_mm: f64, density_kg_m3: f64) -> Result<usize, SelectError> {
        let t_idx = self
            .thicknesses_mm
            .iter()
            .position(|&t| t == thickness_mm)
            .ok_or(SelectError::OffGrid {
                axis: Axis::Thickness,
                value: thickness_mm,
            })?;
        let d_idx = self
            .densities_kg_m3
            .iter()
            .position(|&d| d == density_kg_m3)
            .ok_or(SelectError::OffGrid {
                axis: Axis::Density,
                value: density_kg_m3,
            })?;
        Ok(t_idx * self.densities_kg_m3.len() + d_idx)
    }

    /// All (thickness, density) pairs in column order.
    pub fn pairs(&self) -> Vec<(f64, f64)> {
        let mut out = Vec::with_capacity(self.column_count());
        for &t in &self.thicknesses_mm {
            for &d in &self.densities_kg_m3 {
                out.push((t, d));
            }
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Matrix – rectangular absorption table
// ---------------------------------------------------------------------------

/// Rectangular 2-D table of absorption coefficients.
///
/// Rows align with the sheet's measurement rows; width is fixed at
/// construction (widest input row), short rows are padded with `NaN`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: Vec<Vec<f64>>,
    columns: usize,
}

impl Matrix {
    /// Build a rectangular matrix from possibly ragged rows.
    pub fn from_rows(mut rows: Vec<Vec<f64>>) -> Self {
        let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(columns, f64::NAN);
        }
        Matrix { rows, columns }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// Extract one column, top to bottom.
    pub fn column(&self, index: usize) -> Option<Vec<f64>> {
        if index >= self.columns {
            return None;
        }
        Some(self.rows.iter().map(|row| row[index]).collect())
    }
}

// ---------------------------------------------------------------------------
// MeasurementDataset – one loaded measurement file
// ---------------------------------------------------------------------------

/// The parsed content of one measurement file.
///
/// Immutable after construction; curves are re-derived from it on every
/// selection change. Note that `absorption.column_count()` is NOT validated
/// against `grid.column_count()` here: a disagreement surfaces as a typed
/// dimension error when a curve is selected.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementDataset {
    /// Series label, normally the file stem. Cosmetic.
    pub label: String,
    /// Frequency axis (Hz), empty cells dropped, sheet order preserved.
    pub frequencies_hz: Vec<f64>,
    /// Column layout the absorption matrix is assumed to follow.
    pub grid: AxisGrid,
    /// Absorption coefficients, rows aligned with the sheet's rows.
    pub absorption: Matrix,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_has_nine_columns() {
        let grid = AxisGrid::default();
        assert_eq!(grid.column_count(), 9);
        assert_eq!(grid.pairs().len(), 9);
    }

    #[test]
    fn column_of_is_the_documented_bijection() {
        let grid = AxisGrid::default();
        assert_eq!(grid.column_of(10.0, 75.0), Ok(0));
        assert_eq!(grid.column_of(10.0, 110.0), Ok(1));
        assert_eq!(grid.column_of(10.0, 150.0), Ok(2));
        assert_eq!(grid.column_of(20.0, 75.0), Ok(3));
        assert_eq!(grid.column_of(30.0, 150.0), Ok(8));

        // Every pair maps to a distinct column in 0..9, in enumeration order.
        for (expected, (t, d)) in grid.pairs().into_iter().enumerate() {
            assert_eq!(grid.column_of(t, d), Ok(expected));
        }
    }

    #[test]
    fn column_of_rejects_values_off_the_grid() {
        let grid = AxisGrid::default();
        assert_eq!(
            grid.column_of(15.0, 75.0),
            Err(SelectError::OffGrid {
                axis: Axis::Thickness,
                value: 15.0
            })
        );
        assert_eq!(
            grid.column_of(10.0, 100.0),
            Err(SelectError::OffGrid {
                axis: Axis::Density,
                value: 100.0
            })
        );
    }

    #[test]
    fn ragged_rows_are_padded_to_the_widest() {
        let m = Matrix::from_rows(vec![vec![0.1, 0.2, 0.3], vec![0.4]]);
        assert_eq!(m.row_count(), 2);
        assert_eq!(m.column_count(), 3);
        let col1 = m.column(1).unwrap();
        assert_eq!(col1[0], 0.2);
        assert!(col1[1].is_nan());
        assert!(m.column(3).is_none());
    }

    #[test]
    fn empty_matrix_has_zero_width() {
        let m = Matrix::from_rows(Vec::new());
        assert_eq!(m.row_count(), 0);
        assert_eq!(m.column_count(), 0);
        assert!(m.column(0).is_none());
    }
}
