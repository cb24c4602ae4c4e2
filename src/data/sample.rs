//! Built-in fallback dataset.
//!
//! Shown for any slot without a loaded file so the interface stays usable
//! before (or instead of) real measurements. The values are intentionally
//! small and not on the full 9-column layout; selections that index past its
//! 4 columns produce the ordinary dimension notice.

use super::model::{AxisGrid, Matrix, MeasurementDataset};

/// The fixed demo dataset: 4 frequency bands, a 3×4 absorption table.
pub fn sample_dataset(label: &str) -> MeasurementDataset {
    MeasurementDataset {
        label: label.to_string(),
        frequencies_hz: vec![100.0, 500.0, 1000.0, 2000.0],
        grid: AxisGrid::default(),
        absorption: Matrix::from_rows(vec![
            vec![0.2, 0.4, 0.6, 0.8],
            vec![0.25, 0.45, 0.65, 0.85],
            vec![0.3, 0.5, 0.7, 0.9],
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_shape_is_fixed() {
        let ds = sample_dataset("Sample 1");
        assert_eq!(ds.frequencies_hz, vec![100.0, 500.0, 1000.0, 2000.0]);
        assert_eq!(ds.absorption.row_count(), 3);
        assert_eq!(ds.absorption.column_count(), 4);
        assert_eq!(ds.grid.column_count(), 9);
        assert_eq!(ds.label, "Sample 1");
    }
}
