use std::path::PathBuf;

use eframe::egui::Color32;

use crate::color::series_color;
use crate::data::loader::load_file;
use crate::data::model::{AxisGrid, MeasurementDataset};
use crate::data::sample::sample_dataset;
use crate::data::select::select_curve;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Number of measurement slots shown side by side.
pub const SLOT_COUNT: usize = 2;

/// One measurement slot: the built-in sample until a file is loaded into it.
pub struct DatasetSlot {
    pub path: Option<PathBuf>,
    pub dataset: MeasurementDataset,
    pub is_sample: bool,
}

impl DatasetSlot {
    fn sample(index: usize) -> Self {
        DatasetSlot {
            path: None,
            dataset: sample_dataset(&format!("Sample {}", index + 1)),
            is_sample: true,
        }
    }
}

/// Current (thickness, density) choice; always members of the grid axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub thickness_mm: f64,
    pub density_kg_m3: f64,
}

/// One curve ready to draw: finite (frequency, absorption) points only.
/// Frequency and value sequences are zipped over their common prefix, so a
/// dataset whose frequency column and matrix row count disagree still plots.
#[derive(Debug, Clone)]
pub struct CurveView {
    pub label: String,
    pub color: Color32,
    pub points: Vec<[f64; 2]>,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    pub grid: AxisGrid,
    pub slots: [DatasetSlot; SLOT_COUNT],
    pub selection: Selection,

    /// Curves for the current selection (cached, rebuilt by [`Self::refresh_curves`]).
    pub curves: Vec<CurveView>,

    /// Load/export error shown in the top bar.
    pub status_message: Option<String>,

    /// Non-blocking dimension-mismatch notice, anchored bottom-right.
    pub dimension_notice: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        let grid = AxisGrid::default();
        let selection = Selection {
            thickness_mm: grid.thicknesses_mm.first().copied().unwrap_or(0.0),
            density_kg_m3: grid.densities_kg_m3.first().copied().unwrap_or(0.0),
        };
        let mut state = AppState {
            grid,
            slots: [DatasetSlot::sample(0), DatasetSlot::sample(1)],
            selection,
            curves: Vec::new(),
            status_message: None,
            dimension_notice: None,
        };
        state.refresh_curves();
        state
    }
}

impl AppState {
    /// Load a measurement file into a slot. On failure the slot keeps its
    /// previous dataset and the error goes to the status line.
    pub fn load_slot(&mut self, index: usize, path: PathBuf) {
        match load_file(&path, &self.grid) {
            Ok(dataset) => {
                log::info!(
                    "loaded {}: {} frequency rows, {}×{} absorption matrix",
                    path.display(),
                    dataset.frequencies_hz.len(),
                    dataset.absorption.row_count(),
                    dataset.absorption.column_count()
                );
                self.slots[index] = DatasetSlot {
                    path: Some(path),
                    dataset,
                    is_sample: false,
                };
                self.status_message = None;
            }
            Err(err) => {
                log::error!("failed to load {}: {err}", path.display());
                self.status_message = Some(format!("Error: {err}"));
            }
        }
        self.refresh_curves();
    }

    /// Put a slot back on the built-in sample.
    pub fn clear_slot(&mut self, index: usize) {
        self.slots[index] = DatasetSlot::sample(index);
        self.refresh_curves();
    }

    /// Whether any slot is still showing the built-in sample.
    pub fn any_sample(&self) -> bool {
        self.slots.iter().any(|s| s.is_sample)
    }

    /// Recompute the cached curve views for the current selection.
    ///
    /// A slot whose matrix cannot cover the selected column contributes no
    /// curve and raises the dimension notice instead; the other slot still
    /// plots.
    pub fn refresh_curves(&mut self) {
        self.curves.clear();
        self.dimension_notice = None;

        for (index, slot) in self.slots.iter().enumerate() {
            let selected = select_curve(
                &slot.dataset,
                self.selection.thickness_mm,
                self.selection.density_kg_m3,
            );
            match selected {
                Ok(values) => {
                    let points = slot
                        .dataset
                        .frequencies_hz
                        .iter()
                        .zip(values.iter())
                        .filter(|(f, a)| f.is_finite() && a.is_finite())
                        .map(|(&f, &a)| [f, a])
                        .collect();
                    self.curves.push(CurveView {
                        label: slot.dataset.label.clone(),
                        color: series_color(index),
                        points,
                    });
                }
                Err(err) => {
                    // Dimension is the expected runtime case here; OffGrid
                    // cannot arise from the enumerated selection widgets.
                    self.dimension_notice = Some(format!("{}: {err}", slot.dataset.label));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Matrix;

    #[test]
    fn starts_on_two_sample_slots_without_raising() {
        let state = AppState::default();
        assert!(state.any_sample());
        assert_eq!(state.selection.thickness_mm, 10.0);
        assert_eq!(state.selection.density_kg_m3, 75.0);
        // (10, 75) is column 0, inside the sample's 4 columns.
        assert_eq!(state.curves.len(), 2);
        assert!(state.dimension_notice.is_none());
        // Sample has 4 frequencies but 3 matrix rows: common prefix plots.
        assert_eq!(state.curves[0].points.len(), 3);
    }

    #[test]
    fn selection_past_sample_width_sets_the_notice_and_keeps_running() {
        let mut state = AppState::default();
        state.selection = Selection {
            thickness_mm: 30.0,
            density_kg_m3: 150.0,
        };
        state.refresh_curves();

        assert!(state.curves.is_empty());
        let notice = state.dimension_notice.as_deref().unwrap();
        assert!(notice.contains("dimension mismatch"));
    }

    #[test]
    fn failed_load_keeps_the_sample_and_reports() {
        let mut state = AppState::default();
        state.load_slot(0, PathBuf::from("/nonexistent/measurements.csv"));

        assert!(state.slots[0].is_sample);
        assert!(state.status_message.as_deref().unwrap().starts_with("Error:"));
        assert_eq!(state.curves.len(), 2);
    }

    #[test]
    fn clear_slot_restores_the_sample() {
        let mut state = AppState::default();
        state.slots[1] = DatasetSlot {
            path: Some(PathBuf::from("lab.xlsx")),
            dataset: MeasurementDataset {
                label: "lab".to_string(),
                frequencies_hz: vec![100.0, 200.0],
                grid: state.grid.clone(),
                absorption: Matrix::from_rows(vec![vec![0.5; 9]; 2]),
            },
            is_sample: false,
        };
        state.refresh_curves();
        assert!(!state.slots[1].is_sample);

        state.clear_slot(1);
        assert!(state.slots[1].is_sample);
        assert_eq!(state.slots[1].dataset.label, "Sample 2");
    }

    #[test]
    fn one_full_dataset_still_plots_when_the_other_slot_misses_the_column() {
        let mut state = AppState::default();
        state.slots[0] = DatasetSlot {
            path: Some(PathBuf::from("lab.xlsx")),
            dataset: MeasurementDataset {
                label: "lab".to_string(),
                frequencies_hz: vec![100.0, 200.0, 300.0],
                grid: state.grid.clone(),
                absorption: Matrix::from_rows(vec![vec![0.5; 9]; 3]),
            },
            is_sample: false,
        };
        state.selection = Selection {
            thickness_mm: 20.0,
            density_kg_m3: 110.0,
        };
        state.refresh_curves();

        // Slot 0 covers column 4, the sample slot does not.
        assert_eq!(state.curves.len(), 1);
        assert_eq!(state.curves[0].label, "lab");
        assert!(state.dimension_notice.is_some());
    }
}
