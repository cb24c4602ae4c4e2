use eframe::egui::Ui;
use egui_plot::{Legend, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Comparison plot (central panel)
// ---------------------------------------------------------------------------

/// Marker per slot so the two series stay tellable apart in print or on a
/// projector: circles for the first, crosses for the second.
const MARKERS: [MarkerShape; 2] = [MarkerShape::Circle, MarkerShape::Cross];

/// Render the absorption comparison plot in the central panel.
pub fn comparison_plot(ui: &mut Ui, state: &AppState) {
    if state.curves.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No curve for the current selection");
        });
        return;
    }

    Plot::new("comparison_plot")
        .legend(Legend::default())
        .x_axis_label("Frequency (Hz)")
        .y_axis_label("Absorption coefficient")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (index, curve) in state.curves.iter().enumerate() {
                let line_points: PlotPoints = curve.points.clone().into();
                let line = Line::new(line_points)
                    .name(&curve.label)
                    .color(curve.color)
                    .width(2.0);
                plot_ui.line(line);

                let marker_points: PlotPoints = curve.points.clone().into();
                let markers = Points::new(marker_points)
                    .name(&curve.label)
                    .color(curve.color)
                    .shape(MARKERS[index % MARKERS.len()])
                    .radius(4.0);
                plot_ui.points(markers);
            }
        });
}
