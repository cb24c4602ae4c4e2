use eframe::egui::{self, Color32, RichText, Ui};

use crate::export;
use crate::state::{AppState, SLOT_COUNT};

// ---------------------------------------------------------------------------
// Left side panel – measurement slots and material parameters
// ---------------------------------------------------------------------------

/// Render the left parameter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Parameters");
    ui.separator();

    // ---- Measurement slots ----
    for index in 0..SLOT_COUNT {
        ui.strong(format!("Measurement {}", index + 1));
        ui.horizontal(|ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_measurement_dialog(state, index);
            }
            if state.slots[index].path.is_some() && ui.button("Clear").clicked() {
                state.clear_slot(index);
            }
        });
        let source = match &state.slots[index].path {
            Some(path) => path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("loaded file")
                .to_string(),
            None => "built-in sample".to_string(),
        };
        ui.label(RichText::new(source).weak());
        ui.add_space(6.0);
    }

    ui.separator();

    // Clone the axes so we can mutate the selection inside the combo loops.
    let thicknesses = state.grid.thicknesses_mm.clone();
    let densities = state.grid.densities_kg_m3.clone();

    // ---- Thickness selector ----
    ui.strong("Thickness (mm)");
    egui::ComboBox::from_id_salt("thickness")
        .selected_text(format!("{:.0} mm", state.selection.thickness_mm))
        .show_ui(ui, |ui: &mut Ui| {
            for &t in &thicknesses {
                ui.selectable_value(&mut state.selection.thickness_mm, t, format!("{t:.0} mm"));
            }
        });
    ui.add_space(4.0);

    // ---- Density selector ----
    ui.strong("Density (kg/m³)");
    egui::ComboBox::from_id_salt("density")
        .selected_text(format!("{:.0} kg/m³", state.selection.density_kg_m3))
        .show_ui(ui, |ui: &mut Ui| {
            for &d in &densities {
                ui.selectable_value(&mut state.selection.density_kg_m3, d, format!("{d:.0} kg/m³"));
            }
        });

    ui.separator();

    // ---- Export ----
    ui.strong("Export");
    if ui.button("Comparison as PDF…").clicked() {
        export_pdf_dialog(state);
    }
    if ui.button("Curves as CSV…").clicked() {
        export_csv_dialog(state);
    }

    // Recompute curves after any selection change.
    state.refresh_curves();
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            for index in 0..SLOT_COUNT {
                if ui.button(format!("Open measurement {}…", index + 1)).clicked() {
                    open_measurement_dialog(state, index);
                    ui.close_menu();
                }
            }
            ui.separator();
            for index in 0..SLOT_COUNT {
                if ui.button(format!("Clear measurement {}", index + 1)).clicked() {
                    state.clear_slot(index);
                    ui.close_menu();
                }
            }
        });
        ui.menu_button("Export", |ui: &mut Ui| {
            if ui.button("Comparison as PDF…").clicked() {
                export_pdf_dialog(state);
                ui.close_menu();
            }
            if ui.button("Curves as CSV…").clicked() {
                export_csv_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{}  vs  {}",
            state.slots[0].dataset.label, state.slots[1].dataset.label
        ));

        if state.any_sample() {
            ui.separator();
            ui.label(
                RichText::new("Sample data in use, load measurement files to compare")
                    .color(Color32::GOLD),
            );
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

fn open_measurement_dialog(state: &mut AppState, index: usize) {
    let title = format!("Open measurement {}", index + 1);
    let file = rfd::FileDialog::new()
        .set_title(title.as_str())
        .add_filter("Measurement files", &["xlsx", "xlsm", "xls", "ods", "csv", "json"])
        .add_filter("Excel workbooks", &["xlsx", "xlsm", "xls"])
        .add_filter("OpenDocument", &["ods"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.load_slot(index, path);
    }
}

fn export_pdf_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export comparison as PDF")
        .add_filter("PDF", &["pdf"])
        .set_file_name("absorption_comparison.pdf")
        .save_file();

    let Some(path) = file else { return };
    match export::write_chart_pdf(&path, &state.curves, &state.selection) {
        Ok(()) => log::info!("exported comparison chart to {}", path.display()),
        Err(err) => {
            log::error!("PDF export failed: {err:#}");
            state.status_message = Some(format!("Error: {err:#}"));
        }
    }
}

fn export_csv_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export selected curves as CSV")
        .add_filter("CSV", &["csv"])
        .set_file_name("absorption_curves.csv")
        .save_file();

    let Some(path) = file else { return };
    match export::write_curves_csv(&path, &state.curves) {
        Ok(()) => log::info!("exported selected curves to {}", path.display()),
        Err(err) => {
            log::error!("CSV export failed: {err:#}");
            state.status_message = Some(format!("Error: {err:#}"));
        }
    }
}
