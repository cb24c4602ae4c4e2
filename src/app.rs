use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct AbsorbViewApp {
    pub state: AppState,
}

impl Default for AbsorbViewApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl eframe::App for AbsorbViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: measurements and material parameters ----
        egui::SidePanel::left("parameter_panel")
            .default_width(230.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: comparison plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::comparison_plot(ui, &self.state);
        });

        // ---- Dimension notice: small, non-blocking, out of the chart's way ----
        if let Some(notice) = &self.state.dimension_notice {
            egui::Area::new(egui::Id::new("dimension_notice"))
                .anchor(egui::Align2::RIGHT_BOTTOM, [-12.0, -12.0])
                .show(ctx, |ui| {
                    ui.label(
                        egui::RichText::new(notice)
                            .small()
                            .color(egui::Color32::RED),
                    );
                });
        }
    }
}
