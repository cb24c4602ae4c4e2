mod app;
mod color;
mod data;
mod error;
mod export;
mod state;
mod ui;

use app::AbsorbViewApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Absorbview – Acoustic Absorption Comparison",
        options,
        Box::new(|_cc| Ok(Box::new(AbsorbViewApp::default()))),
    )
}
