/// Export layer.
///
/// The interactive chart lives in `ui::plot`; exports are rendered
/// separately so they do not depend on any UI surface:
/// * `pdf` – the comparison chart as a single-page vector PDF
/// * `curves` – the currently selected curves as CSV
pub mod curves;
pub mod pdf;

pub use curves::write_curves_csv;
pub use pdf::write_chart_pdf;
