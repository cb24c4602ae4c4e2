//! Vector PDF export of the comparison chart.
//!
//! The chart is redrawn from the cached curve views rather than screenshotted
//! from the UI: axes, dashed grid, tick labels, the curves and a legend on a
//! single landscape A4 page. Only built-in PDF fonts are used, so the export
//! works identically on machines with no font stack configured.

use std::path::Path;

use anyhow::{anyhow, bail, Result};
use eframe::egui::Color32;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, LineDashPattern, Mm, PdfDocument,
    PdfLayerReference, Point, Rgb,
};

use crate::state::{CurveView, Selection};

// Page geometry (A4 landscape, millimetres).
const PAGE_W: f64 = 297.0;
const PAGE_H: f64 = 210.0;
const MARGIN_LEFT: f64 = 30.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 28.0;
const MARGIN_BOTTOM: f64 = 26.0;

const PLOT_W: f64 = PAGE_W - MARGIN_LEFT - MARGIN_RIGHT;
const PLOT_H: f64 = PAGE_H - MARGIN_TOP - MARGIN_BOTTOM;

/// Write the comparison chart for the current selection to `path`.
pub fn write_chart_pdf(path: &Path, curves: &[CurveView], selection: &Selection) -> Result<()> {
    let bytes = render_chart_pdf(curves, selection)?;
    std::fs::write(path, &bytes)
        .map_err(|e| anyhow!("failed to write PDF '{}': {e}", path.display()))?;
    Ok(())
}

fn render_chart_pdf(curves: &[CurveView], selection: &Selection) -> Result<Vec<u8>> {
    let drawable: Vec<&CurveView> = curves.iter().filter(|c| !c.points.is_empty()).collect();
    if drawable.is_empty() {
        bail!("no curves to export for the current selection");
    }

    let (doc, page, layer) = PdfDocument::new(
        "Absorption comparison",
        Mm(PAGE_W as f32),
        Mm(PAGE_H as f32),
        "chart",
    );
    let layer = doc.get_page(page).get_layer(layer);

    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| anyhow!("failed to register PDF font: {e}"))?;
    let font_bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| anyhow!("failed to register PDF font: {e}"))?;

    let (x_min, x_max, y_min, y_max) = data_bounds(&drawable);
    let x_of = |f: f64| Mm((MARGIN_LEFT + (f - x_min) / (x_max - x_min) * PLOT_W) as f32);
    let y_of = |a: f64| Mm((MARGIN_BOTTOM + (a - y_min) / (y_max - y_min) * PLOT_H) as f32);

    draw_frame_and_grid(&layer, &font, x_min, x_max, y_min, y_max, &x_of, &y_of);

    // ---- Curves ----
    for curve in &drawable {
        layer.set_outline_color(pdf_color(curve.color));
        layer.set_outline_thickness(1.4);
        let points = curve
            .points
            .iter()
            .map(|&[f, a]| (Point::new(x_of(f), y_of(a)), false))
            .collect();
        layer.add_line(Line {
            points,
            is_closed: false,
        });
    }

    // ---- Legend (top-left inside the frame) ----
    layer.set_outline_thickness(1.4);
    for (index, curve) in drawable.iter().enumerate() {
        let y = PAGE_H - MARGIN_TOP - 8.0 - index as f64 * 7.0;
        layer.set_outline_color(pdf_color(curve.color));
        layer.add_line(Line {
            points: vec![
                (Point::new(Mm((MARGIN_LEFT + 6.0) as f32), Mm((y + 1.2) as f32)), false),
                (Point::new(Mm((MARGIN_LEFT + 16.0) as f32), Mm((y + 1.2) as f32)), false),
            ],
            is_closed: false,
        });
        layer.set_fill_color(text_color());
        layer.use_text(curve.label.clone(), 10.0, Mm((MARGIN_LEFT + 19.0) as f32), Mm(y as f32), &font);
    }

    // ---- Captions ----
    let title = format!(
        "Absorption curves, thickness {:.0} mm, density {:.0} kg/m³",
        selection.thickness_mm, selection.density_kg_m3
    );
    layer.set_fill_color(text_color());
    layer.use_text(
        title.clone(),
        14.0,
        Mm(((PAGE_W - text_width_mm(&title, 14.0)) / 2.0) as f32),
        Mm((PAGE_H - 16.0) as f32),
        &font_bold,
    );
    let x_caption = "Frequency (Hz)";
    layer.use_text(
        x_caption,
        11.0,
        Mm((MARGIN_LEFT + (PLOT_W - text_width_mm(x_caption, 11.0)) / 2.0) as f32),
        Mm(9.0),
        &font,
    );
    layer.use_text(
        "Absorption coefficient",
        11.0,
        Mm(10.0),
        Mm((PAGE_H - MARGIN_TOP + 4.0) as f32),
        &font,
    );

    doc.save_to_bytes()
        .map_err(|e| anyhow!("failed to assemble PDF: {e}"))
}

#[allow(clippy::too_many_arguments)]
fn draw_frame_and_grid(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    x_of: &dyn Fn(f64) -> Mm,
    y_of: &dyn Fn(f64) -> Mm,
) {
    // Frame.
    layer.set_outline_color(text_color());
    layer.set_outline_thickness(0.8);
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(MARGIN_LEFT as f32), Mm(MARGIN_BOTTOM as f32)), false),
            (Point::new(Mm((MARGIN_LEFT + PLOT_W) as f32), Mm(MARGIN_BOTTOM as f32)), false),
            (
                Point::new(Mm((MARGIN_LEFT + PLOT_W) as f32), Mm((MARGIN_BOTTOM + PLOT_H) as f32)),
                false,
            ),
            (Point::new(Mm(MARGIN_LEFT as f32), Mm((MARGIN_BOTTOM + PLOT_H) as f32)), false),
        ],
        is_closed: true,
    });

    // Dashed grid lines at the ticks, labels outside the frame.
    let grid_color = Color::Rgb(Rgb::new(0.75, 0.75, 0.78, None));
    let x_step = tick_step(x_max - x_min);
    let y_step = tick_step(y_max - y_min);

    layer.set_line_dash_pattern(LineDashPattern {
        dash_1: Some(2),
        ..Default::default()
    });
    layer.set_outline_color(grid_color.clone());
    layer.set_outline_thickness(0.3);

    for tick in ticks(x_min, x_max, x_step) {
        layer.add_line(Line {
            points: vec![
                (Point::new(x_of(tick), Mm(MARGIN_BOTTOM as f32)), false),
                (Point::new(x_of(tick), Mm((MARGIN_BOTTOM + PLOT_H) as f32)), false),
            ],
            is_closed: false,
        });
    }
    for tick in ticks(y_min, y_max, y_step) {
        layer.add_line(Line {
            points: vec![
                (Point::new(Mm(MARGIN_LEFT as f32), y_of(tick)), false),
                (Point::new(Mm((MARGIN_LEFT + PLOT_W) as f32), y_of(tick)), false),
            ],
            is_closed: false,
        });
    }
    layer.set_line_dash_pattern(LineDashPattern::default());

    layer.set_fill_color(text_color());
    for tick in ticks(x_min, x_max, x_step) {
        let label = fmt_tick(tick, x_step);
        layer.use_text(
            label.clone(),
            9.0,
            Mm(x_of(tick).0 - (text_width_mm(&label, 9.0) / 2.0) as f32),
            Mm((MARGIN_BOTTOM - 5.5) as f32),
            font,
        );
    }
    for tick in ticks(y_min, y_max, y_step) {
        let label = fmt_tick(tick, y_step);
        layer.use_text(
            label.clone(),
            9.0,
            Mm((MARGIN_LEFT - 3.0 - text_width_mm(&label, 9.0)) as f32),
            Mm(y_of(tick).0 - 1.2),
            font,
        );
    }
}

// ---------------------------------------------------------------------------
// Geometry helpers
// ---------------------------------------------------------------------------

/// Data bounds over all curves. The y-range always spans at least the
/// physical 0..1 coefficient band; degenerate ranges are widened so the
/// mapping stays finite.
fn data_bounds(curves: &[&CurveView]) -> (f64, f64, f64, f64) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_lo = f64::INFINITY;
    let mut y_hi = f64::NEG_INFINITY;

    for curve in curves {
        for &[f, a] in &curve.points {
            x_min = x_min.min(f);
            x_max = x_max.max(f);
            y_lo = y_lo.min(a);
            y_hi = y_hi.max(a);
        }
    }

    if x_max - x_min < 1e-9 {
        x_min -= 1.0;
        x_max += 1.0;
    }
    let y_min = y_lo.min(0.0);
    let y_max = y_hi.max(1.0);
    (x_min, x_max, y_min, y_max)
}

/// A 1/2/5 step giving roughly five intervals over `range`.
fn tick_step(range: f64) -> f64 {
    let raw = range / 5.0;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let step = if normalized < 1.5 {
        1.0
    } else if normalized < 3.5 {
        2.0
    } else if normalized < 7.5 {
        5.0
    } else {
        10.0
    };
    step * magnitude
}

fn ticks(min: f64, max: f64, step: f64) -> Vec<f64> {
    let mut out = Vec::new();
    let mut tick = (min / step).ceil() * step;
    while tick <= max + step * 1e-6 {
        out.push(tick);
        tick += step;
    }
    out
}

fn fmt_tick(value: f64, step: f64) -> String {
    if step >= 1.0 {
        format!("{value:.0}")
    } else if step >= 0.1 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

/// Rough Helvetica width estimate (average glyph ≈ 0.5 em) for centering and
/// right-aligning labels; exact metrics are not worth carrying here.
fn text_width_mm(text: &str, font_size_pt: f64) -> f64 {
    text.chars().count() as f64 * font_size_pt * 0.352_778 * 0.5
}

fn text_color() -> Color {
    Color::Rgb(Rgb::new(0.15, 0.15, 0.18, None))
}

fn pdf_color(color: Color32) -> Color {
    Color::Rgb(Rgb::new(
        f32::from(color.r()) / 255.0,
        f32::from(color.g()) / 255.0,
        f32::from(color.b()) / 255.0,
        None,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve(label: &str, points: Vec<[f64; 2]>) -> CurveView {
        CurveView {
            label: label.to_string(),
            color: Color32::LIGHT_BLUE,
            points,
        }
    }

    fn selection() -> Selection {
        Selection {
            thickness_mm: 20.0,
            density_kg_m3: 110.0,
        }
    }

    #[test]
    fn renders_a_pdf_document() {
        let curves = vec![
            curve("a", vec![[100.0, 0.2], [500.0, 0.4], [1000.0, 0.6]]),
            curve("b", vec![[100.0, 0.3], [500.0, 0.5], [1000.0, 0.7]]),
        ];
        let bytes = render_chart_pdf(&curves, &selection()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 1000);
    }

    #[test]
    fn refuses_an_empty_chart() {
        assert!(render_chart_pdf(&[], &selection()).is_err());
        assert!(render_chart_pdf(&[curve("a", Vec::new())], &selection()).is_err());
    }

    #[test]
    fn tick_steps_are_round_numbers() {
        assert!((tick_step(1.0) - 0.2).abs() < 1e-9);
        assert!((tick_step(1900.0) - 500.0).abs() < 1e-6);
        assert!((tick_step(5000.0) - 1000.0).abs() < 1e-6);
    }

    #[test]
    fn ticks_cover_the_range_inclusively() {
        let t = ticks(0.0, 1.0, 0.2);
        assert_eq!(t.len(), 6);
        assert!((t[5] - 1.0).abs() < 1e-9);
    }
}
