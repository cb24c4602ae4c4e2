//! Export the selected curves to CSV.
//!
//! Long format, one record per point, so the two series can carry different
//! frequency axes and still land in one tidy table.

use std::io;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::state::CurveView;

/// Write the selected curves to a CSV file.
pub fn write_curves_csv(path: &Path, curves: &[CurveView]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create export CSV '{}'", path.display()))?;
    write_curves(file, curves)
}

fn write_curves<W: io::Write>(output: W, curves: &[CurveView]) -> Result<()> {
    if curves.is_empty() {
        bail!("no curves to export for the current selection");
    }

    let mut writer = csv::Writer::from_writer(output);
    writer
        .write_record(["series", "frequency_hz", "absorption"])
        .context("failed to write export CSV header")?;

    for curve in curves {
        for [frequency, absorption] in &curve.points {
            let frequency = format!("{frequency}");
            let absorption = format!("{absorption}");
            writer
                .write_record([curve.label.as_str(), frequency.as_str(), absorption.as_str()])
                .context("failed to write export CSV record")?;
        }
    }

    writer.flush().context("failed to flush export CSV")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::Color32;

    fn curve(label: &str, points: Vec<[f64; 2]>) -> CurveView {
        CurveView {
            label: label.to_string(),
            color: Color32::LIGHT_BLUE,
            points,
        }
    }

    #[test]
    fn writes_one_record_per_point_plus_header() {
        let curves = vec![
            curve("a", vec![[100.0, 0.2], [500.0, 0.4]]),
            curve("b", vec![[100.0, 0.3]]),
        ];

        let mut out = Vec::new();
        write_curves(&mut out, &curves).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "series,frequency_hz,absorption");
        assert_eq!(lines[1], "a,100,0.2");
        assert_eq!(lines[3], "b,100,0.3");
    }

    #[test]
    fn refuses_an_empty_export() {
        let mut out = Vec::new();
        assert!(write_curves(&mut out, &[]).is_err());
        assert!(out.is_empty());
    }
}
