use std::fs::File;
use std::io;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use serde::Deserialize;

use super::model::{AxisGrid, Matrix, MeasurementDataset};
use crate::error::LoadError;

/// One sheet row before the drop rules are applied: the frequency cell
/// (column 0) and the absorption cells (columns 1..). `None` marks an empty
/// or non-numeric cell.
type RawRow = (Option<f64>, Vec<Option<f64>>);

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a measurement file. Dispatch by extension.
///
/// Supported formats:
/// * `.xlsx` / `.xlsm` / `.xls` / `.ods` – workbook, first sheet only
/// * `.csv`  – same column layout as the workbook sheet
/// * `.json` – `{ "frequencies": [...], "absorption": [[...], ...] }`
///
/// All formats share the layout: header row, column 0 holds frequencies
/// (Hz), columns 1.. hold absorption coefficients for every
/// (thickness, density) combination of `grid`, thickness-major. The column
/// count is deliberately not validated against the grid here; a mismatch
/// is reported when a curve is selected (see `data::select`), though a
/// warning is logged so misdrawn layouts are diagnosable.
pub fn load_file(path: &Path, grid: &AxisGrid) -> Result<MeasurementDataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let raw = match ext.as_str() {
        "xlsx" | "xlsm" | "xls" | "ods" => read_workbook(path)?,
        "csv" => {
            let file = File::open(path).map_err(|source| LoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            read_csv(file)?
        }
        "json" => {
            let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            read_json(&text)?
        }
        other => {
            return Err(LoadError::UnsupportedExtension {
                ext: other.to_string(),
            })
        }
    };

    let label = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("measurement")
        .to_string();

    Ok(assemble(label, raw, grid.clone()))
}

/// Apply the drop rules and attach the grid.
///
/// * frequencies: empty cells dropped, order preserved
/// * absorption: rows with no numeric cell at all dropped, remaining empty
///   cells become `NaN`, order preserved
fn assemble(label: String, raw: Vec<RawRow>, grid: AxisGrid) -> MeasurementDataset {
    let frequencies_hz: Vec<f64> = raw.iter().filter_map(|(freq, _)| *freq).collect();

    let rows: Vec<Vec<f64>> = raw
        .into_iter()
        .filter_map(|(_, cells)| {
            if cells.iter().all(Option::is_none) {
                None
            } else {
                Some(cells.into_iter().map(|c| c.unwrap_or(f64::NAN)).collect())
            }
        })
        .collect();
    let absorption = Matrix::from_rows(rows);

    if absorption.column_count() != grid.column_count() {
        log::warn!(
            "{label}: {} data columns where the grid expects {}; some selections will report a dimension mismatch",
            absorption.column_count(),
            grid.column_count()
        );
    }

    MeasurementDataset {
        label,
        frequencies_hz,
        grid,
        absorption,
    }
}

// ---------------------------------------------------------------------------
// Workbook loader
// ---------------------------------------------------------------------------

fn read_workbook(path: &Path) -> Result<Vec<RawRow>, LoadError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook.worksheet_range_at(0).ok_or(LoadError::NoSheets)??;

    let mut raw = Vec::new();
    for row in range.rows().skip(1) {
        let freq = row.first().and_then(cell_to_f64);
        let data = row.iter().skip(1).map(cell_to_f64).collect();
        raw.push((freq, data));
    }
    Ok(raw)
}

fn cell_to_f64(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(v) => Some(*v),
        Data::Int(v) => Some(*v as f64),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn read_csv<R: io::Read>(input: R) -> Result<Vec<RawRow>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    // The layout requires a header row; reading it here also skips it.
    reader.headers()?;

    let mut raw = Vec::new();
    for result in reader.records() {
        let record = result?;
        let freq = record.get(0).and_then(parse_cell);
        let data = record.iter().skip(1).map(parse_cell).collect();
        raw.push((freq, data));
    }
    Ok(raw)
}

fn parse_cell(field: &str) -> Option<f64> {
    let field = field.trim();
    if field.is_empty() {
        return None;
    }
    field.parse().ok()
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (`null` marks an empty cell):
///
/// ```json
/// {
///   "frequencies": [100.0, 500.0, null, 2000.0],
///   "absorption": [
///     [0.11, 0.21, 0.30, null, 0.52, 0.60, 0.68, 0.74, 0.80],
///     ...
///   ]
/// }
/// ```
#[derive(Debug, Deserialize)]
struct JsonMeasurement {
    frequencies: Vec<Option<f64>>,
    absorption: Vec<Vec<Option<f64>>>,
}

fn read_json(text: &str) -> Result<Vec<RawRow>, LoadError> {
    let parsed: JsonMeasurement = serde_json::from_str(text)?;

    let n = parsed.frequencies.len().max(parsed.absorption.len());
    let mut raw = Vec::with_capacity(n);
    for i in 0..n {
        let freq = parsed.frequencies.get(i).copied().flatten();
        let data = parsed.absorption.get(i).cloned().unwrap_or_default();
        raw.push((freq, data));
    }
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> AxisGrid {
        AxisGrid::default()
    }

    const WELL_FORMED: &str = "\
frequency_hz,t10_d75,t10_d110,t10_d150,t20_d75,t20_d110,t20_d150,t30_d75,t30_d110,t30_d150
100,0.10,0.12,0.14,0.20,0.24,0.28,0.30,0.36,0.42
500,0.30,0.34,0.38,0.45,0.50,0.55,0.60,0.66,0.72
1000,0.50,0.55,0.60,0.65,0.70,0.75,0.80,0.84,0.88
2000,0.70,0.74,0.78,0.82,0.85,0.88,0.90,0.92,0.94
";

    #[test]
    fn well_formed_csv_keeps_shape() {
        let raw = read_csv(WELL_FORMED.as_bytes()).unwrap();
        let ds = assemble("m".to_string(), raw, grid());

        assert_eq!(ds.frequencies_hz, vec![100.0, 500.0, 1000.0, 2000.0]);
        assert_eq!(ds.absorption.row_count(), 4);
        assert_eq!(ds.absorption.column_count(), 9);
    }

    #[test]
    fn empty_frequency_cells_are_dropped_independently_of_rows() {
        // Second row: no frequency but valid data; third row: frequency but
        // no data at all.
        let csv = "\
f,a,b
100,0.1,0.2
,0.3,0.4
1000,,
";
        let raw = read_csv(csv.as_bytes()).unwrap();
        let ds = assemble("m".to_string(), raw, grid());

        assert_eq!(ds.frequencies_hz, vec![100.0, 1000.0]);
        // The all-empty data row is gone, the frequency-less row is kept.
        assert_eq!(ds.absorption.row_count(), 2);
        assert_eq!(ds.absorption.column_count(), 2);
    }

    #[test]
    fn blank_and_non_numeric_cells_become_nan_inside_kept_rows() {
        let csv = "\
f,a,b,c
100,0.1,,n/a
500,0.2,0.3,0.4
";
        let raw = read_csv(csv.as_bytes()).unwrap();
        let ds = assemble("m".to_string(), raw, grid());

        let b = ds.absorption.column(1).unwrap();
        let c = ds.absorption.column(2).unwrap();
        assert!(b[0].is_nan());
        assert!(c[0].is_nan());
        assert_eq!(b[1], 0.3);
        assert_eq!(c[1], 0.4);
    }

    #[test]
    fn json_rows_assemble_like_csv_rows() {
        let text = r#"{
            "frequencies": [100.0, null, 1000.0],
            "absorption": [[0.1, 0.2], [null, null], [0.5, 0.6]]
        }"#;
        let raw = read_json(text).unwrap();
        let ds = assemble("m".to_string(), raw, grid());

        assert_eq!(ds.frequencies_hz, vec![100.0, 1000.0]);
        assert_eq!(ds.absorption.row_count(), 2);
        assert_eq!(ds.absorption.column_count(), 2);
    }

    #[test]
    fn malformed_json_is_a_typed_error() {
        assert!(matches!(
            read_json("[1, 2, 3]"),
            Err(LoadError::Json(_))
        ));
    }

    #[test]
    fn unsupported_extension_is_rejected_before_any_io() {
        let err = load_file(Path::new("notes.txt"), &grid()).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedExtension { ext } if ext == "txt"));
    }

    #[test]
    fn missing_csv_file_reports_io() {
        let err = load_file(Path::new("/nonexistent/measurements.csv"), &grid()).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
