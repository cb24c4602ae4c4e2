use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Loading errors (file-format family)
// ---------------------------------------------------------------------------

/// A file could not be parsed as tabular measurement data.
///
/// Every variant is non-fatal to the session: the affected slot keeps its
/// previous dataset and the message is shown in the status line.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported file extension .{ext} (expected .xlsx, .xls, .xlsm, .ods, .csv or .json)")]
    UnsupportedExtension { ext: String },

    #[error("not a readable workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("workbook contains no sheets")]
    NoSheets,

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Selection errors
// ---------------------------------------------------------------------------

/// Axis of the material-parameter grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Thickness,
    Density,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Thickness => write!(f, "thickness"),
            Axis::Density => write!(f, "density"),
        }
    }
}

/// Curve selection failed.
///
/// `Dimension` is the one error the UI reports non-fatally (small anchored
/// notice); `OffGrid` is a caller contract violation since the selection
/// widgets enumerate the grid axes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectError {
    #[error("{axis} {value} is not one of the dataset's {axis} steps")]
    OffGrid { axis: Axis, value: f64 },

    #[error("dimension mismatch: column {column} requested but the matrix has {columns} columns")]
    Dimension { column: usize, columns: usize },
}
