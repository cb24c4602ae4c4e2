/// Data layer: core types, loading, and curve selection.
///
/// Architecture:
/// ```text
///  .xlsx / .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse first sheet → MeasurementDataset
///   └──────────┘
///        │
///        ▼
///   ┌─────────────────────┐
///   │ MeasurementDataset  │  frequencies + absorption matrix + AxisGrid
///   └─────────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  select   │  (thickness, density) → absorption curve
///   └──────────┘
/// ```
pub mod loader;
pub mod model;
pub mod sample;
pub mod select;
