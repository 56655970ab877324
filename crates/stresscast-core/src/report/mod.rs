//! Prediction reporting: console table, JSON and CSV export.

mod export;
mod table;

pub use export::{
    export_csv, read_exported, read_predictions, write_csv, ExportedBatch, OUTPUT_COLUMNS,
};
pub use table::{render_json, render_table, RiskSummary, EMPTY_REPORT};
