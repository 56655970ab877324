//! # Stresscast Core Library
//!
//! Core logic for the stresscast lifestyle stress estimator. The CLI binary is
//! a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Scorer**: a fixed linear formula over heart rate, sleep and work hours,
//!   clamped to [0, 100] and bucketed into a [`Risk`] category
//! - **Sources**: built-in samples, console prompts and CSV files, all behind
//!   the [`RecordSource`] trait
//! - **Report**: aligned console table, JSON, and CSV export
//! - **Storage**: optional TOML configuration
//!
//! This is a simple estimator, not a medical tool.

pub mod error;
pub mod record;
pub mod report;
pub mod scorer;
pub mod source;
pub mod storage;

pub use error::{ConfigError, CoreError, RowError};
pub use record::{Prediction, Record, Risk};
pub use report::{
    export_csv, read_predictions, render_json, render_table, ExportedBatch, RiskSummary,
};
pub use scorer::{classify, score, StressModel};
pub use source::{
    load_records, sample_records, CsvSource, ManualSource, RecordSource, SampleSource,
    SkippedRow, SourceOutput,
};
pub use storage::Config;
