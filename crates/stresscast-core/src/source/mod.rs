//! Record sources.
//!
//! Three interchangeable producers of [`Record`]s:
//! - [`SampleSource`]: built-in demo people
//! - [`ManualSource`]: console prompts over any reader/writer pair
//! - [`CsvSource`]: a CSV file with one person per row

mod csv_file;
mod manual;
mod sample;

pub use csv_file::{load_records, read_records, CsvSource, INPUT_COLUMNS};
pub(crate) use csv_file::open_input;
pub use manual::{prompt_line, ManualSource};
pub use sample::{sample_records, SampleSource};

use std::fmt;

use crate::error::{Result, RowError};
use crate::record::Record;

/// Every record producer implements this trait.
pub trait RecordSource {
    /// Short identifier (e.g. "sample", "manual", "csv").
    fn name(&self) -> &str;

    /// Produce the batch of records.
    ///
    /// Rows that cannot be turned into a record are reported in
    /// [`SourceOutput::skipped`] rather than failing the whole load.
    fn load(&mut self) -> Result<SourceOutput>;
}

/// Records produced by a source plus anything it had to drop.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceOutput {
    pub records: Vec<Record>,
    pub skipped: Vec<SkippedRow>,
}

impl SourceOutput {
    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            records,
            skipped: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// An input row that was rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    /// 1-based line number in the input, header included
    pub line: u64,
    pub reason: RowError,
}

impl fmt::Display for SkippedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.reason)
    }
}

/// Parse a numeric field, rejecting anything that is not a finite float.
pub(crate) fn parse_number(field: &str, value: &str) -> std::result::Result<f64, RowError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| RowError::InvalidNumber {
            field: field.to_string(),
            value: value.to_string(),
        })
}
