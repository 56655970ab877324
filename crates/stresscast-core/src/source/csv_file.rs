//! CSV record loading.
//!
//! Columns are located by header name, so exported result files (which carry
//! extra `score,risk` columns) load back as plain records.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};

use super::{parse_number, RecordSource, SkippedRow, SourceOutput};
use crate::error::{CoreError, Result, RowError};
use crate::record::Record;

/// Required input header, in canonical order.
pub const INPUT_COLUMNS: [&str; 4] = [
    "name",
    "heart_rate_bpm",
    "sleep_hours_per_day",
    "work_hours_per_week",
];

const UNNAMED: &str = "Unnamed";

/// Records from a CSV file on disk.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for CsvSource {
    fn name(&self) -> &str {
        "csv"
    }

    fn load(&mut self) -> Result<SourceOutput> {
        load_records(&self.path)
    }
}

/// Open `path` and read records from it.
///
/// # Errors
///
/// [`CoreError::FileNotFound`] when the file does not exist,
/// [`CoreError::MissingColumn`] when the header lacks a required column.
/// Bad rows are skipped, not returned as errors.
pub fn load_records(path: impl AsRef<Path>) -> Result<SourceOutput> {
    let path = path.as_ref();
    let file = open_input(path)?;

    let output = read_records(file, path)?;
    tracing::info!(
        path = %path.display(),
        loaded = output.records.len(),
        skipped = output.skipped.len(),
        "loaded records from CSV"
    );
    Ok(output)
}

/// Open a file for reading, mapping a missing file to [`CoreError::FileNotFound`].
pub(crate) fn open_input(path: &Path) -> Result<File> {
    File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => CoreError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => CoreError::Io(err),
    })
}

/// Read records from any CSV stream. `origin` is only used in errors.
pub fn read_records<R: Read>(reader: R, origin: &Path) -> Result<SourceOutput> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let columns = locate_columns(reader.headers()?, origin)?;

    let mut output = SourceOutput::default();
    for (index, result) in reader.records().enumerate() {
        // Header is line 1.
        let fallback_line = index as u64 + 2;
        let (line, parsed) = match result {
            Ok(row) => (
                row.position().map_or(fallback_line, |p| p.line()),
                parse_row(&row, &columns),
            ),
            Err(err) => (
                err.position().map_or(fallback_line, |p| p.line()),
                Err(RowError::Unreadable(err.to_string())),
            ),
        };

        match parsed {
            Ok(record) => {
                tracing::debug!(line, name = %record.name, "parsed row");
                output.records.push(record);
            }
            Err(reason) => {
                tracing::warn!(line, %reason, "skipping malformed row");
                output.skipped.push(SkippedRow { line, reason });
            }
        }
    }

    Ok(output)
}

/// Header positions of [`INPUT_COLUMNS`], same order.
fn locate_columns(headers: &StringRecord, origin: &Path) -> Result<[usize; 4]> {
    let mut positions = [0usize; 4];
    for (slot, column) in positions.iter_mut().zip(INPUT_COLUMNS) {
        *slot = headers
            .iter()
            .position(|h| h.trim_start_matches('\u{feff}') == column)
            .ok_or_else(|| CoreError::MissingColumn {
                path: origin.to_path_buf(),
                column: column.to_string(),
            })?;
    }
    Ok(positions)
}

fn parse_row(row: &StringRecord, columns: &[usize; 4]) -> std::result::Result<Record, RowError> {
    let field = |i: usize| {
        row.get(columns[i]).ok_or_else(|| RowError::MissingField {
            field: INPUT_COLUMNS[i].to_string(),
        })
    };

    let name = match field(0)? {
        "" => UNNAMED.to_string(),
        name => name.to_string(),
    };

    let number = |i: usize| -> std::result::Result<f64, RowError> {
        match field(i)? {
            "" => Ok(0.0),
            value => parse_number(INPUT_COLUMNS[i], value),
        }
    };

    Ok(Record::new(name, number(1)?, number(2)?, number(3)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str) -> Result<SourceOutput> {
        read_records(text.as_bytes(), Path::new("inline.csv"))
    }

    #[test]
    fn test_reads_rows_in_order() {
        let output = read(
            "name,heart_rate_bpm,sleep_hours_per_day,work_hours_per_week\n\
             Alice,75,8,40\n\
             Bob,92.5,5.5,65\n",
        )
        .unwrap();
        assert_eq!(
            output.records,
            vec![
                Record::new("Alice", 75.0, 8.0, 40.0),
                Record::new("Bob", 92.5, 5.5, 65.0),
            ]
        );
        assert!(output.skipped.is_empty());
    }

    #[test]
    fn test_skips_non_numeric_heart_rate() {
        let output = read(
            "name,heart_rate_bpm,sleep_hours_per_day,work_hours_per_week\n\
             Alice,75,8,40\n\
             Bob,fast,5.5,65\n\
             Charlie,81,7,50\n",
        )
        .unwrap();
        let names: Vec<_> = output.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Alice", "Charlie"]);
        assert_eq!(output.skipped.len(), 1);
        assert_eq!(output.skipped[0].line, 3);
        assert_eq!(
            output.skipped[0].reason,
            RowError::InvalidNumber {
                field: "heart_rate_bpm".into(),
                value: "fast".into(),
            }
        );
    }

    #[test]
    fn test_skips_short_row() {
        let output = read(
            "name,heart_rate_bpm,sleep_hours_per_day,work_hours_per_week\n\
             Dana,70,7\n\
             Eli,60,8,35\n",
        )
        .unwrap();
        assert_eq!(output.records.len(), 1);
        assert_eq!(
            output.skipped[0].reason,
            RowError::MissingField {
                field: "work_hours_per_week".into(),
            }
        );
        assert_eq!(output.skipped[0].line, 2);
    }

    #[test]
    fn test_blank_name_and_empty_numbers_default() {
        let output = read(
            "name,heart_rate_bpm,sleep_hours_per_day,work_hours_per_week\n\
             ,70,,40\n",
        )
        .unwrap();
        assert_eq!(output.records, vec![Record::new("Unnamed", 70.0, 0.0, 40.0)]);
    }

    #[test]
    fn test_columns_found_by_header_name() {
        let output = read(
            "work_hours_per_week,name,score,sleep_hours_per_day,heart_rate_bpm,risk\n\
             40, Alice ,9.6,8,80,Low\n",
        )
        .unwrap();
        assert_eq!(output.records, vec![Record::new("Alice", 80.0, 8.0, 40.0)]);
    }

    #[test]
    fn test_missing_header_column_is_an_error() {
        let err = read("name,heart_rate_bpm,sleep_hours_per_day\nAlice,75,8\n").unwrap_err();
        assert!(matches!(
            err,
            CoreError::MissingColumn { ref column, .. } if column == "work_hours_per_week"
        ));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let err = load_records("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, CoreError::FileNotFound { .. }));
    }
}
