//! CSV export of scored predictions.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, Trim, Writer};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, RowError};
use crate::record::{Prediction, Record, Risk};
use crate::source::{open_input, SkippedRow};

/// Export header, in column order.
pub const OUTPUT_COLUMNS: [&str; 6] = [
    "name",
    "heart_rate_bpm",
    "sleep_hours_per_day",
    "work_hours_per_week",
    "score",
    "risk",
];

/// One exported line. Field order defines the header.
#[derive(Debug, Serialize, Deserialize)]
struct ExportRow {
    name: String,
    heart_rate_bpm: f64,
    sleep_hours_per_day: f64,
    work_hours_per_week: f64,
    #[serde(serialize_with = "one_decimal")]
    score: f64,
    #[serde(deserialize_with = "risk_label")]
    risk: Risk,
}

fn one_decimal<S: Serializer>(value: &f64, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.collect_str(&format_args!("{value:.1}"))
}

/// Accepts any casing of the risk labels.
fn risk_label<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<Risk, D::Error> {
    let label = String::deserialize(d)?;
    label.parse().map_err(serde::de::Error::custom)
}

/// Predictions read back from an export, plus the rows that were dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportedBatch {
    pub predictions: Vec<Prediction>,
    pub skipped: Vec<SkippedRow>,
}

impl From<&Prediction> for ExportRow {
    fn from(p: &Prediction) -> Self {
        Self {
            name: p.record.name.clone(),
            heart_rate_bpm: p.record.heart_rate_bpm,
            sleep_hours_per_day: p.record.sleep_hours_per_day,
            work_hours_per_week: p.record.work_hours_per_week,
            score: p.score,
            risk: p.risk,
        }
    }
}

impl From<ExportRow> for Prediction {
    fn from(row: ExportRow) -> Self {
        Self {
            record: Record::new(
                row.name,
                row.heart_rate_bpm,
                row.sleep_hours_per_day,
                row.work_hours_per_week,
            ),
            score: row.score,
            risk: row.risk,
        }
    }
}

/// Write predictions as CSV to any sink. The header is always written, even
/// for an empty slice.
pub fn write_csv<W: Write>(sink: W, predictions: &[Prediction]) -> Result<()> {
    let mut writer = Writer::from_writer(sink);
    if predictions.is_empty() {
        writer.write_record(OUTPUT_COLUMNS)?;
    }
    for prediction in predictions {
        writer.serialize(ExportRow::from(prediction))?;
    }
    writer.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and export predictions into it.
pub fn export_csv(path: impl AsRef<Path>, predictions: &[Prediction]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_csv(file, predictions)?;
    tracing::info!(path = %path.display(), rows = predictions.len(), "exported predictions");
    Ok(())
}

/// Read an exported file back. Score and risk are taken as written, not
/// recomputed. Rows that do not decode are skipped and reported.
pub fn read_predictions(path: impl AsRef<Path>) -> Result<ExportedBatch> {
    let path = path.as_ref();
    let batch = read_exported(open_input(path)?)?;
    tracing::info!(
        path = %path.display(),
        loaded = batch.predictions.len(),
        skipped = batch.skipped.len(),
        "read exported predictions"
    );
    Ok(batch)
}

/// Read exported predictions from any CSV stream.
pub fn read_exported<R: Read>(source: R) -> Result<ExportedBatch> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(source);

    let mut batch = ExportedBatch::default();
    for (index, row) in reader.deserialize::<ExportRow>().enumerate() {
        match row {
            Ok(row) => batch.predictions.push(row.into()),
            Err(err) => {
                // Header is line 1.
                let line = err.position().map_or(index as u64 + 2, |p| p.line());
                let reason = RowError::Unreadable(err.to_string());
                tracing::warn!(line, %reason, "skipping malformed export row");
                batch.skipped.push(SkippedRow { line, reason });
            }
        }
    }
    Ok(batch)
}
