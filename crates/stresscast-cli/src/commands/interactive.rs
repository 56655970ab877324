//! Interactive menu: pick a source, show the table, optionally save.

use std::io::{self, BufRead, Write};
use std::path::Path;

use stresscast_core::report::render_table;
use stresscast_core::source::prompt_line;
use stresscast_core::{
    export_csv, sample_records, Config, CoreError, CsvSource, ManualSource, Record, RecordSource,
    RiskSummary,
};

pub fn run(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load(config_path)?;
    let stdin = io::stdin();
    run_session(&mut stdin.lock(), &mut io::stdout(), &config)
}

/// The whole menu flow over arbitrary input/output.
pub fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    writeln!(output, "Tiny stress estimator. Friendly, not clinical.")?;
    writeln!(
        output,
        "Press Enter to use sample data, or type 'csv' to load from a file, or 'manual' to type entries yourself."
    )?;
    let choice = ask(input, output, "Choice [Enter/csv/manual]: ")?.to_lowercase();

    let records = match choice.as_str() {
        "csv" => {
            let path = ask(input, output, "Path to CSV file: ")?;
            load_csv_or_samples(&path, output)?
        }
        "manual" => ManualSource::new(&mut *input, &mut *output).load()?.records,
        _ => sample_records(),
    };

    let predictions = config.model.predict_all(&records);
    writeln!(output, "\n{}", render_table(&predictions))?;
    if !predictions.is_empty() {
        writeln!(output, "Risk summary: {}", RiskSummary::from_predictions(&predictions))?;
    }
    writeln!(output)?;

    let save = ask(input, output, "Save results to CSV? (y/N): ")?.to_lowercase();
    if save == "y" {
        let default_path = &config.export.default_path;
        let label = format!("Output filename (default {default_path}): ");
        let answer = ask(input, output, &label)?;
        let out_path = if answer.is_empty() {
            default_path.as_str()
        } else {
            answer.as_str()
        };
        export_csv(out_path, &predictions)?;
        writeln!(
            output,
            "Saved to {out_path} — open it in Excel or LibreOffice if you want a neat view."
        )?;
    }

    Ok(())
}

/// End of input reads as an empty answer.
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> io::Result<String> {
    Ok(prompt_line(input, output, label)?.unwrap_or_default())
}

/// Load a CSV, falling back to the samples when nothing usable comes out.
fn load_csv_or_samples<W: Write>(path: &str, output: &mut W) -> io::Result<Vec<Record>> {
    match CsvSource::new(path).load() {
        Ok(loaded) => {
            for skipped in &loaded.skipped {
                writeln!(output, "Skipped {skipped}")?;
            }
            if loaded.records.is_empty() {
                writeln!(output, "CSV gave no usable rows. Falling back to sample data.")?;
                Ok(sample_records())
            } else {
                Ok(loaded.records)
            }
        }
        Err(CoreError::FileNotFound { .. }) => {
            writeln!(output, "File not found — falling back to sample data.")?;
            Ok(sample_records())
        }
        Err(err) => {
            tracing::warn!(%err, path, "CSV load failed");
            writeln!(output, "Could not read CSV ({err}) — falling back to sample data.")?;
            Ok(sample_records())
        }
    }
}
