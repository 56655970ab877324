//! Non-interactive scoring for scripts and pipelines.

use clap::{Args, ValueEnum};
use std::io;
use std::path::{Path, PathBuf};

use stresscast_core::{
    export_csv, render_json, render_table, Config, CsvSource, ManualSource, RecordSource,
    RiskSummary, SampleSource,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    /// Built-in sample people
    Sample,
    /// A CSV file (requires --file)
    Csv,
    /// Prompt for people on the terminal
    Manual,
}

#[derive(Args)]
pub struct ScoreArgs {
    /// Where records come from
    #[arg(long, value_enum, default_value_t = SourceKind::Sample)]
    source: SourceKind,
    /// Input CSV path
    #[arg(long, required_if_eq("source", "csv"))]
    file: Option<PathBuf>,
    /// Also write results to this CSV file
    #[arg(long)]
    export: Option<PathBuf>,
    /// Print predictions as JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn run(args: ScoreArgs, config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load(config_path)?;

    // Prompts go to stderr so stdout stays machine-readable.
    let mut source: Box<dyn RecordSource> = match args.source {
        SourceKind::Sample => Box::new(SampleSource),
        SourceKind::Csv => {
            let file = args.file.ok_or("--file is required with --source csv")?;
            Box::new(CsvSource::new(file))
        }
        SourceKind::Manual => Box::new(ManualSource::new(io::stdin().lock(), io::stderr())),
    };

    let loaded = source.load()?;
    for skipped in &loaded.skipped {
        eprintln!("warning: skipped {skipped}");
    }
    tracing::info!(source = source.name(), records = loaded.records.len(), "records loaded");

    let predictions = config.model.predict_all(&loaded.records);

    if args.json {
        println!("{}", render_json(&predictions)?);
    } else {
        println!("{}", render_table(&predictions));
        if !predictions.is_empty() {
            println!("Risk summary: {}", RiskSummary::from_predictions(&predictions));
        }
    }

    if let Some(path) = args.export {
        export_csv(&path, &predictions)?;
        eprintln!("Saved to {}", path.display());
    }

    Ok(())
}
