//! Basic CLI E2E tests.
//!
//! Tests run the built binary and verify outputs.

mod common;

use common::{assert_contains, parse_json, run_cli, run_cli_failure, run_cli_success};
use std::fs;
use tempfile::tempdir;

const INPUT_HEADER: &str = "name,heart_rate_bpm,sleep_hours_per_day,work_hours_per_week";

#[test]
fn test_score_samples_table() {
    let home = tempdir().unwrap();
    let stdout = run_cli_success(home.path(), &["score"]);
    assert_contains(&stdout, "Name       | HR  | Sleep | Work | Score | Risk");
    assert_contains(&stdout, "Alice");
    assert_contains(&stdout, "Processed 4 record(s).");
    assert_contains(&stdout, "Risk summary: Low: 4, Moderate: 0, High: 0");
}

#[test]
fn test_score_json() {
    let home = tempdir().unwrap();
    let stdout = run_cli_success(home.path(), &["score", "--json"]);
    let parsed: serde_json::Value = parse_json(&stdout);
    let rows = parsed.as_array().expect("JSON array");
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[1]["record"]["name"], "Bob");
    assert_eq!(rows[1]["score"], 14.0);
    assert_eq!(rows[1]["risk"], "Low");
}

#[test]
fn test_score_csv_skips_bad_rows_and_exports() {
    let home = tempdir().unwrap();
    let input = home.path().join("people.csv");
    let output = home.path().join("out.csv");
    fs::write(
        &input,
        format!("{INPUT_HEADER}\nAlice,75,8,40\nBob,abc,5.5,65\nCharlie,81,7,50\n"),
    )
    .unwrap();

    let (stdout, stderr, code) = run_cli(
        home.path(),
        &[
            "score",
            "--source",
            "csv",
            "--file",
            input.to_str().unwrap(),
            "--export",
            output.to_str().unwrap(),
        ],
    );
    assert_eq!(code, 0, "stderr: {stderr}");
    assert_contains(&stderr, "warning: skipped line 3");
    assert_contains(&stdout, "Processed 2 record(s).");

    let exported = fs::read_to_string(&output).unwrap();
    let mut lines = exported.lines();
    assert_eq!(
        lines.next(),
        Some("name,heart_rate_bpm,sleep_hours_per_day,work_hours_per_week,score,risk")
    );
    assert_eq!(lines.count(), 2);
}

#[test]
fn test_score_missing_csv_fails() {
    let home = tempdir().unwrap();
    let missing = home.path().join("missing.csv");
    let (_, stderr, code) =
        run_cli_failure(home.path(), &["score", "--source", "csv", "--file", missing.to_str().unwrap()]);
    assert_eq!(code, 1);
    assert_contains(&stderr, "File not found");
}

#[test]
fn test_score_csv_requires_file() {
    let home = tempdir().unwrap();
    let (_, stderr, _) = run_cli_failure(home.path(), &["score", "--source", "csv"]);
    assert_contains(&stderr, "--file");
}

#[test]
fn test_config_get_default() {
    let home = tempdir().unwrap();
    let stdout = run_cli_success(home.path(), &["config", "get", "export.default_path"]);
    assert_eq!(stdout.trim(), "results.csv");
}

#[test]
fn test_config_file_changes_model() {
    let home = tempdir().unwrap();
    let config = home.path().join("tuned.toml");
    fs::write(&config, "[model]\nbias = 75.0\n").unwrap();
    let config = config.to_str().unwrap();

    let stdout = run_cli_success(home.path(), &["--config", config, "config", "get", "model.bias"]);
    assert_eq!(stdout.trim(), "75.0");

    let stdout = run_cli_success(home.path(), &["--config", config, "score", "--json"]);
    let parsed: serde_json::Value = parse_json(&stdout);
    assert_eq!(parsed[0]["risk"], "Moderate");
}

#[test]
fn test_config_unknown_key() {
    let home = tempdir().unwrap();
    let (_, stderr, _) = run_cli_failure(home.path(), &["config", "get", "model.nope"]);
    assert_contains(&stderr, "unknown key: model.nope");
}

#[test]
fn test_completions() {
    let home = tempdir().unwrap();
    let stdout = run_cli_success(home.path(), &["completions", "bash"]);
    assert_contains(&stdout, "stresscast-cli");
}
