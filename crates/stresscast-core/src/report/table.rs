//! Aligned text table for terminal output.

use serde::Serialize;
use std::fmt;

use crate::error::Result;
use crate::record::{Prediction, Risk};

const HEADER: &str = "Name       | HR  | Sleep | Work | Score | Risk";

pub const EMPTY_REPORT: &str = "No people supplied. Nothing to predict.";

/// Render predictions as a fixed-width table with a footer line.
pub fn render_table(predictions: &[Prediction]) -> String {
    if predictions.is_empty() {
        return EMPTY_REPORT.to_string();
    }

    let rule = "-".repeat(HEADER.len());
    let mut lines = Vec::with_capacity(predictions.len() + 4);
    lines.push(HEADER.to_string());
    lines.push(rule.clone());

    for p in predictions {
        let r = &p.record;
        lines.push(format!(
            "{:<10} | {:>4.0} | {:>5.1} | {:>4.0} | {:>5.1} | {}",
            r.name, r.heart_rate_bpm, r.sleep_hours_per_day, r.work_hours_per_week, p.score, p.risk
        ));
    }

    lines.push(rule);
    lines.push(format!(
        "Processed {} record(s). Note: this is a simple estimator, not medical advice.",
        predictions.len()
    ));
    lines.join("\n")
}

/// Pretty-printed JSON array of predictions.
pub fn render_json(predictions: &[Prediction]) -> Result<String> {
    Ok(serde_json::to_string_pretty(predictions)?)
}

/// Number of predictions per risk category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RiskSummary {
    pub low: usize,
    pub moderate: usize,
    pub high: usize,
}

impl RiskSummary {
    pub fn from_predictions(predictions: &[Prediction]) -> Self {
        predictions
            .iter()
            .fold(Self::default(), |mut summary, p| {
                match p.risk {
                    Risk::Low => summary.low += 1,
                    Risk::Moderate => summary.moderate += 1,
                    Risk::High => summary.high += 1,
                }
                summary
            })
    }

    pub fn total(&self) -> usize {
        self.low + self.moderate + self.high
    }
}

impl fmt::Display for RiskSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Low: {}, Moderate: {}, High: {}",
            self.low, self.moderate, self.high
        )
    }
}
