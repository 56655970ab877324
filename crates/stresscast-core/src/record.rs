//! Lifestyle input records and their scored predictions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One person's lifestyle inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    /// Average resting heart rate (BPM)
    pub heart_rate_bpm: f64,
    pub sleep_hours_per_day: f64,
    pub work_hours_per_week: f64,
}

impl Record {
    pub fn new(
        name: impl Into<String>,
        heart_rate_bpm: f64,
        sleep_hours_per_day: f64,
        work_hours_per_week: f64,
    ) -> Self {
        Self {
            name: name.into(),
            heart_rate_bpm,
            sleep_hours_per_day,
            work_hours_per_week,
        }
    }
}

/// Risk category derived from a stress score.
/// Variants are ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Risk {
    Low,
    Moderate,
    High,
}

impl Risk {
    pub fn as_str(&self) -> &'static str {
        match self {
            Risk::Low => "Low",
            Risk::Moderate => "Moderate",
            Risk::High => "High",
        }
    }
}

impl fmt::Display for Risk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Risk {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Risk::Low),
            "moderate" => Ok(Risk::Moderate),
            "high" => Ok(Risk::High),
            other => Err(format!("unknown risk category: {other}")),
        }
    }
}

/// A record together with its score and risk category.
///
/// Built by [`crate::StressModel::predict`] or read back from an export; never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub record: Record,
    /// Clamped to [0, 100], rounded to one decimal
    pub score: f64,
    pub risk: Risk,
}
