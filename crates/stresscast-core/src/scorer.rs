//! Linear stress scoring engine.
//!
//! ```text
//! raw   = w_hr * (heart_rate / hr_baseline)
//!       + w_sleep * sleep_hours
//!       + w_work * (work_hours / work_baseline)
//!       + bias
//! score = clamp(raw, 0, 100)
//! ```
//!
//! | Score     | Risk     |
//! |-----------|----------|
//! | ≤ 40      | Low      |
//! | 41 – 70   | Moderate |
//! | ≥ 71      | High     |

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::record::{Prediction, Record, Risk};

/// Highest score still classified as [`Risk::Low`].
pub const LOW_MAX: f64 = 40.0;
/// Highest score still classified as [`Risk::Moderate`].
pub const MODERATE_MAX: f64 = 70.0;

pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 100.0;

/// Coefficients of the linear stress formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressModel {
    #[serde(default = "default_weight_heart_rate")]
    pub weight_heart_rate: f64,
    /// Negative: each hour of sleep lowers the score
    #[serde(default = "default_weight_sleep")]
    pub weight_sleep: f64,
    #[serde(default = "default_weight_work")]
    pub weight_work: f64,
    #[serde(default = "default_bias")]
    pub bias: f64,
    #[serde(default = "default_heart_rate_baseline")]
    pub heart_rate_baseline: f64,
    #[serde(default = "default_work_hours_baseline")]
    pub work_hours_baseline: f64,
}

fn default_weight_heart_rate() -> f64 {
    0.8
}
fn default_weight_sleep() -> f64 {
    -1.5
}
fn default_weight_work() -> f64 {
    1.0
}
fn default_bias() -> f64 {
    20.0
}
fn default_heart_rate_baseline() -> f64 {
    80.0
}
fn default_work_hours_baseline() -> f64 {
    50.0
}

impl Default for StressModel {
    fn default() -> Self {
        Self {
            weight_heart_rate: default_weight_heart_rate(),
            weight_sleep: default_weight_sleep(),
            weight_work: default_weight_work(),
            bias: default_bias(),
            heart_rate_baseline: default_heart_rate_baseline(),
            work_hours_baseline: default_work_hours_baseline(),
        }
    }
}

impl StressModel {
    /// Unclamped formula value.
    pub fn raw_score(&self, heart_rate: f64, sleep_hours: f64, work_hours: f64) -> f64 {
        self.weight_heart_rate * (heart_rate / self.heart_rate_baseline)
            + self.weight_sleep * sleep_hours
            + self.weight_work * (work_hours / self.work_hours_baseline)
            + self.bias
    }

    /// Score for raw inputs, clamped to [0, 100].
    pub fn score_inputs(&self, heart_rate: f64, sleep_hours: f64, work_hours: f64) -> f64 {
        clamp_score(self.raw_score(heart_rate, sleep_hours, work_hours))
    }

    pub fn score(&self, record: &Record) -> f64 {
        self.score_inputs(
            record.heart_rate_bpm,
            record.sleep_hours_per_day,
            record.work_hours_per_week,
        )
    }

    /// Score and classify a record.
    ///
    /// The score is rounded to one decimal before classification so the
    /// printed, exported and classified values agree.
    pub fn predict(&self, record: &Record) -> Prediction {
        let score = round_score(self.score(record));
        Prediction {
            record: record.clone(),
            score,
            risk: classify(score),
        }
    }

    pub fn predict_all(&self, records: &[Record]) -> Vec<Prediction> {
        records.iter().map(|r| self.predict(r)).collect()
    }

    /// Check that every coefficient is finite and both baselines are positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let coefficients = [
            ("weight_heart_rate", self.weight_heart_rate),
            ("weight_sleep", self.weight_sleep),
            ("weight_work", self.weight_work),
            ("bias", self.bias),
            ("heart_rate_baseline", self.heart_rate_baseline),
            ("work_hours_baseline", self.work_hours_baseline),
        ];

        for (name, value) in coefficients {
            if !value.is_finite() {
                return Err(ConfigError::InvalidValue {
                    key: format!("model.{name}"),
                    message: format!("must be a finite number, got {value}"),
                });
            }
        }

        for (name, value) in [
            ("heart_rate_baseline", self.heart_rate_baseline),
            ("work_hours_baseline", self.work_hours_baseline),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    key: format!("model.{name}"),
                    message: format!("must be greater than zero, got {value}"),
                });
            }
        }

        Ok(())
    }
}

/// Score with the default coefficients.
pub fn score(heart_rate: f64, sleep_hours: f64, work_hours: f64) -> f64 {
    StressModel::default().score_inputs(heart_rate, sleep_hours, work_hours)
}

/// Map a score onto its risk category.
pub fn classify(score: f64) -> Risk {
    if score > MODERATE_MAX {
        Risk::High
    } else if score > LOW_MAX {
        Risk::Moderate
    } else {
        Risk::Low
    }
}

/// NaN maps to the floor so the [0, 100] range holds for any input.
fn clamp_score(raw: f64) -> f64 {
    if raw.is_nan() {
        SCORE_MIN
    } else {
        raw.clamp(SCORE_MIN, SCORE_MAX)
    }
}

fn round_score(score: f64) -> f64 {
    (score * 10.0).round() / 10.0
}
