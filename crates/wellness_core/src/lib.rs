//! Wellness score calculator: a pure function from sleep, stress and activity
//! readings plus a category selection to a scored, classified recommendation.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod calculator;
pub mod config;
pub mod observability;
pub mod recommendations;

pub use calculator::{compute, final_score, raw_score, status_for};
pub use recommendations::recommendation_for;

#[derive(Debug, Error)]
pub enum WellnessError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Two-valued selection that picks which recommendation column applies.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq, Hash, JsonSchema)]
pub enum Category {
    #[default]
    Primary,
    Secondary,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Primary => "Male",
            Category::Secondary => "Female",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::Primary => "♂️",
            Category::Secondary => "♀️",
        }
    }

    /// Permissive parse: anything unrecognised selects [`Category::Primary`].
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "secondary" | "female" => Category::Secondary,
            _ => Category::Primary,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordinal band derived from the final score.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, Hash, JsonSchema)]
pub enum Status {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Status {
    pub const ALL: [Status; 4] = [Status::Excellent, Status::Good, Status::Fair, Status::Poor];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Excellent => "Excellent",
            Status::Good => "Good",
            Status::Fair => "Fair",
            Status::Poor => "Poor",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed interval a slider can take.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, JsonSchema)]
pub struct InputRange {
    pub min: f64,
    pub max: f64,
}

impl InputRange {
    pub const SLEEP_HOURS: InputRange = InputRange { min: 0.0, max: 12.0 };
    pub const STRESS_LEVEL: InputRange = InputRange { min: 0.0, max: 10.0 };
    pub const ACTIVITY_MINUTES: InputRange = InputRange {
        min: 0.0,
        max: 120.0,
    };

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct WellnessInputs {
    /// Hours slept (expected 0-12)
    pub sleep_hours: f64,
    /// Self-reported stress (expected 0-10)
    pub stress_level: f64,
    /// Minutes of physical activity (expected 0-120)
    pub activity_minutes: f64,
    #[serde(default)]
    pub category: Category,
}

impl WellnessInputs {
    pub const DEFAULT_SLEEP_HOURS: f64 = 7.0;
    pub const DEFAULT_STRESS_LEVEL: f64 = 4.0;
    pub const DEFAULT_ACTIVITY_MINUTES: f64 = 30.0;

    pub fn new(sleep_hours: f64, stress_level: f64, activity_minutes: f64, category: Category) -> Self {
        Self {
            sleep_hours,
            stress_level,
            activity_minutes,
            category,
        }
    }

    /// Rejects NaN and infinities; range is never checked here.
    pub fn ensure_finite(&self) -> Result<(), WellnessError> {
        for (name, v) in [
            ("sleep_hours", self.sleep_hours),
            ("stress_level", self.stress_level),
            ("activity_minutes", self.activity_minutes),
        ] {
            if !v.is_finite() {
                return Err(WellnessError::InvalidInput(format!("{name} must be finite, got {v}")));
            }
        }
        Ok(())
    }

    pub fn compute(&self) -> WellnessResult {
        compute(
            self.sleep_hours,
            self.stress_level,
            self.activity_minutes,
            self.category,
        )
    }
}

impl Default for WellnessInputs {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_SLEEP_HOURS,
            Self::DEFAULT_STRESS_LEVEL,
            Self::DEFAULT_ACTIVITY_MINUTES,
            Category::Primary,
        )
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct WellnessResult {
    /// Weighted sum before bounding
    pub raw_score: f64,
    /// Bounded, rounded score in 0..=100
    pub final_score: u8,
    pub status: Status,
    pub recommendation: String,
}
