//! Calculation service shared by the MCP tools and the HTTP endpoint.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use wellness_core::{Category, WellnessError, WellnessInputs, WellnessResult, observability};

use crate::McpResult;
use crate::notification::Notification;

/// Explicit inputs for a one-shot calculation. Missing values take the
/// form defaults; an unrecognised category is treated as Primary.
#[derive(Debug, Default, Deserialize, Serialize, JsonSchema)]
pub struct CalculateParams {
    /// Hours slept (0-12)
    pub sleep_hours: Option<f64>,
    /// Stress level (0-10)
    pub stress_level: Option<f64>,
    /// Activity in minutes (0-120)
    pub activity_minutes: Option<f64>,
    /// "Primary"/"Male" or "Secondary"/"Female"
    pub category: Option<String>,
}

impl CalculateParams {
    pub fn into_inputs(self) -> WellnessInputs {
        WellnessInputs::new(
            self.sleep_hours
                .unwrap_or(WellnessInputs::DEFAULT_SLEEP_HOURS),
            self.stress_level
                .unwrap_or(WellnessInputs::DEFAULT_STRESS_LEVEL),
            self.activity_minutes
                .unwrap_or(WellnessInputs::DEFAULT_ACTIVITY_MINUTES),
            self.category
                .as_deref()
                .map(Category::parse_lenient)
                .unwrap_or_default(),
        )
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct CalculationReport {
    pub inputs: WellnessInputs,
    pub result: WellnessResult,
    pub category_label: String,
    pub category_icon: String,
    pub notification: Notification,
}

/// Compute, record metrics, and build the notification.
pub fn calculate(inputs: WellnessInputs) -> McpResult<CalculationReport> {
    inputs.ensure_finite()?;
    let result = inputs.compute();
    // Finite inputs can still overflow the weighted sum; JSON has no infinity.
    if !result.raw_score.is_finite() {
        return Err(WellnessError::InvalidInput(format!(
            "raw score overflowed to {}",
            result.raw_score
        ))
        .into());
    }
    observability::record_result(&result, inputs.category);
    tracing::info!(
        score = result.final_score,
        status = %result.status,
        category = %inputs.category,
        "wellness calculated"
    );
    let notification = Notification::for_result(&result, inputs.category);
    Ok(CalculationReport {
        inputs,
        category_label: inputs.category.label().to_string(),
        category_icon: inputs.category.icon().to_string(),
        result,
        notification,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wellness_core::Status;

    #[test]
    fn empty_params_use_defaults() {
        let inputs = CalculateParams::default().into_inputs();
        assert_eq!(inputs, WellnessInputs::default());
    }

    #[test]
    fn unknown_category_string_falls_back() {
        let params = CalculateParams {
            category: Some("unknown".into()),
            ..Default::default()
        };
        assert_eq!(params.into_inputs().category, Category::Primary);
    }

    #[test]
    fn calculate_builds_full_report() {
        let params = CalculateParams {
            sleep_hours: Some(0.0),
            stress_level: Some(10.0),
            activity_minutes: Some(0.0),
            category: Some("female".into()),
        };
        let report = calculate(params.into_inputs()).expect("report");
        assert_eq!(report.result.final_score, 0);
        assert_eq!(report.result.status, Status::Poor);
        assert_eq!(report.category_label, "Female");
        assert_eq!(report.notification.title, "Your Wellness Score: 0");
    }

    #[test]
    fn calculate_rejects_overflowing_score() {
        let inputs = WellnessInputs::new(1e308, -1e308, 0.0, Category::Primary);
        let err = calculate(inputs).unwrap_err();
        assert!(err.to_string().contains("overflowed"));
    }

    #[test]
    fn report_survives_json_round_trip() {
        let report = calculate(WellnessInputs::new(1e10, 0.0, 0.0, Category::Secondary))
            .expect("report");
        assert_eq!(report.result.final_score, 100);
        let json = serde_json::to_value(&report).expect("json");
        let back: CalculationReport = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, report);
    }

    #[test]
    fn calculate_rejects_non_finite() {
        let inputs = WellnessInputs::new(f64::INFINITY, 0.0, 0.0, Category::Primary);
        assert!(calculate(inputs).is_err());
    }
}
