use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use wellness_core::{Category, WellnessResult};

/// The single alert that presents a calculation to the user.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, JsonSchema)]
pub struct Notification {
    pub title: String,
    pub message: String,
    /// Dismiss button text
    pub cancel: String,
}

impl Notification {
    pub fn for_result(result: &WellnessResult, category: Category) -> Self {
        Self {
            title: format!("Your Wellness Score: {}", result.final_score),
            message: format!(
                "Status: {}\n\nRecommendations: {}\n\nSelected Gender: {} {}",
                result.status,
                result.recommendation,
                category.label(),
                category.icon()
            ),
            cancel: "OK".to_string(),
        }
    }
}
