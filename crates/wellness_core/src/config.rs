use crate::{Category, InputRange, WellnessError, WellnessInputs};

/// Startup configuration: where the form's sliders and picker start.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
    pub initial: WellnessInputs,
}

impl Config {
    pub fn from_env() -> Result<Self, WellnessError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function instead of the process environment.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, WellnessError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let sleep_hours = read_slider(
            &mut get,
            "WELLNESS_DEFAULT_SLEEP_HOURS",
            WellnessInputs::DEFAULT_SLEEP_HOURS,
            InputRange::SLEEP_HOURS,
        )?;
        let stress_level = read_slider(
            &mut get,
            "WELLNESS_DEFAULT_STRESS_LEVEL",
            WellnessInputs::DEFAULT_STRESS_LEVEL,
            InputRange::STRESS_LEVEL,
        )?;
        let activity_minutes = read_slider(
            &mut get,
            "WELLNESS_DEFAULT_ACTIVITY_MINUTES",
            WellnessInputs::DEFAULT_ACTIVITY_MINUTES,
            InputRange::ACTIVITY_MINUTES,
        )?;
        let category = get("WELLNESS_DEFAULT_CATEGORY")
            .map(|s| Category::parse_lenient(&s))
            .unwrap_or_default();
        Ok(Self {
            initial: WellnessInputs::new(sleep_hours, stress_level, activity_minutes, category),
        })
    }
}

fn read_slider<F>(get: &mut F, key: &str, default: f64, range: InputRange) -> Result<f64, WellnessError>
where
    F: FnMut(&str) -> Option<String>,
{
    let Some(raw) = get(key) else {
        return Ok(default);
    };
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| WellnessError::Config(format!("{key} is not a number: {raw}")))?;
    if !value.is_finite() {
        return Err(WellnessError::Config(format!("{key} must be finite")));
    }
    Ok(range.clamp(value))
}
