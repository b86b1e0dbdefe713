//! Form session: slider positions and the category picker.
//!
//! The session owns the only mutable state in the system. It is read once per
//! calculation and handed to the pure calculator as plain values.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use wellness_core::{Category, InputRange, WellnessError, WellnessInputs};

pub const HIGHLIGHT_THICKNESS: f64 = 3.0;

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Slider {
    SleepHours,
    StressLevel,
    ActivityMinutes,
}

impl Slider {
    pub fn range(self) -> InputRange {
        match self {
            Slider::SleepHours => InputRange::SLEEP_HOURS,
            Slider::StressLevel => InputRange::STRESS_LEVEL,
            Slider::ActivityMinutes => InputRange::ACTIVITY_MINUTES,
        }
    }

    /// Live value label, one decimal with the slider's unit. Ties round away
    /// from zero (6.25 shows as 6.3), unlike `{:.1}` which rounds to even.
    pub fn label(self, value: f64) -> String {
        let value = (value * 10.0).round() / 10.0;
        match self {
            Slider::SleepHours => format!("{value:.1} h"),
            Slider::StressLevel => format!("{value:.1}"),
            Slider::ActivityMinutes => format!("{value:.1} min"),
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq, JsonSchema)]
pub struct OptionHighlight {
    pub category: Category,
    pub label: String,
    pub icon: String,
    /// Border colour name; `Transparent` when not selected
    pub stroke: String,
    pub stroke_thickness: f64,
}

fn accent(category: Category) -> &'static str {
    match category {
        Category::Primary => "CornflowerBlue",
        Category::Secondary => "LightPink",
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormSession {
    sleep_hours: f64,
    stress_level: f64,
    activity_minutes: f64,
    selected: Category,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new(WellnessInputs::default())
    }
}

impl FormSession {
    pub fn new(initial: WellnessInputs) -> Self {
        Self {
            sleep_hours: Slider::SleepHours.range().clamp(initial.sleep_hours),
            stress_level: Slider::StressLevel.range().clamp(initial.stress_level),
            activity_minutes: Slider::ActivityMinutes
                .range()
                .clamp(initial.activity_minutes),
            selected: initial.category,
        }
    }

    pub fn value(&self, slider: Slider) -> f64 {
        match slider {
            Slider::SleepHours => self.sleep_hours,
            Slider::StressLevel => self.stress_level,
            Slider::ActivityMinutes => self.activity_minutes,
        }
    }

    /// Move a slider. The stored value is clamped to the slider's range.
    pub fn set_slider(&mut self, slider: Slider, value: f64) -> Result<f64, WellnessError> {
        if !value.is_finite() {
            return Err(WellnessError::InvalidInput(format!(
                "slider value must be finite, got {value}"
            )));
        }
        let v = slider.range().clamp(value);
        match slider {
            Slider::SleepHours => self.sleep_hours = v,
            Slider::StressLevel => self.stress_level = v,
            Slider::ActivityMinutes => self.activity_minutes = v,
        }
        Ok(v)
    }

    pub fn slider_label(&self, slider: Slider) -> String {
        slider.label(self.value(slider))
    }

    pub fn selected(&self) -> Category {
        self.selected
    }

    /// Returns true when the selection actually changed.
    pub fn select(&mut self, category: Category) -> bool {
        if self.selected == category {
            return false;
        }
        self.selected = category;
        true
    }

    pub fn highlight(&self) -> Vec<OptionHighlight> {
        [Category::Primary, Category::Secondary]
            .into_iter()
            .map(|c| OptionHighlight {
                category: c,
                label: c.label().to_string(),
                icon: c.icon().to_string(),
                stroke: if c == self.selected {
                    accent(c).to_string()
                } else {
                    "Transparent".to_string()
                },
                stroke_thickness: HIGHLIGHT_THICKNESS,
            })
            .collect()
    }

    pub fn inputs(&self) -> WellnessInputs {
        WellnessInputs::new(
            self.sleep_hours,
            self.stress_level,
            self.activity_minutes,
            self.selected,
        )
    }
}
