use serde_json::{Map, Value};

use crate::{Category, Status};

pub fn recommendation_for(status: Status, category: Category) -> &'static str {
    match (category, status) {
        (Category::Primary, Status::Excellent) => {
            "Maintain routine; include resistance training 2–3× per week; ensure protein intake across meals."
        }
        (Category::Primary, Status::Good) => {
            "Improve recovery with an earlier bedtime; add 15 min of light cardio or stretching; keep hydration steady."
        }
        (Category::Primary, Status::Fair) => {
            "Aim for +1 hour of sleep; reduce caffeine after noon; schedule light mobility or an easy walk."
        }
        (Category::Primary, Status::Poor) => {
            "Rest today; avoid strenuous workouts; focus on hydration and 20–30 min of gentle walking."
        }
        (Category::Secondary, Status::Excellent) => {
            "Keep strong habits; add yoga/pilates for recovery; prioritize calcium + vitamin D intake."
        }
        (Category::Secondary, Status::Good) => {
            "Boost energy with a balanced breakfast; add 15 min of walking; focus on iron-rich foods if feeling low."
        }
        (Category::Secondary, Status::Fair) => {
            "Increase sleep consistency; reduce evening screen time; include calming routines like meditation or journaling."
        }
        (Category::Secondary, Status::Poor) => {
            "Prioritize rest and self-care; consider a short nap if possible; gentle yoga/stretching only."
        }
    }
}

/// Whole table keyed by category then status, for display as a resource.
pub fn table_json() -> Value {
    let mut out = Map::new();
    for category in [Category::Primary, Category::Secondary] {
        let mut col = Map::new();
        for status in Status::ALL {
            col.insert(
                status.as_str().to_string(),
                Value::String(recommendation_for(status, category).to_string()),
            );
        }
        out.insert(format!("{category:?}"), Value::Object(col));
    }
    Value::Object(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_cell_is_distinct() {
        let mut seen = std::collections::HashSet::new();
        for category in [Category::Primary, Category::Secondary] {
            for status in Status::ALL {
                assert!(seen.insert(recommendation_for(status, category)));
            }
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn table_json_has_both_columns() {
        let t = table_json();
        assert_eq!(
            t["Primary"]["Fair"],
            "Aim for +1 hour of sleep; reduce caffeine after noon; schedule light mobility or an easy walk."
        );
        assert_eq!(
            t["Secondary"]["Good"],
            "Boost energy with a balanced breakfast; add 15 min of walking; focus on iron-rich foods if feeling low."
        );
        assert_eq!(t["Secondary"].as_object().map(|o| o.len()), Some(4));
    }
}
