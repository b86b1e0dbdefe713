//! The scoring formula and status thresholds.
//!
//! Rounding of the bounded score is ties-to-even, so 79.5 becomes 80 and
//! 80.5 also becomes 80.

use crate::{Category, Status, WellnessResult, recommendation_for};

const SLEEP_WEIGHT: f64 = 8.0;
const STRESS_WEIGHT: f64 = 5.0;
const ACTIVITY_WEIGHT: f64 = 0.5;

const EXCELLENT_MIN: u8 = 80;
const GOOD_MIN: u8 = 60;
const FAIR_MIN: u8 = 40;

pub fn raw_score(sleep_hours: f64, stress_level: f64, activity_minutes: f64) -> f64 {
    sleep_hours * SLEEP_WEIGHT - stress_level * STRESS_WEIGHT + activity_minutes * ACTIVITY_WEIGHT
}

/// Bound to 0..=100 and round half to even. NaN scores as 0.
pub fn final_score(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    raw.clamp(0.0, 100.0).round_ties_even() as u8
}

pub fn status_for(score: u8) -> Status {
    if score >= EXCELLENT_MIN {
        Status::Excellent
    } else if score >= GOOD_MIN {
        Status::Good
    } else if score >= FAIR_MIN {
        Status::Fair
    } else {
        Status::Poor
    }
}

pub fn compute(
    sleep_hours: f64,
    stress_level: f64,
    activity_minutes: f64,
    category: Category,
) -> WellnessResult {
    let raw = raw_score(sleep_hours, stress_level, activity_minutes);
    let score = final_score(raw);
    let status = status_for(score);
    tracing::debug!(raw, score, %status, %category, "computed wellness score");
    WellnessResult {
        raw_score: raw,
        final_score: score,
        status,
        recommendation: recommendation_for(status, category).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendations;

    #[test]
    fn defaults_score_fair() {
        let r = compute(7.0, 4.0, 30.0, Category::Primary);
        assert_eq!(r.raw_score, 51.0);
        assert_eq!(r.final_score, 51);
        assert_eq!(r.status, Status::Fair);
    }

    #[test]
    fn full_sleep_no_stress_is_excellent() {
        let r = compute(12.0, 0.0, 0.0, Category::Primary);
        assert_eq!(r.raw_score, 96.0);
        assert_eq!(r.final_score, 96);
        assert_eq!(r.status, Status::Excellent);
    }

    #[test]
    fn negative_raw_clamps_to_zero() {
        let r = compute(0.0, 10.0, 0.0, Category::Secondary);
        assert_eq!(r.raw_score, -50.0);
        assert_eq!(r.final_score, 0);
        assert_eq!(r.status, Status::Poor);
        assert_eq!(
            r.recommendation,
            "Prioritize rest and self-care; consider a short nap if possible; gentle yoga/stretching only."
        );
    }

    #[test]
    fn active_day_is_excellent_primary() {
        let r = compute(10.0, 4.0, 60.0, Category::Primary);
        assert_eq!(r.raw_score, 90.0);
        assert_eq!(r.status, Status::Excellent);
        assert_eq!(
            r.recommendation,
            recommendations::recommendation_for(Status::Excellent, Category::Primary)
        );
    }

    #[test]
    fn over_range_clamps_to_hundred() {
        let r = compute(20.0, 0.0, 120.0, Category::Primary);
        assert_eq!(r.raw_score, 220.0);
        assert_eq!(r.final_score, 100);
    }

    #[test]
    fn status_boundaries_are_closed() {
        assert_eq!(status_for(100), Status::Excellent);
        assert_eq!(status_for(80), Status::Excellent);
        assert_eq!(status_for(79), Status::Good);
        assert_eq!(status_for(60), Status::Good);
        assert_eq!(status_for(59), Status::Fair);
        assert_eq!(status_for(40), Status::Fair);
        assert_eq!(status_for(39), Status::Poor);
        assert_eq!(status_for(0), Status::Poor);
    }

    #[test]
    fn ties_round_to_even() {
        // 0.5 * 159 = 79.5, 0.5 * 161 = 80.5, 0.5 * 81 = 40.5
        assert_eq!(compute(0.0, 0.0, 159.0, Category::Primary).final_score, 80);
        assert_eq!(compute(0.0, 0.0, 161.0, Category::Primary).final_score, 80);
        assert_eq!(compute(0.0, 0.0, 81.0, Category::Primary).final_score, 40);
        assert_eq!(compute(0.0, 0.0, 79.0, Category::Primary).final_score, 40);
        assert_eq!(final_score(59.5), 60);
        assert_eq!(final_score(59.4), 59);
    }

    #[test]
    fn nan_scores_zero() {
        assert_eq!(final_score(f64::NAN), 0);
        assert_eq!(final_score(f64::INFINITY), 100);
        assert_eq!(final_score(f64::NEG_INFINITY), 0);
    }

    #[test]
    fn compute_is_idempotent() {
        let a = compute(6.5, 3.2, 47.0, Category::Secondary);
        let b = compute(6.5, 3.2, 47.0, Category::Secondary);
        assert_eq!(a, b);
    }

    #[test]
    fn final_score_stays_in_bounds_over_a_grid() {
        let mut sleep = -2.0;
        while sleep <= 14.0 {
            let mut stress = -2.0;
            while stress <= 12.0 {
                let mut activity = -10.0;
                while activity <= 200.0 {
                    let r = compute(sleep, stress, activity, Category::Primary);
                    assert!(r.final_score <= 100);
                    activity += 7.5;
                }
                stress += 0.5;
            }
            sleep += 0.25;
        }
    }
}
