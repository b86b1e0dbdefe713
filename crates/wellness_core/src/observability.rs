use crate::{Category, WellnessResult};

pub const COMPUTATIONS_TOTAL: &str = "wellness_computations_total";
pub const FINAL_SCORE: &str = "wellness_final_score";

/// Emit metrics for one finished computation. The computation itself stays
/// side-effect free; adapters call this after presenting a result.
pub fn record_result(result: &WellnessResult, category: Category) {
    metrics::counter!(
        COMPUTATIONS_TOTAL,
        "status" => result.status.as_str(),
        "category" => category.label()
    )
    .increment(1);
    metrics::histogram!(FINAL_SCORE).record(f64::from(result.final_score));
}
