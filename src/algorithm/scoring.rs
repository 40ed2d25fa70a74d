//! Normalization, clamping, and the adjusted-salary calculation.

use crate::config::{
    LPP_MAX, LPP_MIN, SALARY_FLOOR_USD, WEIGHTED_COL_MAX, WEIGHTED_COL_MIN,
};
use crate::models::{EnrichedRecord, ScoredRecord};

/// Weighted cost-of-living figure, clamped into `[WEIGHTED_COL_MIN, WEIGHTED_COL_MAX]`.
///
/// Both indices present ⇒ an even 50/50 blend; exactly one present ⇒ that
/// value unweighted; neither ⇒ `None`, which excludes the row later.
#[must_use]
pub fn weighted_cost_of_living(col_index: Option<f64>, col_plus_rent: Option<f64>) -> Option<f64> {
    let raw = match (col_index, col_plus_rent) {
        (Some(col), Some(rent)) => 0.5 * col + 0.5 * rent,
        (Some(col), None) => col,
        (None, Some(rent)) => rent,
        (None, None) => return None,
    };
    Some(raw.clamp(WEIGHTED_COL_MIN, WEIGHTED_COL_MAX))
}

/// Local purchasing power clamped into `[LPP_MIN, LPP_MAX]`; `None` passes through
#[must_use]
pub fn clamp_purchasing_power(lpp: Option<f64>) -> Option<f64> {
    lpp.map(|v| v.clamp(LPP_MIN, LPP_MAX))
}

/// Purchasing-power-adjusted salary:
/// `salary_usd * (clamped_lpp / 100) / (weighted_col / 100)`.
///
/// Computed only when both clamped indices are present and the nominal
/// salary reaches [`SALARY_FLOOR_USD`]. A violated precondition yields
/// `None` — a silent exclusion, not an error. The clamp keeps `weighted_col`
/// at 40 or above, but a non-positive or non-finite figure is still rejected
/// here rather than divided by, in case the clamp was bypassed.
#[must_use]
pub fn ppp_salary(
    salary_usd: f64,
    weighted_col: Option<f64>,
    clamped_lpp: Option<f64>,
) -> Option<f64> {
    let weighted_col = weighted_col?;
    let clamped_lpp = clamped_lpp?;
    if salary_usd < SALARY_FLOOR_USD {
        return None;
    }
    if weighted_col <= 0.0 || !weighted_col.is_finite() {
        return None;
    }
    Some(salary_usd * (clamped_lpp / 100.0) / (weighted_col / 100.0))
}

/// Score one join-output row
#[must_use]
pub fn score_record(enriched: EnrichedRecord) -> ScoredRecord {
    let weighted_col = weighted_cost_of_living(enriched.col_index, enriched.col_plus_rent);
    let clamped_lpp = clamp_purchasing_power(enriched.lpp);
    let ppp_salary = ppp_salary(enriched.job.salary_usd, weighted_col, clamped_lpp);
    ScoredRecord {
        enriched,
        weighted_col,
        clamped_lpp,
        ppp_salary,
    }
}
