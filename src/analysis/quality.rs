//! Data-quality pass over the job dataset.

use serde::Serialize;

use crate::models::JobRecord;
use crate::utils::stats::{SummaryStats, iqr_outlier_count, summary};

/// Missing-cell count for one field
#[derive(Debug, Clone, Serialize)]
pub struct FieldMissingCount {
    /// Field name
    pub field: &'static str,
    /// Number of rows missing a value
    pub missing: usize,
    /// Share of all rows, as a percentage rounded to two decimals
    pub percentage: f64,
}

/// Per-field missing-value profile over the fields that can be absent.
///
/// `required_skills` counts as missing when the cell was empty or
/// whitespace-only, since an empty skill list carries no information.
#[must_use]
pub fn missing_value_profile(records: &[JobRecord]) -> Vec<FieldMissingCount> {
    let counts: [(&'static str, usize); 4] = [
        (
            "experience_level",
            records.iter().filter(|r| r.experience_level.is_none()).count(),
        ),
        (
            "posting_date",
            records.iter().filter(|r| r.posting_date.is_none()).count(),
        ),
        (
            "benefits_score",
            records.iter().filter(|r| r.benefits_score.is_none()).count(),
        ),
        (
            "required_skills",
            records
                .iter()
                .filter(|r| r.required_skills.trim().is_empty())
                .count(),
        ),
    ];

    let total = records.len();
    counts
        .into_iter()
        .map(|(field, missing)| FieldMissingCount {
            field,
            missing,
            percentage: if total == 0 {
                0.0
            } else {
                (missing as f64 / total as f64 * 10_000.0).round() / 100.0
            },
        })
        .collect()
}

/// Summary statistics of the nominal salary column; `None` on an empty dataset
#[must_use]
pub fn salary_summary(records: &[JobRecord]) -> Option<SummaryStats> {
    let salaries: Vec<f64> = records.iter().map(|r| r.salary_usd).collect();
    summary(&salaries)
}

/// Number of raw salaries outside the IQR fences of their own distribution.
///
/// Reported as a data-quality figure only — unlike the adjusted-salary
/// filter, nothing is removed here.
#[must_use]
pub fn salary_outlier_count(records: &[JobRecord]) -> usize {
    let salaries: Vec<f64> = records.iter().map(|r| r.salary_usd).collect();
    iqr_outlier_count(&salaries)
}
