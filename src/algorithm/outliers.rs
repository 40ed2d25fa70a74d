//! IQR outlier removal on the adjusted-salary distribution.

use crate::models::ScoredRecord;
use crate::utils::stats::iqr_fences;

/// Drop records whose adjusted salary falls outside the IQR fences of the
/// current distribution.
///
/// The fences are recomputed from scratch on every call — this is a pure
/// function of the records passed in, never a cached bound. Callers must
/// run it only after dropping rows with `ppp_salary = None`, so absent
/// values never participate in quantile estimation; any such row that does
/// slip through is dropped, not scored.
#[must_use]
pub fn filter_ppp_outliers(records: Vec<ScoredRecord>) -> Vec<ScoredRecord> {
    let values: Vec<f64> = records.iter().filter_map(|r| r.ppp_salary).collect();
    let Some(fences) = iqr_fences(&values) else {
        return records;
    };

    let before = records.len();
    let retained: Vec<ScoredRecord> = records
        .into_iter()
        .filter(|r| r.ppp_salary.is_some_and(|v| fences.contains(v)))
        .collect();
    if retained.len() < before {
        log::debug!(
            "Outlier filter removed {} of {} postings",
            before - retained.len(),
            before
        );
    }
    retained
}
