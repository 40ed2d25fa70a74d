//! Derived per-posting records: join output and scoring output.
//!
//! Both types are recomputed on every pipeline run and never persisted.

use serde::{Deserialize, Serialize};

use crate::models::JobRecord;

/// A job posting with the cost-of-living indices of its matched country.
///
/// Every enriched record traces to exactly one [`JobRecord`]. An unmatched
/// country leaves all three index fields `None`; that is expected data, not
/// an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedRecord {
    /// The originating posting
    pub job: JobRecord,
    /// Cost of living excluding rent, from the matched country
    pub col_index: Option<f64>,
    /// Combined cost of living and rent, from the matched country
    pub col_plus_rent: Option<f64>,
    /// Local purchasing power, from the matched country
    pub lpp: Option<f64>,
}

/// An enriched record with the clamped indices and the adjusted salary.
///
/// `ppp_salary = None` marks a row that failed an eligibility precondition;
/// such rows are excluded from every downstream stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredRecord {
    /// The join output this score was computed from
    pub enriched: EnrichedRecord,
    /// Weighted cost-of-living figure, clamped into policy bounds
    pub weighted_col: Option<f64>,
    /// Local purchasing power, clamped into policy bounds
    pub clamped_lpp: Option<f64>,
    /// Purchasing-power-adjusted salary
    pub ppp_salary: Option<f64>,
}

impl ScoredRecord {
    /// The originating posting
    #[must_use]
    pub fn job(&self) -> &JobRecord {
        &self.enriched.job
    }
}
