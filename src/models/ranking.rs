//! Ranking output row.

use serde::{Deserialize, Serialize};

/// Aggregated salary figures for one qualifying country.
///
/// Rows are handed to the presentation layer as-is; the ranking is ordered
/// by `avg_ppp_salary` descending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryRanking {
    /// Country, exactly as it appeared on the contributing postings
    pub company_location: String,
    /// Arithmetic mean of nominal USD salaries
    pub avg_nominal_salary: f64,
    /// Arithmetic mean of purchasing-power-adjusted salaries
    pub avg_ppp_salary: f64,
    /// Number of postings contributing to the averages
    pub job_count: usize,
}
