//! The join → score → filter → rank pipeline.
//!
//! Every stage is a pure function from one immutable table to the next, run
//! sequentially on one thread. Data flows strictly forward; no stage depends
//! on a later one.

pub mod join;
pub mod outliers;
pub mod ranking;
pub mod scoring;

pub use join::left_join_cost_of_living;
pub use outliers::filter_ppp_outliers;
pub use ranking::rank_countries;
pub use scoring::score_record;

use crate::config::PipelineConfig;
use crate::models::{CostOfLivingRecord, CountryRanking, JobRecord, ScoredRecord};

/// Join and score every job posting.
///
/// The output has the same length and order as `jobs`. Rows that fail an
/// eligibility precondition keep `ppp_salary = None` and are not dropped
/// here, so the result is suitable for inspection and testing.
#[must_use]
pub fn compute_scored_records(
    jobs: &[JobRecord],
    cost_of_living: &[CostOfLivingRecord],
) -> Vec<ScoredRecord> {
    join::left_join_cost_of_living(jobs, cost_of_living)
        .into_iter()
        .map(scoring::score_record)
        .collect()
}

/// The full pipeline: join, score, drop ineligible rows, remove outliers,
/// rank countries.
///
/// `min_postings` is the smallest per-country sample admitted to the ranking
/// and `top_n` bounds the output length; the reference values for both are
/// in [`crate::config`].
#[must_use]
pub fn compute_ppp_ranking(
    jobs: &[JobRecord],
    cost_of_living: &[CostOfLivingRecord],
    min_postings: usize,
    top_n: usize,
) -> Vec<CountryRanking> {
    let scored = compute_scored_records(jobs, cost_of_living);
    let eligible: Vec<ScoredRecord> = scored
        .into_iter()
        .filter(|record| record.ppp_salary.is_some())
        .collect();
    log::debug!("{} postings eligible for ranking", eligible.len());

    let retained = outliers::filter_ppp_outliers(eligible);
    ranking::rank_countries(&retained, min_postings, top_n)
}

/// [`compute_ppp_ranking`] with the thresholds taken from a [`PipelineConfig`]
#[must_use]
pub fn compute_ppp_ranking_with_config(
    jobs: &[JobRecord],
    cost_of_living: &[CostOfLivingRecord],
    config: &PipelineConfig,
) -> Vec<CountryRanking> {
    compute_ppp_ranking(jobs, cost_of_living, config.min_postings, config.top_n)
}
