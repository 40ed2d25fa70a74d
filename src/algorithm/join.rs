//! Left join of job postings against cost-of-living rows.

use rustc_hash::FxHashMap;

use crate::models::{CostOfLivingRecord, EnrichedRecord, JobRecord};

/// Left-join every posting against the cost-of-living dataset.
///
/// The output has exactly the same length and order as `jobs`: no row is
/// dropped and none is duplicated. Keys are compared after trimming
/// surrounding whitespace from both sides; the comparison itself is
/// case-sensitive, matching the upstream data ("USA" and "usa" do not
/// match). When the cost-of-living dataset repeats a country, the first
/// occurrence wins, which keeps the match deterministic. An unmatched
/// posting gets `None` in all three index fields.
#[must_use]
pub fn left_join_cost_of_living(
    jobs: &[JobRecord],
    cost_of_living: &[CostOfLivingRecord],
) -> Vec<EnrichedRecord> {
    let mut by_country: FxHashMap<&str, &CostOfLivingRecord> = FxHashMap::default();
    for record in cost_of_living {
        by_country.entry(record.country.trim()).or_insert(record);
    }

    jobs.iter()
        .map(|job| {
            let matched = by_country.get(job.company_location.trim());
            EnrichedRecord {
                job: job.clone(),
                col_index: matched.and_then(|c| c.cost_of_living_index),
                col_plus_rent: matched.and_then(|c| c.cost_of_living_plus_rent_index),
                lpp: matched.and_then(|c| c.local_purchasing_power_index),
            }
        })
        .collect()
}
