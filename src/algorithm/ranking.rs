//! Per-country aggregation and ranking.

use rustc_hash::FxHashMap;

use crate::models::{CountryRanking, ScoredRecord};

/// Group records by country, average them, and rank.
///
/// The grouping key is the posting's original `company_location` string —
/// deliberately not a trimmed or otherwise normalized form. Groups smaller
/// than `min_postings` are dropped silently. The rest sort by mean adjusted
/// salary descending; the sort is stable, so ties keep first-appearance
/// order. At most `top_n` rows are returned.
#[must_use]
pub fn rank_countries(
    records: &[ScoredRecord],
    min_postings: usize,
    top_n: usize,
) -> Vec<CountryRanking> {
    // First-appearance order of countries doubles as the tie-break order.
    let mut order: Vec<&str> = Vec::new();
    let mut groups: FxHashMap<&str, (f64, f64, usize)> = FxHashMap::default();
    for record in records {
        let Some(ppp) = record.ppp_salary else {
            continue;
        };
        let country = record.job().company_location.as_str();
        let entry = groups.entry(country).or_insert_with(|| {
            order.push(country);
            (0.0, 0.0, 0)
        });
        entry.0 += record.job().salary_usd;
        entry.1 += ppp;
        entry.2 += 1;
    }

    let mut rankings: Vec<CountryRanking> = order
        .into_iter()
        .filter_map(|country| {
            let (salary_sum, ppp_sum, count) = groups[country];
            if count < min_postings {
                return None;
            }
            Some(CountryRanking {
                company_location: country.to_string(),
                avg_nominal_salary: salary_sum / count as f64,
                avg_ppp_salary: ppp_sum / count as f64,
                job_count: count,
            })
        })
        .collect();

    rankings.sort_by(|a, b| {
        b.avg_ppp_salary
            .partial_cmp(&a.avg_ppp_salary)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    rankings.truncate(top_n);
    rankings
}
