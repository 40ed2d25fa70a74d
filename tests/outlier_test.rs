//! Tests for the IQR outlier filter on adjusted salaries.

use ppp_rank::algorithm::filter_ppp_outliers;
use ppp_rank::models::{EnrichedRecord, ScoredRecord};
use ppp_rank::utils::test_utils::job;

fn scored_with_ppp(ppp: f64) -> ScoredRecord {
    ScoredRecord {
        enriched: EnrichedRecord {
            job: job("USA", ppp * 1.3125),
            col_index: Some(100.0),
            col_plus_rent: Some(110.0),
            lpp: Some(90.0),
        },
        weighted_col: Some(105.0),
        clamped_lpp: Some(80.0),
        ppp_salary: Some(ppp),
    }
}

#[test]
fn test_filter_removes_extreme_value() {
    let mut records: Vec<ScoredRecord> = (10..=18).map(|v| scored_with_ppp(f64::from(v))).collect();
    records.push(scored_with_ppp(1000.0));

    let retained = filter_ppp_outliers(records);

    assert_eq!(retained.len(), 9);
    assert!(retained.iter().all(|r| r.ppp_salary.unwrap() <= 18.0));
}

#[test]
fn test_filter_keeps_uniform_distribution() {
    let records: Vec<ScoredRecord> = (1..=10).map(|v| scored_with_ppp(f64::from(v) * 100.0)).collect();
    let retained = filter_ppp_outliers(records);
    assert_eq!(retained.len(), 10);
}

#[test]
fn test_filter_converges_to_fixed_point() {
    let mut records: Vec<ScoredRecord> = (10..=18).map(|v| scored_with_ppp(f64::from(v))).collect();
    records.push(scored_with_ppp(1000.0));

    // Repeated application tightens the fences; it must reach a fixed point
    // quickly rather than oscillate.
    let mut passes = 0;
    loop {
        let before = records.len();
        records = filter_ppp_outliers(records);
        passes += 1;
        if records.len() == before {
            break;
        }
        assert!(passes < 10, "filter did not converge");
    }
    assert_eq!(records.len(), 9);
}

#[test]
fn test_filter_drops_rows_without_ppp() {
    // Rows without an adjusted salary have no place in the distribution.
    let mut records = vec![scored_with_ppp(10.0), scored_with_ppp(12.0)];
    records.push(ScoredRecord {
        ppp_salary: None,
        ..scored_with_ppp(0.0)
    });

    let retained = filter_ppp_outliers(records);

    assert_eq!(retained.len(), 2);
    assert!(retained.iter().all(|r| r.ppp_salary.is_some()));
}

#[test]
fn test_filter_empty_input() {
    assert!(filter_ppp_outliers(Vec::new()).is_empty());
}
