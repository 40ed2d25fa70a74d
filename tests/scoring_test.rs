//! Tests for the clamping and adjusted-salary calculations.

use ppp_rank::algorithm::scoring::{
    clamp_purchasing_power, ppp_salary, score_record, weighted_cost_of_living,
};
use ppp_rank::models::EnrichedRecord;
use ppp_rank::utils::test_utils::job;

#[test]
fn test_weighted_col_blends_both_indices() {
    assert_eq!(weighted_cost_of_living(Some(100.0), Some(110.0)), Some(105.0));
}

#[test]
fn test_weighted_col_single_index_unweighted() {
    assert_eq!(weighted_cost_of_living(Some(70.0), None), Some(70.0));
    assert_eq!(weighted_cost_of_living(None, Some(70.0)), Some(70.0));
}

#[test]
fn test_weighted_col_clamped_into_bounds() {
    assert_eq!(weighted_cost_of_living(Some(10.0), Some(20.0)), Some(40.0));
    assert_eq!(weighted_cost_of_living(None, Some(300.0)), Some(150.0));
}

#[test]
fn test_weighted_col_absent_indices() {
    assert_eq!(weighted_cost_of_living(None, None), None);
}

#[test]
fn test_lpp_clamped_into_bounds() {
    assert_eq!(clamp_purchasing_power(Some(90.0)), Some(80.0));
    assert_eq!(clamp_purchasing_power(Some(10.0)), Some(30.0));
    assert_eq!(clamp_purchasing_power(Some(55.0)), Some(55.0));
    assert_eq!(clamp_purchasing_power(None), None);
}

#[test]
fn test_ppp_salary_reference_formula() {
    // salary * (80/100) / (105/100)
    let value = ppp_salary(5000.0, Some(105.0), Some(80.0)).unwrap();
    assert!((value - 5000.0 * 0.8 / 1.05).abs() < 1e-9);
}

#[test]
fn test_ppp_salary_below_floor_is_excluded() {
    assert_eq!(ppp_salary(1500.0, Some(105.0), Some(80.0)), None);
    // The floor itself is eligible.
    assert!(ppp_salary(2000.0, Some(105.0), Some(80.0)).is_some());
}

#[test]
fn test_ppp_salary_requires_both_indices() {
    assert_eq!(ppp_salary(5000.0, None, Some(80.0)), None);
    assert_eq!(ppp_salary(5000.0, Some(105.0), None), None);
}

#[test]
fn test_ppp_salary_rejects_nonpositive_weighted_col() {
    // Unreachable through the clamp, but the calculator must not divide by it.
    assert_eq!(ppp_salary(5000.0, Some(0.0), Some(80.0)), None);
    assert_eq!(ppp_salary(5000.0, Some(-5.0), Some(80.0)), None);
}

#[test]
fn test_score_record_bounds_invariant() {
    let enriched = EnrichedRecord {
        job: job("USA", 100_000.0),
        col_index: Some(500.0),
        col_plus_rent: Some(500.0),
        lpp: Some(1.0),
    };
    let scored = score_record(enriched);

    assert_eq!(scored.weighted_col, Some(150.0));
    assert_eq!(scored.clamped_lpp, Some(30.0));
    assert!(scored.ppp_salary.is_some());
}

#[test]
fn test_score_record_unmatched_row() {
    let enriched = EnrichedRecord {
        job: job("Atlantis", 100_000.0),
        col_index: None,
        col_plus_rent: None,
        lpp: None,
    };
    let scored = score_record(enriched);

    assert_eq!(scored.weighted_col, None);
    assert_eq!(scored.clamped_lpp, None);
    assert_eq!(scored.ppp_salary, None);
}
