//! End-to-end tests for the ranking pipeline entry points.

use ppp_rank::config::{DEFAULT_MIN_POSTINGS, DEFAULT_TOP_N};
use ppp_rank::utils::test_utils::{col_record, job, synthetic_jobs};
use ppp_rank::{
    PipelineConfig, compute_ppp_ranking, compute_ppp_ranking_with_config, compute_scored_records,
};

#[test]
fn test_reference_example() {
    // Ten USA postings against indices (100, 110, 90): the weighted figure
    // is 105 (no clamping), purchasing power clamps from 90 to 80, and each
    // adjusted salary is salary * 0.8 / 1.05.
    let jobs: Vec<_> = (0..10)
        .map(|i| job("USA", 5000.0 + 1000.0 * f64::from(i)))
        .collect();
    let cost_of_living = vec![col_record("USA", 100.0, 110.0, 90.0)];

    let scored = compute_scored_records(&jobs, &cost_of_living);
    assert_eq!(scored.len(), jobs.len());
    for record in &scored {
        assert_eq!(record.weighted_col, Some(105.0));
        assert_eq!(record.clamped_lpp, Some(80.0));
        let expected = record.job().salary_usd * 0.8 / 1.05;
        assert!((record.ppp_salary.unwrap() - expected).abs() < 1e-9);
    }

    let rankings = compute_ppp_ranking(&jobs, &cost_of_living, DEFAULT_MIN_POSTINGS, DEFAULT_TOP_N);
    assert_eq!(rankings.len(), 1);
    assert_eq!(rankings[0].job_count, 10);
    assert!((rankings[0].avg_nominal_salary - 9500.0).abs() < 1e-9);
    assert!((rankings[0].avg_ppp_salary - 9500.0 * 0.8 / 1.05).abs() < 1e-9);
}

#[test]
fn test_scored_records_keep_ineligible_rows() {
    let jobs = vec![
        job("USA", 1500.0),     // below the salary floor
        job("Atlantis", 9000.0), // no cost-of-living match
        job("USA", 9000.0),
    ];
    let cost_of_living = vec![col_record("USA", 100.0, 110.0, 90.0)];

    let scored = compute_scored_records(&jobs, &cost_of_living);

    assert_eq!(scored.len(), 3);
    assert_eq!(scored[0].ppp_salary, None);
    assert_eq!(scored[1].ppp_salary, None);
    assert!(scored[2].ppp_salary.is_some());
}

#[test]
fn test_config_defaults_match_reference_thresholds() {
    let jobs: Vec<_> = (0..10).map(|_| job("USA", 9000.0)).collect();
    let cost_of_living = vec![col_record("USA", 100.0, 110.0, 90.0)];

    let explicit = compute_ppp_ranking(&jobs, &cost_of_living, DEFAULT_MIN_POSTINGS, DEFAULT_TOP_N);
    let via_config =
        compute_ppp_ranking_with_config(&jobs, &cost_of_living, &PipelineConfig::default());

    assert_eq!(explicit.len(), via_config.len());
    assert_eq!(explicit[0].company_location, via_config[0].company_location);
}

#[test]
fn test_nine_postings_never_rank() {
    let jobs: Vec<_> = (0..9).map(|_| job("USA", 9000.0)).collect();
    let cost_of_living = vec![col_record("USA", 100.0, 110.0, 90.0)];

    let rankings = compute_ppp_ranking(&jobs, &cost_of_living, DEFAULT_MIN_POSTINGS, DEFAULT_TOP_N);

    assert!(rankings.is_empty());
}

#[test]
fn test_clamp_bounds_hold_across_synthetic_data() {
    let mut jobs = synthetic_jobs("USA", 60, 7);
    jobs.extend(synthetic_jobs("Germany", 60, 11));
    jobs.extend(synthetic_jobs("Atlantis", 20, 13));
    let cost_of_living = vec![
        col_record("USA", 100.0, 110.0, 90.0),
        col_record("Germany", 65.0, 60.0, 95.0),
    ];

    for record in compute_scored_records(&jobs, &cost_of_living) {
        if let Some(weighted) = record.weighted_col {
            assert!((40.0..=150.0).contains(&weighted));
        }
        if let Some(lpp) = record.clamped_lpp {
            assert!((30.0..=80.0).contains(&lpp));
        }
        if record.ppp_salary.is_some() {
            assert!(record.job().salary_usd >= 2000.0);
            assert!(record.weighted_col.is_some());
            assert!(record.clamped_lpp.is_some());
        }
    }
}

#[test]
fn test_ranking_rows_serialize_for_presentation() {
    let jobs: Vec<_> = (0..10).map(|_| job("USA", 9000.0)).collect();
    let cost_of_living = vec![col_record("USA", 100.0, 110.0, 90.0)];

    let rankings = compute_ppp_ranking(&jobs, &cost_of_living, DEFAULT_MIN_POSTINGS, DEFAULT_TOP_N);
    let json = serde_json::to_value(&rankings).unwrap();

    let row = &json[0];
    assert_eq!(row["company_location"], "USA");
    assert_eq!(row["job_count"], 10);
    assert!(row["avg_nominal_salary"].is_f64());
    assert!(row["avg_ppp_salary"].is_f64());
}
