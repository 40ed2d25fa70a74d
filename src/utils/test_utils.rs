//! Synthetic dataset generation for tests.
//!
//! Generators are seeded, so fixtures are deterministic across runs.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{CostOfLivingRecord, ExperienceLevel, JobRecord};

/// A minimal posting with just a location and a salary
#[must_use]
pub fn job(country: &str, salary_usd: f64) -> JobRecord {
    JobRecord {
        job_id: format!("{country}-{salary_usd}"),
        company_location: country.to_string(),
        salary_usd,
        years_experience: 5.0,
        experience_level: Some(ExperienceLevel::Senior),
        remote_ratio: 50,
        required_skills: "Python, Rust".to_string(),
        posting_date: NaiveDate::from_ymd_opt(2025, 3, 15),
        benefits_score: None,
    }
}

/// Deterministic synthetic postings for one country
#[must_use]
pub fn synthetic_jobs(country: &str, count: usize, seed: u64) -> Vec<JobRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let levels = [
        ExperienceLevel::Entry,
        ExperienceLevel::Mid,
        ExperienceLevel::Senior,
        ExperienceLevel::Executive,
    ];
    let ratios = [0u8, 50, 100];
    (0..count)
        .map(|i| JobRecord {
            job_id: format!("{country}-{i}"),
            company_location: country.to_string(),
            salary_usd: rng.random_range(40_000.0..180_000.0),
            years_experience: rng.random_range(0.0..15.0),
            experience_level: Some(levels[rng.random_range(0..levels.len())]),
            remote_ratio: ratios[rng.random_range(0..ratios.len())],
            required_skills: "Python, SQL, Machine Learning".to_string(),
            posting_date: NaiveDate::from_ymd_opt(2025, (i % 12) as u32 + 1, 15),
            benefits_score: Some(rng.random_range(5.0..10.0)),
        })
        .collect()
}

/// Cost-of-living row with all three indices present
#[must_use]
pub fn col_record(country: &str, col: f64, rent: f64, lpp: f64) -> CostOfLivingRecord {
    CostOfLivingRecord {
        country: country.to_string(),
        cost_of_living_index: Some(col),
        cost_of_living_plus_rent_index: Some(rent),
        local_purchasing_power_index: Some(lpp),
    }
}
