//! Market exploration: experience mix, remote work, skills, and nominal
//! geographic rankings.

use itertools::Itertools;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::models::{ExperienceLevel, JobRecord};

/// Posting count for one experience level
#[derive(Debug, Clone, Serialize)]
pub struct ExperienceCount {
    /// Seniority band
    pub level: ExperienceLevel,
    /// Number of postings at that band
    pub count: usize,
}

/// Posting counts per experience level, most common first.
///
/// Rows with an unrecognized level code are skipped.
#[must_use]
pub fn experience_distribution(records: &[JobRecord]) -> Vec<ExperienceCount> {
    let mut counts: FxHashMap<ExperienceLevel, usize> = FxHashMap::default();
    for record in records {
        if let Some(level) = record.experience_level {
            *counts.entry(level).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .map(|(level, count)| ExperienceCount { level, count })
        .sorted_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.level.code().cmp(b.level.code()))
        })
        .collect()
}

/// Mean salary and posting count for one remote-work ratio
#[derive(Debug, Clone, Serialize)]
pub struct RemoteWorkStats {
    /// Share of remote work: 0, 50 or 100
    pub remote_ratio: u8,
    /// Arithmetic mean of nominal salaries
    pub avg_salary: f64,
    /// Number of postings
    pub job_count: usize,
}

/// Salary statistics per distinct remote ratio, ascending by ratio
#[must_use]
pub fn remote_work_stats(records: &[JobRecord]) -> Vec<RemoteWorkStats> {
    let mut groups: FxHashMap<u8, (f64, usize)> = FxHashMap::default();
    for record in records {
        let entry = groups.entry(record.remote_ratio).or_insert((0.0, 0));
        entry.0 += record.salary_usd;
        entry.1 += 1;
    }
    groups
        .into_iter()
        .map(|(remote_ratio, (salary_sum, job_count))| RemoteWorkStats {
            remote_ratio,
            avg_salary: salary_sum / job_count as f64,
            job_count,
        })
        .sorted_by_key(|stats| stats.remote_ratio)
        .collect()
}

/// Nominal salary statistics for one country
#[derive(Debug, Clone, Serialize)]
pub struct CountrySalaryStats {
    /// Country, exactly as it appeared on the postings
    pub company_location: String,
    /// Arithmetic mean of nominal salaries
    pub avg_salary: f64,
    /// Number of postings
    pub job_count: usize,
    /// Arithmetic mean of the remote-work ratio
    pub avg_remote_ratio: f64,
}

/// Top `n` countries by mean nominal salary.
///
/// A nominal counterpart to the adjusted ranking: no eligibility floor, no
/// outlier removal, no minimum sample size. Ties keep first-appearance order.
#[must_use]
pub fn top_countries_by_salary(records: &[JobRecord], n: usize) -> Vec<CountrySalaryStats> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: FxHashMap<&str, (f64, f64, usize)> = FxHashMap::default();
    for record in records {
        let country = record.company_location.as_str();
        let entry = groups.entry(country).or_insert_with(|| {
            order.push(country);
            (0.0, 0.0, 0)
        });
        entry.0 += record.salary_usd;
        entry.1 += f64::from(record.remote_ratio);
        entry.2 += 1;
    }

    let mut stats: Vec<CountrySalaryStats> = order
        .into_iter()
        .map(|country| {
            let (salary_sum, ratio_sum, job_count) = groups[country];
            CountrySalaryStats {
                company_location: country.to_string(),
                avg_salary: salary_sum / job_count as f64,
                job_count,
                avg_remote_ratio: ratio_sum / job_count as f64,
            }
        })
        .collect();
    stats.sort_by(|a, b| {
        b.avg_salary
            .partial_cmp(&a.avg_salary)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    stats.truncate(n);
    stats
}

/// Demand count for one skill
#[derive(Debug, Clone, Serialize)]
pub struct SkillCount {
    /// Skill name, trimmed
    pub skill: String,
    /// Number of postings requiring it
    pub count: usize,
}

/// Top `n` skills by posting frequency.
///
/// Skill lists are split on commas and trimmed; empty entries are dropped.
/// Ties break alphabetically so the output is deterministic.
#[must_use]
pub fn top_skills(records: &[JobRecord], n: usize) -> Vec<SkillCount> {
    let mut counts: FxHashMap<String, usize> = FxHashMap::default();
    for record in records {
        for skill in record.required_skills.split(',') {
            let skill = skill.trim();
            if !skill.is_empty() {
                *counts.entry(skill.to_string()).or_default() += 1;
            }
        }
    }
    counts
        .into_iter()
        .map(|(skill, count)| SkillCount { skill, count })
        .sorted_by(|a, b| b.count.cmp(&a.count).then_with(|| a.skill.cmp(&b.skill)))
        .take(n)
        .collect()
}
