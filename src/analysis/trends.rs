//! Monthly posting and salary trends.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::JobRecord;

/// One month of aggregated postings
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyTrend {
    /// Month key, `YYYY-MM`
    pub month: String,
    /// Number of postings that month
    pub job_count: usize,
    /// Arithmetic mean of nominal salaries
    pub avg_salary: f64,
    /// Arithmetic mean of required years of experience
    pub avg_years_experience: f64,
    /// Percent change in posting count vs the previous month; `None` for the first
    pub job_growth_pct: Option<f64>,
    /// Percent change in mean salary vs the previous month; `None` for the first
    pub salary_growth_pct: Option<f64>,
}

/// Monthly trend rows in ascending month order.
///
/// Postings without a date are skipped; growth percentages compare against
/// the immediately preceding month present in the data, not the calendar
/// predecessor.
#[must_use]
pub fn monthly_trends(records: &[JobRecord]) -> Vec<MonthlyTrend> {
    let mut groups: BTreeMap<String, (usize, f64, f64)> = BTreeMap::new();
    for record in records {
        let Some(date) = record.posting_date else {
            continue;
        };
        let entry = groups
            .entry(date.format("%Y-%m").to_string())
            .or_insert((0, 0.0, 0.0));
        entry.0 += 1;
        entry.1 += record.salary_usd;
        entry.2 += record.years_experience;
    }

    let mut trends = Vec::with_capacity(groups.len());
    let mut previous: Option<(usize, f64)> = None;
    for (month, (job_count, salary_sum, years_sum)) in groups {
        let avg_salary = salary_sum / job_count as f64;
        trends.push(MonthlyTrend {
            month,
            job_count,
            avg_salary,
            avg_years_experience: years_sum / job_count as f64,
            job_growth_pct: previous
                .map(|(prev_count, _)| (job_count as f64 - prev_count as f64) / prev_count as f64 * 100.0),
            salary_growth_pct: previous
                .map(|(_, prev_salary)| (avg_salary - prev_salary) / prev_salary * 100.0),
        });
        previous = Some((job_count, avg_salary));
    }
    trends
}
