//! Quantile and summary statistics.
//!
//! One implementation serves both call sites: the outlier filter on the
//! adjusted-salary distribution and the data-quality pass on raw salaries.

use serde::Serialize;

use crate::config::IQR_MULTIPLIER;

/// Arithmetic mean; `None` on an empty slice
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Quantile with linear interpolation between the two closest ranks.
///
/// `q` must lie in `[0, 1]`. Returns `None` on an empty slice or an
/// out-of-range `q`.
#[must_use]
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() || !(0.0..=1.0).contains(&q) {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    if lower == upper {
        return Some(sorted[lower]);
    }
    let weight = pos - lower as f64;
    Some(sorted[lower] * (1.0 - weight) + sorted[upper] * weight)
}

/// Inclusive retention fences derived from the interquartile range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IqrFences {
    /// Lowest retained value
    pub lower: f64,
    /// Highest retained value
    pub upper: f64,
}

impl IqrFences {
    /// Whether `value` falls inside the fences, inclusive on both ends
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// Fences at `Q1 - 1.5*IQR` and `Q3 + 1.5*IQR`; `None` on an empty slice
#[must_use]
pub fn iqr_fences(values: &[f64]) -> Option<IqrFences> {
    let q1 = quantile(values, 0.25)?;
    let q3 = quantile(values, 0.75)?;
    let iqr = q3 - q1;
    Some(IqrFences {
        lower: q1 - IQR_MULTIPLIER * iqr,
        upper: q3 + IQR_MULTIPLIER * iqr,
    })
}

/// Count of values falling outside the IQR fences of their own distribution
#[must_use]
pub fn iqr_outlier_count(values: &[f64]) -> usize {
    match iqr_fences(values) {
        Some(fences) => values.iter().filter(|v| !fences.contains(**v)).count(),
        None => 0,
    }
}

/// Summary statistics for one numeric column
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStats {
    /// Number of values
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation; 0 for a single value
    pub std: f64,
    /// Smallest value
    pub min: f64,
    /// 25th percentile
    pub p25: f64,
    /// Median
    pub median: f64,
    /// 75th percentile
    pub p75: f64,
    /// Largest value
    pub max: f64,
}

/// Summary over `values`; `None` when empty
#[must_use]
pub fn summary(values: &[f64]) -> Option<SummaryStats> {
    let count = values.len();
    let mean = mean(values)?;
    let std = if count > 1 {
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
        variance.sqrt()
    } else {
        0.0
    };
    Some(SummaryStats {
        count,
        mean,
        std,
        min: values.iter().copied().fold(f64::INFINITY, f64::min),
        p25: quantile(values, 0.25)?,
        median: quantile(values, 0.5)?,
        p75: quantile(values, 0.75)?,
        max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    })
}
