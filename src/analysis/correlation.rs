//! Pearson correlation across the numeric job metrics.

use serde::Serialize;

use crate::models::JobRecord;

/// Metrics included in the correlation matrix, in row/column order
pub const CORRELATION_METRICS: [&str; 4] = [
    "salary_usd",
    "years_experience",
    "benefits_score",
    "remote_ratio",
];

/// Symmetric Pearson correlation matrix
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationMatrix {
    /// Metric names, in row/column order
    pub metrics: Vec<&'static str>,
    /// `values[i][j]` is the Pearson r between metrics `i` and `j`;
    /// `None` when fewer than two complete pairs exist or a side has zero
    /// variance
    pub values: Vec<Vec<Option<f64>>>,
}

fn metric_value(record: &JobRecord, metric: &str) -> Option<f64> {
    match metric {
        "salary_usd" => Some(record.salary_usd),
        "years_experience" => Some(record.years_experience),
        "benefits_score" => record.benefits_score,
        "remote_ratio" => Some(f64::from(record.remote_ratio)),
        _ => None,
    }
}

/// Pearson correlation coefficient over two equally long slices.
///
/// `None` when fewer than two observations or either side has zero variance.
#[must_use]
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some(cov / (var_x.sqrt() * var_y.sqrt()))
}

/// Pairwise correlation matrix over [`CORRELATION_METRICS`].
///
/// Each pair is computed over the rows where both metrics are present, so a
/// sparsely populated `benefits_score` column does not shrink the other
/// pairs' samples.
#[must_use]
pub fn correlation_matrix(records: &[JobRecord]) -> CorrelationMatrix {
    let metrics = CORRELATION_METRICS.to_vec();
    let values = metrics
        .iter()
        .copied()
        .map(|row_metric| {
            metrics
                .iter()
                .copied()
                .map(|column_metric| {
                    let (xs, ys): (Vec<f64>, Vec<f64>) = records
                        .iter()
                        .filter_map(|record| {
                            Some((
                                metric_value(record, row_metric)?,
                                metric_value(record, column_metric)?,
                            ))
                        })
                        .unzip();
                    pearson(&xs, &ys)
                })
                .collect()
        })
        .collect();
    CorrelationMatrix { metrics, values }
}
