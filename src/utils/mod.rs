//! Shared statistics, logging, and test-data utilities.

pub mod logging;
pub mod stats;
pub mod test_utils;

pub use stats::{IqrFences, SummaryStats, iqr_fences, iqr_outlier_count, mean, quantile};
