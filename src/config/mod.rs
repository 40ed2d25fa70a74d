//! Policy constants and configuration for the ranking pipeline.
//!
//! The clamp bounds encode the judgment that extreme index values in the
//! cost-of-living dataset are unreliable. They are applied as-is everywhere;
//! nothing re-derives them.

/// Lower clamp bound for the weighted cost-of-living figure
pub const WEIGHTED_COL_MIN: f64 = 40.0;
/// Upper clamp bound for the weighted cost-of-living figure
pub const WEIGHTED_COL_MAX: f64 = 150.0;
/// Lower clamp bound for the local purchasing power index
pub const LPP_MIN: f64 = 30.0;
/// Upper clamp bound for the local purchasing power index
pub const LPP_MAX: f64 = 80.0;
/// Minimum nominal salary (USD) for a posting to be eligible for adjustment
pub const SALARY_FLOOR_USD: f64 = 2000.0;
/// Multiplier applied to the interquartile range when fencing outliers
pub const IQR_MULTIPLIER: f64 = 1.5;
/// Default minimum postings a country needs to appear in the ranking
pub const DEFAULT_MIN_POSTINGS: usize = 10;
/// Default number of countries emitted by the ranking
pub const DEFAULT_TOP_N: usize = 10;

/// Configuration for one ranking run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Minimum postings a country needs to appear in the ranking
    pub min_postings: usize,
    /// Number of countries emitted
    pub top_n: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_postings: DEFAULT_MIN_POSTINGS,
            top_n: DEFAULT_TOP_N,
        }
    }
}
