//! A Rust library for computing purchasing-power-adjusted salary rankings
//! from job market data, with schema validation, IQR outlier filtering, and
//! dataset-quality analysis.
//!
//! Two tabular inputs — job postings and per-country cost-of-living indices —
//! are joined on the country name, scored with a clamped weighted
//! cost-of-living figure, filtered for statistical outliers, and aggregated
//! into a per-country ranking. All outputs are plain rows for an external
//! presentation layer; nothing here renders.

pub mod algorithm;
pub mod analysis;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod schema;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::{DEFAULT_MIN_POSTINGS, DEFAULT_TOP_N, PipelineConfig};
pub use error::{PipelineError, Result};
pub use models::{
    CostOfLivingRecord, CountryRanking, EnrichedRecord, ExperienceLevel, JobRecord, ScoredRecord,
};

// Arrow types
pub use arrow::record_batch::RecordBatch;

// Pipeline entry points
pub use algorithm::{compute_ppp_ranking, compute_ppp_ranking_with_config, compute_scored_records};

// Dataset loading
pub use loader::{
    cost_of_living_from_batches, jobs_from_batches, load_cost_of_living_csv,
    load_cost_of_living_parquet, load_jobs_csv, load_jobs_parquet, load_jobs_parquet_dir,
};

// Statistics utilities
pub use utils::stats::{IqrFences, SummaryStats, iqr_fences, quantile};
