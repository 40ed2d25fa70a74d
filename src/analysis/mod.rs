//! Dataset-quality and market-exploration analyses around the core pipeline.
//!
//! Everything here is a pure function over the loaded job records, producing
//! plain rows for an external table or chart renderer. None of it feeds back
//! into the ranking pipeline.

pub mod correlation;
pub mod market;
pub mod quality;
pub mod trends;

pub use correlation::{CorrelationMatrix, correlation_matrix, pearson};
pub use market::{
    CountrySalaryStats, ExperienceCount, RemoteWorkStats, SkillCount, experience_distribution,
    remote_work_stats, top_countries_by_salary, top_skills,
};
pub use quality::{
    FieldMissingCount, missing_value_profile, salary_outlier_count, salary_summary,
};
pub use trends::{MonthlyTrend, monthly_trends};
