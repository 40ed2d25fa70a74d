//! Job dataset loading and decoding.

use std::path::Path;

use arrow::record_batch::RecordBatch;

use crate::error::Result;
use crate::loader::decode::{date_cell, float_cell, string_cell};
use crate::models::{ExperienceLevel, JobRecord};
use crate::schema::{JOB_REQUIRED_COLUMNS, validate_numeric_column, validate_required_columns};

/// Load job postings from a CSV file with a header row
///
/// # Errors
/// Fails on unreadable input, a missing required column, or a non-numeric
/// salary column.
pub fn load_jobs_csv(path: &Path) -> Result<Vec<JobRecord>> {
    let batches = super::read_csv_batches(path)?;
    jobs_from_batches(&batches)
}

/// Load job postings from a single Parquet file
///
/// # Errors
/// Fails on unreadable input, a missing required column, or a non-numeric
/// salary column.
pub fn load_jobs_parquet(path: &Path) -> Result<Vec<JobRecord>> {
    let batches = super::read_parquet_batches(path)?;
    jobs_from_batches(&batches)
}

/// Load job postings from a directory of Parquet parts, in file-name order
///
/// # Errors
/// Fails on an unreadable directory or part, a missing required column, or a
/// non-numeric salary column.
pub fn load_jobs_parquet_dir(dir: &Path) -> Result<Vec<JobRecord>> {
    let batches = super::read_parquet_dir_batches(dir)?;
    jobs_from_batches(&batches)
}

/// Decode job postings from in-memory record batches.
///
/// The shape is validated against the first batch before any row is decoded;
/// per-cell anomalies after that degrade to `None` or a zero value rather
/// than failing the load. An empty batch list yields an empty dataset.
///
/// # Errors
/// Fails when a required column is missing or the salary column is
/// non-numeric.
pub fn jobs_from_batches(batches: &[RecordBatch]) -> Result<Vec<JobRecord>> {
    let Some(first) = batches.first() else {
        return Ok(Vec::new());
    };
    let schema = first.schema();
    validate_required_columns(&schema, &JOB_REQUIRED_COLUMNS, "job")?;
    validate_numeric_column(&schema, "salary_usd", "job")?;

    let mut records = Vec::with_capacity(batches.iter().map(RecordBatch::num_rows).sum());
    for batch in batches {
        for row in 0..batch.num_rows() {
            records.push(job_from_row(batch, row));
        }
    }
    log::debug!("Decoded {} job postings", records.len());
    Ok(records)
}

fn job_from_row(batch: &RecordBatch, row: usize) -> JobRecord {
    let salary_usd = float_cell(batch, "salary_usd", row).unwrap_or_else(|| {
        log::debug!("Row {row}: missing salary cell, treated as 0");
        0.0
    });
    JobRecord {
        job_id: string_cell(batch, "job_id", row).unwrap_or_default(),
        company_location: string_cell(batch, "company_location", row).unwrap_or_default(),
        salary_usd,
        years_experience: float_cell(batch, "years_experience", row).unwrap_or(0.0),
        experience_level: string_cell(batch, "experience_level", row)
            .and_then(|code| ExperienceLevel::from_code(&code)),
        remote_ratio: float_cell(batch, "remote_ratio", row).map_or(0, |v| v as u8),
        required_skills: string_cell(batch, "required_skills", row).unwrap_or_default(),
        posting_date: date_cell(batch, "posting_date", row),
        benefits_score: float_cell(batch, crate::schema::JOB_BENEFITS_COLUMN, row),
    }
}
