//! Dataset shape validation.
//!
//! Structural problems — a required column missing, or the salary column
//! carrying a non-numeric type — are fatal and surface here before any row
//! is decoded. Per-cell anomalies are handled leniently by the loader.

use arrow::datatypes::Schema;

use crate::error::{PipelineError, Result};

/// Columns the job dataset must carry
pub const JOB_REQUIRED_COLUMNS: [&str; 8] = [
    "job_id",
    "company_location",
    "salary_usd",
    "years_experience",
    "experience_level",
    "remote_ratio",
    "required_skills",
    "posting_date",
];

/// Optional job column, consumed only by the correlation analysis
pub const JOB_BENEFITS_COLUMN: &str = "benefits_score";

/// Columns the cost-of-living dataset must carry
pub const COST_OF_LIVING_REQUIRED_COLUMNS: [&str; 4] = [
    "Country",
    "Cost of Living Index",
    "Cost of Living Plus Rent Index",
    "Local Purchasing Power Index",
];

/// Validate that `schema` carries every column in `required`
///
/// # Errors
/// Returns a `SchemaError` naming the first missing column.
pub fn validate_required_columns(
    schema: &Schema,
    required: &[&str],
    table: &str,
) -> Result<()> {
    for column in required {
        if schema.field_with_name(column).is_err() {
            return Err(PipelineError::missing_column(table, column));
        }
    }
    Ok(())
}

/// Validate that `column` holds a numeric Arrow type
///
/// # Errors
/// Returns a `SchemaError` if the column is missing or non-numeric.
pub fn validate_numeric_column(schema: &Schema, column: &str, table: &str) -> Result<()> {
    let field = schema
        .field_with_name(column)
        .map_err(|_| PipelineError::missing_column(table, column))?;
    if field.data_type().is_numeric() {
        Ok(())
    } else {
        Err(PipelineError::SchemaError(format!(
            "column '{column}' in {table} dataset must be numeric, found {:?}",
            field.data_type()
        )))
    }
}
