//! Cost-of-living dataset loading and decoding.

use std::path::Path;

use arrow::record_batch::RecordBatch;

use crate::error::Result;
use crate::loader::decode::{float_cell, string_cell};
use crate::models::CostOfLivingRecord;
use crate::schema::{COST_OF_LIVING_REQUIRED_COLUMNS, validate_required_columns};

/// Load cost-of-living rows from a CSV file with a header row
///
/// # Errors
/// Fails on unreadable input or a missing required column.
pub fn load_cost_of_living_csv(path: &Path) -> Result<Vec<CostOfLivingRecord>> {
    let batches = super::read_csv_batches(path)?;
    cost_of_living_from_batches(&batches)
}

/// Load cost-of-living rows from a single Parquet file
///
/// # Errors
/// Fails on unreadable input or a missing required column.
pub fn load_cost_of_living_parquet(path: &Path) -> Result<Vec<CostOfLivingRecord>> {
    let batches = super::read_parquet_batches(path)?;
    cost_of_living_from_batches(&batches)
}

/// Decode cost-of-living rows from in-memory record batches.
///
/// Index cells that are absent or fail numeric coercion load as `None`;
/// only a missing column is fatal. Row order follows the input batches,
/// which matters because the join picks the first occurrence of a
/// duplicated country.
///
/// # Errors
/// Fails when a required column is missing.
pub fn cost_of_living_from_batches(batches: &[RecordBatch]) -> Result<Vec<CostOfLivingRecord>> {
    let Some(first) = batches.first() else {
        return Ok(Vec::new());
    };
    validate_required_columns(&first.schema(), &COST_OF_LIVING_REQUIRED_COLUMNS, "cost-of-living")?;

    let mut records = Vec::with_capacity(batches.iter().map(RecordBatch::num_rows).sum());
    for batch in batches {
        for row in 0..batch.num_rows() {
            records.push(CostOfLivingRecord {
                country: string_cell(batch, "Country", row).unwrap_or_default(),
                cost_of_living_index: float_cell(batch, "Cost of Living Index", row),
                cost_of_living_plus_rent_index: float_cell(
                    batch,
                    "Cost of Living Plus Rent Index",
                    row,
                ),
                local_purchasing_power_index: float_cell(
                    batch,
                    "Local Purchasing Power Index",
                    row,
                ),
            });
        }
    }
    log::debug!("Decoded {} cost-of-living rows", records.len());
    Ok(records)
}
