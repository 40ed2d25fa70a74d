//! Dataset acquisition: CSV and Parquet files into typed records.
//!
//! The loaders own file paths and schema coercion so the pipeline itself
//! never touches I/O. Each dataset can come from a CSV file with a header
//! row, a single Parquet file, or a directory of Parquet parts read in
//! parallel and concatenated in file-name order. The decoding functions over
//! in-memory record batches are public too, for callers that already hold
//! Arrow data.

mod decode;

pub mod cost_of_living;
pub mod jobs;

pub use cost_of_living::{
    cost_of_living_from_batches, load_cost_of_living_csv, load_cost_of_living_parquet,
};
pub use jobs::{load_jobs_csv, load_jobs_parquet, load_jobs_parquet_dir, jobs_from_batches};

use std::fs::File;
use std::io::Seek;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use itertools::Itertools;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use rayon::prelude::*;

use crate::error::{PipelineError, Result};
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Number of rows sampled when inferring a CSV schema
const CSV_INFERENCE_ROWS: usize = 1000;

/// Read a CSV file with a header row into record batches, inferring the schema
pub(crate) fn read_csv_batches(path: &Path) -> Result<Vec<RecordBatch>> {
    let start = std::time::Instant::now();
    log_operation_start("Reading CSV file", path);

    let mut file = File::open(path).map_err(|e| {
        PipelineError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Failed to open file {}: {}", path.display(), e),
        ))
    })?;
    let format = Format::default().with_header(true);
    let (schema, _) = format.infer_schema(&mut file, Some(CSV_INFERENCE_ROWS))?;
    file.rewind()?;

    let reader = ReaderBuilder::new(Arc::new(schema))
        .with_format(format)
        .build(file)?;
    let batches = reader.collect::<std::result::Result<Vec<_>, ArrowError>>()?;

    let rows = batches.iter().map(RecordBatch::num_rows).sum();
    log_operation_complete("read", path, rows, Some(start.elapsed()));
    Ok(batches)
}

/// Read a single Parquet file into record batches
pub(crate) fn read_parquet_batches(path: &Path) -> Result<Vec<RecordBatch>> {
    let start = std::time::Instant::now();
    log_operation_start("Reading parquet file", path);

    let file = File::open(path).map_err(|e| {
        PipelineError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Failed to open file {}: {}", path.display(), e),
        ))
    })?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;
    let batches = reader.collect::<std::result::Result<Vec<_>, ArrowError>>()?;

    let rows = batches.iter().map(RecordBatch::num_rows).sum();
    log_operation_complete("read", path, rows, Some(start.elapsed()));
    Ok(batches)
}

/// Find all Parquet files in a directory, in file-name order.
///
/// The order is part of the contract: concatenating parts in file-name order
/// keeps the row order of the loaded dataset deterministic.
pub(crate) fn find_parquet_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() || !dir.is_dir() {
        return Err(anyhow::anyhow!("Directory does not exist: {}", dir.display()).into());
    }

    let files = std::fs::read_dir(dir)?
        .filter_map_ok(|entry| {
            let path = entry.path();
            (path.is_file() && path.extension().is_some_and(|ext| ext == "parquet"))
                .then_some(path)
        })
        .collect::<std::result::Result<Vec<_>, _>>()?
        .into_iter()
        .sorted()
        .collect_vec();

    if files.is_empty() {
        log::warn!("No Parquet files found in {}", dir.display());
    }
    Ok(files)
}

/// Load every Parquet part in `dir` in parallel, concatenated in file-name order
pub(crate) fn read_parquet_dir_batches(dir: &Path) -> Result<Vec<RecordBatch>> {
    let files = find_parquet_files(dir)?;

    let per_file: Vec<Result<Vec<RecordBatch>>> =
        files.par_iter().map(|path| read_parquet_batches(path)).collect();

    let mut combined = Vec::new();
    for result in per_file {
        combined.extend(result?);
    }
    log::info!(
        "Loaded {} batches from {} Parquet files in {}",
        combined.len(),
        files.len(),
        dir.display()
    );
    Ok(combined)
}
