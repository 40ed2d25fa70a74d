//! Error handling for the ranking pipeline.

use std::{fmt, io};

use arrow::error::ArrowError;
use parquet::errors::ParquetError;

/// Specialized error type for the ranking pipeline
#[derive(Debug)]
pub enum PipelineError {
    /// Error opening or reading a dataset file
    IoError(io::Error),
    /// Error decoding CSV or Arrow data
    ArrowError(ArrowError),
    /// Error processing Parquet data
    ParquetError(ParquetError),
    /// Error with dataset shape: a required column is missing or has the wrong type
    SchemaError(String),
    /// Any other wrapped failure
    Other(anyhow::Error),
}

impl PipelineError {
    /// Error for a required column absent from an input table
    #[must_use]
    pub fn missing_column(table: &str, column: &str) -> Self {
        Self::SchemaError(format!(
            "required column '{column}' missing from {table} dataset"
        ))
    }
}

impl From<io::Error> for PipelineError {
    fn from(error: io::Error) -> Self {
        Self::IoError(error)
    }
}

impl From<ArrowError> for PipelineError {
    fn from(error: ArrowError) -> Self {
        Self::ArrowError(error)
    }
}

impl From<ParquetError> for PipelineError {
    fn from(error: ParquetError) -> Self {
        Self::ParquetError(error)
    }
}

impl From<anyhow::Error> for PipelineError {
    fn from(error: anyhow::Error) -> Self {
        Self::Other(error)
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "IO error: {e}"),
            Self::ArrowError(e) => write!(f, "Arrow error: {e}"),
            Self::ParquetError(e) => write!(f, "Parquet error: {e}"),
            Self::SchemaError(msg) => write!(f, "Schema error: {msg}"),
            Self::Other(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for PipelineError {}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;
