//! Per-cell accessors over Arrow record batches.
//!
//! Decoding is lenient: a cell that cannot be represented in the target type
//! degrades to `None`. Structural problems are caught by schema validation
//! before any of these run.

use arrow::array::{Array, Date32Array, Date64Array, Float32Array, Float64Array, Int32Array, Int64Array, StringArray};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use chrono::NaiveDate;

/// Read a string cell; missing column, null cell, or non-string type ⇒ `None`
pub(crate) fn string_cell(batch: &RecordBatch, column: &str, row: usize) -> Option<String> {
    let array = batch.column_by_name(column)?;
    if array.is_null(row) {
        return None;
    }
    array
        .as_any()
        .downcast_ref::<StringArray>()
        .map(|a| a.value(row).to_string())
}

/// Read a numeric cell as `f64`.
///
/// Integer and float columns convert directly; string columns are parsed,
/// mirroring coerce-to-missing semantics for tables where a numeric column
/// was inferred as text. Non-finite results degrade to `None`.
pub(crate) fn float_cell(batch: &RecordBatch, column: &str, row: usize) -> Option<f64> {
    let array = batch.column_by_name(column)?;
    if array.is_null(row) {
        return None;
    }
    let value = match array.data_type() {
        DataType::Float64 => array
            .as_any()
            .downcast_ref::<Float64Array>()
            .map(|a| a.value(row)),
        DataType::Float32 => array
            .as_any()
            .downcast_ref::<Float32Array>()
            .map(|a| f64::from(a.value(row))),
        DataType::Int64 => array
            .as_any()
            .downcast_ref::<Int64Array>()
            .map(|a| a.value(row) as f64),
        DataType::Int32 => array
            .as_any()
            .downcast_ref::<Int32Array>()
            .map(|a| f64::from(a.value(row))),
        DataType::Utf8 => array
            .as_any()
            .downcast_ref::<StringArray>()
            .and_then(|a| a.value(row).trim().parse::<f64>().ok()),
        _ => None,
    };
    value.filter(|v| v.is_finite())
}

/// Read a date cell from a native date column or an ISO `YYYY-MM-DD` string
pub(crate) fn date_cell(batch: &RecordBatch, column: &str, row: usize) -> Option<NaiveDate> {
    let array = batch.column_by_name(column)?;
    if array.is_null(row) {
        return None;
    }
    match array.data_type() {
        DataType::Date32 => array
            .as_any()
            .downcast_ref::<Date32Array>()
            .and_then(|a| a.value_as_date(row)),
        DataType::Date64 => array
            .as_any()
            .downcast_ref::<Date64Array>()
            .and_then(|a| a.value_as_date(row)),
        DataType::Utf8 => array
            .as_any()
            .downcast_ref::<StringArray>()
            .and_then(|a| NaiveDate::parse_from_str(a.value(row).trim(), "%Y-%m-%d").ok()),
        _ => None,
    }
}
