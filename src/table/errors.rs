//! table::errors: error types for joint-table validation and resolution.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias used whenever a [`JointTable`]
//! is checked for shape, resolved into numbers, or combined with
//! [`EngineOptions`]. Higher layers (moments, transform) wrap this type
//! instead of inventing their own shape errors.
//!
//! Key behaviors
//! -------------
//! - Group the "malformed table" family (too few rows, too few columns,
//!   ragged rows, marginal length mismatches) behind [`TableError::is_malformed`] so callers can hide
//!   derived panels without matching on every variant.
//! - Report strict-mode cell failures with their 0-based grid coordinates.
//! - Convert to `PyErr` (`ValueError`) at the Python boundary when the
//!   `python-bindings` feature is enabled.
//!
//! Conventions
//! -----------
//! - Row and column indices are 0-based and refer to the full grid,
//!   header row/column included, so `(0, 3)` is the third Y header.
//!
//! [`JointTable`]: crate::table::JointTable
//! [`EngineOptions`]: crate::table::EngineOptions

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

use crate::table::Variable;

pub type TableResult<T> = Result<T, TableError>;

/// TableError: validation and resolution failures for joint tables.
///
/// Variants
/// --------
/// - `TooFewRows { rows }`
///   The grid has fewer than 2 rows (a header row plus at least one X value).
/// - `TooFewColumns { columns }`
///   The header row has fewer than 2 cells.
/// - `RaggedRow { row, expected, actual }`
///   Row `row` has a different length than the header row.
/// - `LengthMismatch { variable, values, probabilities }`
///   A marginal built from parts has `values` points but `probabilities`
///   masses.
/// - `InvalidCellValue { row, column, reason }`
///   Strict mode: the cell is not a finite number, or a probability cell
///   is negative. Also raised by `JointDistribution::from_parts` for a
///   non-finite entry.
/// - `DuplicateAxisValue { variable, value }`
///   Strict mode only: the same header value appears twice on one axis.
/// - `InvalidTolerance(value)`
///   The independence tolerance is negative or non-finite.
#[derive(Debug, Clone, PartialEq)]
pub enum TableError {
    // ---- Shape ----
    TooFewRows { rows: usize },
    TooFewColumns { columns: usize },
    RaggedRow { row: usize, expected: usize, actual: usize },
    LengthMismatch { variable: Variable, values: usize, probabilities: usize },

    // ---- Cell content (strict mode) ----
    InvalidCellValue { row: usize, column: usize, reason: String },
    DuplicateAxisValue { variable: Variable, value: f64 },

    // ---- Options ----
    InvalidTolerance(f64),
}

impl TableError {
    /// True for the shape errors that make a table unusable regardless of
    /// the strictness setting.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            TableError::TooFewRows { .. }
                | TableError::TooFewColumns { .. }
                | TableError::RaggedRow { .. }
                | TableError::LengthMismatch { .. }
        )
    }
}

impl std::error::Error for TableError {}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::TooFewRows { rows } => {
                write!(f, "Malformed table: need at least 2 rows (header + one X value), got {rows}.")
            }
            TableError::TooFewColumns { columns } => {
                write!(
                    f,
                    "Malformed table: need at least 2 columns (header + one Y value), got {columns}."
                )
            }
            TableError::RaggedRow { row, expected, actual } => {
                write!(f, "Malformed table: row {row} has {actual} cells, expected {expected}.")
            }
            TableError::LengthMismatch { variable, values, probabilities } => {
                write!(f, "P({variable}) has {values} values but {probabilities} probabilities.")
            }
            TableError::InvalidCellValue { row, column, reason } => {
                write!(f, "Invalid cell value at ({row}, {column}): {reason}")
            }
            TableError::DuplicateAxisValue { variable, value } => {
                write!(f, "Value {value} appears more than once in the {variable} header.")
            }
            TableError::InvalidTolerance(value) => {
                write!(f, "Invalid independence tolerance: {value}. Must be finite and >= 0.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<TableError> for PyErr {
    fn from(err: TableError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
