//! table::validation: shape and content guards for joint tables.
//!
//! Purpose
//! -------
//! Centralize the checks every derived statistic relies on: a rectangular
//! grid with a header row, a header column and at least one value on each
//! axis, plus the strict-mode content rules.
//!
//! Key behaviors
//! -------------
//! - [`validate_shape`] enforces ≥ 2 rows, ≥ 2 columns and equal row
//!   lengths, in that order, independent of the strictness setting.
//! - [`resolve_cells`] turns every cell except the corner label into an
//!   `f64` under [`EngineOptions::strict`], reporting the first offending
//!   cell in row-major order.
//! - [`check_unique`] rejects repeated header values on one axis.
//!
//! Invariants & assumptions
//! ------------------------
//! - Strict mode additionally rejects negative probabilities; header
//!   values may be any finite number.
//! - Lenient mode never fails after the shape check.
use crate::table::{
    errors::{TableError, TableResult},
    joint_table::{JointTable, Variable},
    options::EngineOptions,
};

/// Validate the grid shape and return `(n, m)`, the number of X and Y
/// values.
///
/// Errors
/// ------
/// - `TableError::TooFewRows` when there is no row besides the header.
/// - `TableError::TooFewColumns` when the header row has no Y value.
/// - `TableError::RaggedRow` for the first row whose length differs from
///   the header row.
///
/// Examples
/// --------
/// ```rust
/// # use joint_stats::table::{JointTable, validation::validate_shape};
/// let table = JointTable::from_numeric(vec![vec![0.0, 1.0, 2.0], vec![0.0, 0.5, 0.5]]);
/// assert_eq!(validate_shape(&table), Ok((1, 2)));
/// ```
pub fn validate_shape(table: &JointTable) -> TableResult<(usize, usize)> {
    let rows = table.rows();
    if rows.len() < 2 {
        return Err(TableError::TooFewRows { rows: rows.len() });
    }

    let columns = rows[0].len();
    if columns < 2 {
        return Err(TableError::TooFewColumns { columns });
    }

    if let Some((row, cells)) = rows.iter().enumerate().find(|(_, cells)| cells.len() != columns) {
        return Err(TableError::RaggedRow { row, expected: columns, actual: cells.len() });
    }

    Ok((rows.len() - 1, columns - 1))
}

/// Resolve the numeric content of a shape-checked table.
///
/// Returns
/// -------
/// `TableResult<(Vec<f64>, Vec<f64>, Vec<f64>)>`
///   X values, Y values, and the interior probabilities in row-major
///   order (`n · m` entries).
///
/// Errors
/// ------
/// - `TableError::InvalidCellValue` in strict mode for the first cell
///   that is not a finite number, or a negative probability.
///
/// Panics
/// ------
/// - Never panics on a table accepted by [`validate_shape`]; calling it
///   on a ragged table is a programming error and may index out of range.
pub fn resolve_cells(
    table: &JointTable, options: &EngineOptions,
) -> TableResult<(Vec<f64>, Vec<f64>, Vec<f64>)> {
    let rows = table.rows();
    let strict = options.strict;

    let coerce = |row: usize, column: usize| -> TableResult<f64> {
        rows[row][column].coerce(strict).map_err(|reason| TableError::InvalidCellValue {
            row,
            column,
            reason,
        })
    };

    let y_values = (1..rows[0].len()).map(|j| coerce(0, j)).collect::<TableResult<Vec<f64>>>()?;

    let mut x_values = Vec::with_capacity(rows.len() - 1);
    let mut probabilities = Vec::with_capacity((rows.len() - 1) * y_values.len());
    for (i, row) in rows.iter().enumerate().skip(1) {
        x_values.push(coerce(i, 0)?);
        for j in 1..row.len() {
            let p = coerce(i, j)?;
            if strict && p < 0.0 {
                return Err(TableError::InvalidCellValue {
                    row: i,
                    column: j,
                    reason: format!("negative probability {p}"),
                });
            }
            probabilities.push(p);
        }
    }

    Ok((x_values, y_values, probabilities))
}

/// Reject repeated values on one axis.
///
/// Errors
/// ------
/// - `TableError::DuplicateAxisValue { variable, value }` for the first
///   value seen twice, in table order.
pub fn check_unique(values: &[f64], variable: Variable) -> TableResult<()> {
    for (k, &value) in values.iter().enumerate() {
        if values[..k].contains(&value) {
            return Err(TableError::DuplicateAxisValue { variable, value });
        }
    }
    Ok(())
}
