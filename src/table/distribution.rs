//! table::distribution: resolved numeric snapshot of a joint table.
//!
//! Purpose
//! -------
//! Hold the numbers every statistic is computed from: the X header values,
//! the Y header values and the n×m probability submatrix (the grid with
//! its header row and header column stripped). Resolving once and sharing
//! the snapshot keeps the marginal, moment, independence and transform
//! code free of cell parsing.
//!
//! Key behaviors
//! -------------
//! - [`JointDistribution::from_table`] validates the shape, resolves the
//!   cells under [`EngineOptions`], and in strict mode rejects duplicate
//!   header values.
//! - The snapshot owns its data; the source [`JointTable`] is only
//!   borrowed and never modified.
//!
//! Invariants & assumptions
//! ------------------------
//! - `x_values.len() == probabilities.nrows() >= 1` and
//!   `y_values.len() == probabilities.ncols() >= 1`.
//! - All entries are finite, whichever constructor built the snapshot.
//!   Strict [`JointDistribution::from_table`] also guarantees non-negative
//!   probabilities and unique header values; lenient mode and
//!   [`JointDistribution::from_parts`] do not.
//! - Total mass is not required to be 1; see [`JointDistribution::total_mass`].
use log::debug;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use crate::table::{
    errors::{TableError, TableResult},
    joint_table::{JointTable, Variable},
    options::EngineOptions,
    validation::{check_unique, resolve_cells, validate_shape},
};

/// JointDistribution: header values plus probability submatrix.
///
/// Fields
/// ------
/// - `x_values`: `Array1<f64>`
///   Values of X in table order (grid column 0, rows 1..n).
/// - `y_values`: `Array1<f64>`
///   Values of Y in table order (grid row 0, columns 1..m).
/// - `probabilities`: `Array2<f64>`
///   `probabilities[[i, j]] = P(X = xᵢ, Y = yⱼ)`.
///
/// Notes
/// -----
/// - Marginals, moments, the independence report and linear transforms
///   are implemented as methods on this type in their own modules.
#[derive(Debug, Clone, PartialEq)]
pub struct JointDistribution {
    x_values: Array1<f64>,
    y_values: Array1<f64>,
    probabilities: Array2<f64>,
}

impl JointDistribution {
    /// Validate and resolve a joint table.
    ///
    /// Parameters
    /// ----------
    /// - `table`: `&JointTable`
    ///   Grid as supplied by the editor. Borrowed, never mutated.
    /// - `options`: `&EngineOptions`
    ///   Cell policy; see [`EngineOptions::strict`].
    ///
    /// Returns
    /// -------
    /// `TableResult<JointDistribution>`
    ///   The resolved snapshot, or the first validation failure.
    ///
    /// Errors
    /// ------
    /// - Shape errors (`TooFewRows`, `TooFewColumns`, `RaggedRow`) in both
    ///   modes.
    /// - `InvalidCellValue` and `DuplicateAxisValue` in strict mode.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use joint_stats::table::{EngineOptions, JointDistribution, JointTable};
    ///
    /// let table = JointTable::from_numeric(vec![
    ///     vec![0.0, -4.0, 0.0, 2.0, 3.0],
    ///     vec![-1.0, 0.22, 0.2, 0.15, 0.08],
    ///     vec![5.0, 0.15, 0.05, 0.05, 0.1],
    /// ]);
    /// let dist = JointDistribution::from_table(&table, &EngineOptions::default()).unwrap();
    /// assert_eq!(dist.shape(), (2, 4));
    /// assert!((dist.total_mass() - 1.0).abs() < 1e-12);
    /// ```
    pub fn from_table(table: &JointTable, options: &EngineOptions) -> TableResult<Self> {
        let (n, m) = validate_shape(table)?;
        let (x_values, y_values, probabilities) = resolve_cells(table, options)?;

        if options.strict {
            check_unique(&x_values, Variable::X)?;
            check_unique(&y_values, Variable::Y)?;
        }

        let probabilities = Array2::from_shape_fn((n, m), |(i, j)| probabilities[i * m + j]);

        debug!("resolved joint table: {n} X values x {m} Y values (strict = {})", options.strict);

        Ok(JointDistribution {
            x_values: Array1::from(x_values),
            y_values: Array1::from(y_values),
            probabilities,
        })
    }

    /// Build a snapshot directly from resolved parts.
    ///
    /// Errors
    /// ------
    /// - `TooFewRows` / `TooFewColumns` when an axis is empty.
    /// - `RaggedRow` when the matrix shape disagrees with the header
    ///   lengths (reported against grid row 0).
    /// - `InvalidCellValue` for a non-finite header value or probability,
    ///   located by its grid position.
    ///
    /// Notes
    /// -----
    /// - Negative probabilities and repeated header values are accepted, as
    ///   in lenient mode.
    pub fn from_parts(
        x_values: Array1<f64>, y_values: Array1<f64>, probabilities: Array2<f64>,
    ) -> TableResult<Self> {
        if x_values.is_empty() {
            return Err(TableError::TooFewRows { rows: 1 });
        }
        if y_values.is_empty() {
            return Err(TableError::TooFewColumns { columns: 1 });
        }
        if probabilities.dim() != (x_values.len(), y_values.len()) {
            return Err(TableError::RaggedRow {
                row: 0,
                expected: x_values.len() * y_values.len(),
                actual: probabilities.len(),
            });
        }

        let non_finite = |row: usize, column: usize, value: f64| TableError::InvalidCellValue {
            row,
            column,
            reason: format!("non-finite value {value}"),
        };
        if let Some((j, &y)) = y_values.indexed_iter().find(|(_, y)| !y.is_finite()) {
            return Err(non_finite(0, j + 1, y));
        }
        for (i, &x) in x_values.indexed_iter() {
            if !x.is_finite() {
                return Err(non_finite(i + 1, 0, x));
            }
            let row = probabilities.row(i);
            if let Some((j, &p)) = row.indexed_iter().find(|(_, p)| !p.is_finite()) {
                return Err(non_finite(i + 1, j + 1, p));
            }
        }

        Ok(JointDistribution { x_values, y_values, probabilities })
    }

    /// `(n, m)`: number of X values and number of Y values.
    pub fn shape(&self) -> (usize, usize) {
        self.probabilities.dim()
    }

    pub fn x_values(&self) -> ArrayView1<'_, f64> {
        self.x_values.view()
    }

    pub fn y_values(&self) -> ArrayView1<'_, f64> {
        self.y_values.view()
    }

    /// Header values of `variable`, in table order.
    pub fn values(&self, variable: Variable) -> ArrayView1<'_, f64> {
        match variable {
            Variable::X => self.x_values.view(),
            Variable::Y => self.y_values.view(),
        }
    }

    /// The probability submatrix.
    pub fn probabilities(&self) -> ArrayView2<'_, f64> {
        self.probabilities.view()
    }

    /// Sum of all joint probabilities; 1 for a valid table.
    pub fn total_mass(&self) -> f64 {
        self.probabilities.sum()
    }
}
