//! distributions::marginal: marginal distributions of X and Y.
//!
//! Purpose
//! -------
//! Derive P(X = xᵢ) and P(Y = yⱼ) from the probability submatrix of a
//! joint table: row sums for X, column sums for Y.
//!
//! Key behaviors
//! -------------
//! - [`Marginal::from_joint`] reads a resolved [`JointDistribution`].
//! - [`marginal_of`] is the table-level entry point with default (strict)
//!   options.
//! - Values and probabilities are parallel `Array1<f64>` in table order.
//!
//! Invariants & assumptions
//! ------------------------
//! - `values.len() == probabilities.len()`, equal to n for X and m for Y.
//! - The probabilities sum to the table's total mass for both variables.
use ndarray::{Array1, ArrayView1, Axis};

use crate::table::{EngineOptions, JointDistribution, JointTable, TableError, TableResult, Variable};

/// Marginal: the distribution of one variable of the pair.
///
/// Fields
/// ------
/// - `variable`: which axis this marginal describes.
/// - `values`: header values in table order.
/// - `probabilities`: summed joint probabilities, aligned with `values`.
#[derive(Debug, Clone, PartialEq)]
pub struct Marginal {
    variable: Variable,
    values: Array1<f64>,
    probabilities: Array1<f64>,
}

impl Marginal {
    /// Compute the marginal of `variable` from a resolved joint
    /// distribution.
    ///
    /// ```rust
    /// use joint_stats::distributions::Marginal;
    /// use joint_stats::table::{EngineOptions, JointDistribution, JointTable, Variable};
    ///
    /// let table = JointTable::from_numeric(vec![
    ///     vec![0.0, 1.0, 2.0],
    ///     vec![0.0, 0.25, 0.25],
    ///     vec![1.0, 0.125, 0.375],
    /// ]);
    /// let dist = JointDistribution::from_table(&table, &EngineOptions::default()).unwrap();
    /// let y = Marginal::from_joint(&dist, Variable::Y);
    /// assert_eq!(y.probabilities().to_vec(), vec![0.375, 0.625]);
    /// ```
    pub fn from_joint(dist: &JointDistribution, variable: Variable) -> Marginal {
        let axis = match variable {
            // X varies along rows, so summing over columns (axis 1) yields row sums.
            Variable::X => Axis(1),
            Variable::Y => Axis(0),
        };
        Marginal {
            variable,
            values: dist.values(variable).to_owned(),
            probabilities: dist.probabilities().sum_axis(axis),
        }
    }

    /// Build a marginal from explicit parallel sequences.
    ///
    /// Errors
    /// ------
    /// - `TableError::LengthMismatch` when the lengths differ.
    /// - `TooFewRows` (X) / `TooFewColumns` (Y) when the sequences are empty.
    pub fn new(
        variable: Variable, values: Array1<f64>, probabilities: Array1<f64>,
    ) -> TableResult<Marginal> {
        if values.len() != probabilities.len() {
            return Err(TableError::LengthMismatch {
                variable,
                values: values.len(),
                probabilities: probabilities.len(),
            });
        }
        if values.is_empty() {
            return Err(match variable {
                Variable::X => TableError::TooFewRows { rows: 1 },
                Variable::Y => TableError::TooFewColumns { columns: 1 },
            });
        }
        Ok(Marginal { variable, values, probabilities })
    }

    pub fn variable(&self) -> Variable {
        self.variable
    }

    pub fn values(&self) -> ArrayView1<'_, f64> {
        self.values.view()
    }

    pub fn probabilities(&self) -> ArrayView1<'_, f64> {
        self.probabilities.view()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum of the marginal probabilities.
    pub fn total_mass(&self) -> f64 {
        self.probabilities.sum()
    }

    /// Iterate over `(value, probability)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values.iter().copied().zip(self.probabilities.iter().copied())
    }
}

impl JointDistribution {
    /// Marginal distribution of `variable`.
    pub fn marginal(&self, variable: Variable) -> Marginal {
        Marginal::from_joint(self, variable)
    }
}

/// Marginal distribution of `variable` for a joint table, using the
/// default (strict) [`EngineOptions`].
///
/// Errors
/// ------
/// - Any [`TableError`] raised while resolving the table; no partial
///   result is returned.
pub fn marginal_of(table: &JointTable, variable: Variable) -> TableResult<Marginal> {
    let dist = JointDistribution::from_table(table, &EngineOptions::default())?;
    Ok(dist.marginal(variable))
}
