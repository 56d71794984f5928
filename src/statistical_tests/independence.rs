//! statistical_tests::independence: cell-wise independence check.
//!
//! Purpose
//! -------
//! Decide whether X and Y are independent under the given joint table,
//! i.e. whether P(X = xᵢ, Y = yⱼ) = P(X = xᵢ) · P(Y = yⱼ) for every cell,
//! and if not, report the first cell where the identity fails.
//!
//! Key behaviors
//! -------------
//! - Scan order is row-major in table order (rows outer, columns inner);
//!   the first mismatch short-circuits.
//! - A cell matches when |pᵢⱼ − P(xᵢ)·P(yⱼ)| ≤ tolerance. With the default
//!   tolerance of 0 this is exact floating-point equality.
//!
//! Invariants & assumptions
//! ------------------------
//! - The marginals are taken from the same snapshot as the cells, so a
//!   table built as an exact product of binary-representable marginals is
//!   reported independent.
//! - Decimal probabilities (0.1, 0.35, …) may differ from their marginal
//!   product by rounding noise; callers wanting to ignore that pass a
//!   tolerance through [`EngineOptions`].
//!
//! Testing notes
//! -------------
//! - Unit tests cover an exact product table, a single perturbed cell,
//!   scan order, and the tolerance knob.
use log::debug;

use crate::table::{EngineOptions, JointDistribution, JointTable, TableResult, Variable};

/// IndependenceReport: outcome of the cell-wise independence check.
///
/// Variants
/// --------
/// - `Independent`
///   Every cell matches the product of its marginals.
/// - `Dependent { .. }`
///   The first mismatching cell, with its submatrix coordinates
///   (`row`, `column`, 0-based), header values, joint probability and
///   marginal product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndependenceReport {
    Independent,
    Dependent {
        row: usize,
        column: usize,
        x_value: f64,
        y_value: f64,
        joint_probability: f64,
        product_of_marginals: f64,
    },
}

impl IndependenceReport {
    pub fn is_independent(&self) -> bool {
        matches!(self, IndependenceReport::Independent)
    }
}

impl JointDistribution {
    /// Run the independence check with the given tolerance.
    ///
    /// Parameters
    /// ----------
    /// - `tolerance`: `f64`
    ///   Largest accepted |pᵢⱼ − P(xᵢ)·P(yⱼ)|. Use 0 for exact comparison.
    ///   Callers should validate it through [`EngineOptions::new`]; a NaN
    ///   tolerance makes every cell a mismatch.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use joint_stats::statistical_tests::IndependenceReport;
    /// use joint_stats::table::{EngineOptions, JointDistribution, JointTable};
    ///
    /// let table = JointTable::from_numeric(vec![
    ///     vec![0.0, 1.0, 2.0],
    ///     vec![0.0, 0.125, 0.125],
    ///     vec![1.0, 0.375, 0.375],
    /// ]);
    /// let dist = JointDistribution::from_table(&table, &EngineOptions::default()).unwrap();
    /// assert_eq!(dist.independence_report(0.0), IndependenceReport::Independent);
    /// ```
    pub fn independence_report(&self, tolerance: f64) -> IndependenceReport {
        let px = self.marginal(Variable::X);
        let py = self.marginal(Variable::Y);
        let (px, py) = (px.probabilities(), py.probabilities());
        let (x_values, y_values) = (self.x_values(), self.y_values());

        for ((i, j), &joint) in self.probabilities().indexed_iter() {
            let product = px[i] * py[j];
            // `!(d <= tol)` so a NaN difference counts as a mismatch.
            if !((joint - product).abs() <= tolerance) {
                debug!("independence fails at cell ({i}, {j}): {joint} vs {product}");
                return IndependenceReport::Dependent {
                    row: i,
                    column: j,
                    x_value: x_values[i],
                    y_value: y_values[j],
                    joint_probability: joint,
                    product_of_marginals: product,
                };
            }
        }

        IndependenceReport::Independent
    }
}

/// Independence report for a joint table with default options (strict,
/// exact comparison).
pub fn independence_report(table: &JointTable) -> TableResult<IndependenceReport> {
    independence_report_with(table, &EngineOptions::default())
}

/// Independence report for a joint table under explicit options; the
/// tolerance is `options.independence_tolerance`.
pub fn independence_report_with(
    table: &JointTable, options: &EngineOptions,
) -> TableResult<IndependenceReport> {
    let dist = JointDistribution::from_table(table, options)?;
    Ok(dist.independence_report(options.independence_tolerance))
}
