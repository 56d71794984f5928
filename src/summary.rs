//! summary: every statistic of a joint table in one pass.
//!
//! Purpose
//! -------
//! Produce the full set of derived panels an editor shows under a joint
//! table: per-variable marginal, CDF, E, E² and Var; E[XY], covariance,
//! correlation; and the independence verdict. The table is resolved once
//! and every statistic is read from the same snapshot.
//!
//! Key behaviors
//! -------------
//! - Table failures fail the whole summary, so no partially-wrong panel
//!   is ever produced.
//! - A degenerate correlation does not: it is stored as
//!   `Err(MomentError::DegenerateVariance { .. })` next to the other
//!   values, which remain meaningful.
//!
//! Downstream usage
//! ----------------
//! - The Python `JointStats` class is a thin wrapper over this type.
use log::debug;

use crate::{
    distributions::{Cdf, Marginal},
    moments::MomentResult,
    statistical_tests::IndependenceReport,
    table::{EngineOptions, JointDistribution, JointTable, TableResult, Variable},
};

/// VariableSummary: one-variable panels for X or Y.
///
/// Fields
/// ------
/// - `marginal`: [`Marginal`]
/// - `cdf`: [`Cdf`]
/// - `expectation`: `f64`
///   E[V].
/// - `second_moment`: `f64`
///   E[V²].
/// - `variance`: `f64`
///   E[V²] − E[V]², unclamped.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableSummary {
    pub marginal: Marginal,
    pub cdf: Cdf,
    pub expectation: f64,
    pub second_moment: f64,
    pub variance: f64,
}

impl VariableSummary {
    fn of(dist: &JointDistribution, variable: Variable) -> VariableSummary {
        let marginal = dist.marginal(variable);
        let cdf = Cdf::from_marginal(&marginal);
        let expectation = dist.expectation(variable, 1);
        let second_moment = dist.expectation(variable, 2);
        VariableSummary {
            marginal,
            cdf,
            expectation,
            second_moment,
            variance: second_moment - expectation * expectation,
        }
    }
}

/// JointSummary: all derived statistics of a joint table.
#[derive(Debug, Clone, PartialEq)]
pub struct JointSummary {
    pub x: VariableSummary,
    pub y: VariableSummary,
    pub total_mass: f64,
    pub expected_product_xy: f64,
    pub covariance: f64,
    pub correlation: MomentResult<f64>,
    pub independence: IndependenceReport,
}

impl JointSummary {
    /// Resolve `table` under `options` and compute every statistic.
    ///
    /// Errors
    /// ------
    /// - Any `TableError` from [`JointDistribution::from_table`].
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use joint_stats::summary::JointSummary;
    /// use joint_stats::table::{EngineOptions, JointTable};
    ///
    /// let table = JointTable::from_numeric(vec![
    ///     vec![0.0, -4.0, 0.0, 2.0, 3.0],
    ///     vec![-1.0, 0.22, 0.2, 0.15, 0.08],
    ///     vec![5.0, 0.15, 0.05, 0.05, 0.1],
    /// ]);
    /// let summary = JointSummary::compute(&table, &EngineOptions::default()).unwrap();
    /// assert!((summary.x.expectation - 1.1).abs() < 1e-12);
    /// assert!(!summary.independence.is_independent());
    /// ```
    pub fn compute(table: &JointTable, options: &EngineOptions) -> TableResult<JointSummary> {
        let dist = JointDistribution::from_table(table, options)?;
        let summary = JointSummary::from_distribution(&dist, options.independence_tolerance);
        debug!(
            "summary: E[X] = {}, E[Y] = {}, E[XY] = {}, independent = {}",
            summary.x.expectation,
            summary.y.expectation,
            summary.expected_product_xy,
            summary.independence.is_independent()
        );
        Ok(summary)
    }

    /// Summary of an already resolved distribution.
    pub fn from_distribution(dist: &JointDistribution, tolerance: f64) -> JointSummary {
        JointSummary {
            x: VariableSummary::of(dist, Variable::X),
            y: VariableSummary::of(dist, Variable::Y),
            total_mass: dist.total_mass(),
            expected_product_xy: dist.expected_product_xy(),
            covariance: dist.covariance(),
            correlation: dist.correlation_coefficient(),
            independence: dist.independence_report(tolerance),
        }
    }

    /// Per-variable panels for `variable`.
    pub fn variable(&self, variable: Variable) -> &VariableSummary {
        match variable {
            Variable::X => &self.x,
            Variable::Y => &self.y,
        }
    }
}
