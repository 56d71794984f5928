//! moments::engine: expectations, variances and correlation.
//!
//! Purpose
//! -------
//! Compute the moment-based statistics of a discrete pair (X, Y) from a
//! resolved joint distribution: raw moments E[Vᵏ], variance, standard
//! deviation, E[XY], covariance and Pearson's correlation coefficient.
//!
//! Key behaviors
//! -------------
//! - Single-variable moments use the marginal of that variable:
//!   E[Vᵏ] = Σᵢ pᵢ · vᵢᵏ.
//! - E[XY] = Σᵢⱼ xᵢ · yⱼ · pᵢⱼ is taken over the submatrix itself, so it
//!   does not depend on the marginals being consistent.
//! - Var[V] = E[V²] − E[V]² is returned raw, including `-0.0` or tiny
//!   negatives from cancellation.
//! - ρ = Cov(X, Y) / (σₓ · σᵧ) fails with `DegenerateVariance` when either
//!   raw variance is ≤ 0.
//!
//! Conventions
//! -----------
//! - Methods on [`JointDistribution`] return plain `f64` where nothing can
//!   fail; the table-level free functions resolve with default (strict)
//!   options and return [`MomentResult`].
use crate::{
    moments::errors::{MomentError, MomentResult},
    table::{EngineOptions, JointDistribution, JointTable, Variable},
};

/// Relative slack under which a negative variance is treated as
/// cancellation noise by [`JointDistribution::standard_deviation`].
pub const VARIANCE_CANCELLATION_EPS: f64 = 1e-12;

impl JointDistribution {
    /// Raw moment E[Vᵖ] of `variable` (`power = 1` is the expectation,
    /// `power = 2` the second moment).
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use joint_stats::table::{EngineOptions, JointDistribution, JointTable, Variable};
    ///
    /// let table = JointTable::from_numeric(vec![
    ///     vec![0.0, 1.0, 2.0],
    ///     vec![0.0, 0.25, 0.25],
    ///     vec![4.0, 0.25, 0.25],
    /// ]);
    /// let dist = JointDistribution::from_table(&table, &EngineOptions::default()).unwrap();
    /// assert_eq!(dist.expectation(Variable::X, 1), 2.0);
    /// assert_eq!(dist.expectation(Variable::Y, 2), 2.5);
    /// ```
    pub fn expectation(&self, variable: Variable, power: i32) -> f64 {
        self.marginal(variable).iter().map(|(value, p)| p * value.powi(power)).sum()
    }

    /// Var[V] = E[V²] − E[V]², unclamped.
    pub fn variance(&self, variable: Variable) -> f64 {
        let mean = self.expectation(variable, 1);
        self.expectation(variable, 2) - mean * mean
    }

    /// Standard deviation of `variable`.
    ///
    /// Returns
    /// -------
    /// `MomentResult<f64>`
    ///   - `Ok(sqrt(Var[V]))` for a positive variance.
    ///   - `Ok(0.0)` when the variance is zero or a negative no larger than
    ///     [`VARIANCE_CANCELLATION_EPS`] · max(1, E[V²]).
    ///
    /// Errors
    /// ------
    /// - `MomentError::DegenerateVariance` for a variance more negative
    ///   than that bound (only reachable with negative probabilities).
    pub fn standard_deviation(&self, variable: Variable) -> MomentResult<f64> {
        let variance = self.variance(variable);
        if variance >= 0.0 {
            return Ok(variance.sqrt());
        }
        let slack = VARIANCE_CANCELLATION_EPS * self.expectation(variable, 2).abs().max(1.0);
        if variance >= -slack {
            Ok(0.0)
        } else {
            Err(MomentError::DegenerateVariance { variable, variance })
        }
    }

    /// E[XY] = Σᵢⱼ xᵢ · yⱼ · P(X = xᵢ, Y = yⱼ).
    pub fn expected_product_xy(&self) -> f64 {
        let x = self.x_values();
        let y = self.y_values();
        self.probabilities()
            .indexed_iter()
            .map(|((i, j), &p)| x[i] * y[j] * p)
            .sum()
    }

    /// Cov(X, Y) = E[XY] − E[X] · E[Y].
    pub fn covariance(&self) -> f64 {
        let mean_x = self.expectation(Variable::X, 1);
        let mean_y = self.expectation(Variable::Y, 1);
        self.expected_product_xy() - mean_x * mean_y
    }

    /// Pearson correlation coefficient ρ(X, Y).
    ///
    /// Returns
    /// -------
    /// `MomentResult<f64>`
    ///   `(E[XY] − E[X]·E[Y]) / (sqrt(Var[X]) · sqrt(Var[Y]))`.
    ///
    /// Errors
    /// ------
    /// - `MomentError::DegenerateVariance { variable, variance }` when
    ///   Var[X] (checked first) or Var[Y] is ≤ 0. A constant variable has
    ///   no correlation; the raw variance is reported unchanged.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use joint_stats::moments::MomentError;
    /// use joint_stats::table::{EngineOptions, JointDistribution, JointTable, Variable};
    ///
    /// // X is constant.
    /// let table = JointTable::from_numeric(vec![vec![0.0, 1.0, 2.0], vec![3.0, 0.5, 0.5]]);
    /// let dist = JointDistribution::from_table(&table, &EngineOptions::default()).unwrap();
    /// assert!(matches!(
    ///     dist.correlation_coefficient(),
    ///     Err(MomentError::DegenerateVariance { variable: Variable::X, .. })
    /// ));
    /// ```
    pub fn correlation_coefficient(&self) -> MomentResult<f64> {
        let mut sigma = [0.0; 2];
        for (slot, variable) in sigma.iter_mut().zip([Variable::X, Variable::Y]) {
            let variance = self.variance(variable);
            if variance <= 0.0 {
                return Err(MomentError::DegenerateVariance { variable, variance });
            }
            *slot = variance.sqrt();
        }
        Ok(self.covariance() / (sigma[0] * sigma[1]))
    }
}

fn resolve(table: &JointTable) -> MomentResult<JointDistribution> {
    Ok(JointDistribution::from_table(table, &EngineOptions::default())?)
}

/// E[Vᵖ] for a joint table (default options).
pub fn expectation(table: &JointTable, variable: Variable, power: i32) -> MomentResult<f64> {
    Ok(resolve(table)?.expectation(variable, power))
}

/// Var[V] for a joint table (default options), unclamped.
pub fn variance(table: &JointTable, variable: Variable) -> MomentResult<f64> {
    Ok(resolve(table)?.variance(variable))
}

/// Standard deviation of V for a joint table (default options).
pub fn standard_deviation(table: &JointTable, variable: Variable) -> MomentResult<f64> {
    resolve(table)?.standard_deviation(variable)
}

/// E[XY] for a joint table (default options).
pub fn expected_product_xy(table: &JointTable) -> MomentResult<f64> {
    Ok(resolve(table)?.expected_product_xy())
}

/// Cov(X, Y) for a joint table (default options).
pub fn covariance(table: &JointTable) -> MomentResult<f64> {
    Ok(resolve(table)?.covariance())
}

/// ρ(X, Y) for a joint table (default options).
pub fn correlation_coefficient(table: &JointTable) -> MomentResult<f64> {
    resolve(table)?.correlation_coefficient()
}
