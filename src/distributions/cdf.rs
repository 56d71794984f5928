//! distributions::cdf: cumulative distribution functions as step tables.
//!
//! Purpose
//! -------
//! Describe F(v) = P(V ≤ v) of a marginal distribution as an ordered list
//! of intervals with the cumulative probability that holds on each.
//!
//! Key behaviors
//! -------------
//! - For n marginal values the CDF has n + 1 intervals:
//!   `(-∞, v₀]`, `(v₀, v₁]`, …, `(v₍ₙ₋₂₎, v₍ₙ₋₁₎]`, `(v₍ₙ₋₁₎, ∞)`.
//! - The cumulative sequence is `[0, c₀, …, c₍ₙ₋₁₎]`, where cₖ is the running
//!   sum of the marginal probabilities through index k.
//! - NaN probabilities contribute 0 to the running sum.
//!
//! Invariants & assumptions
//! ------------------------
//! - Intervals follow the marginal's table order. For an ascending axis
//!   they partition the real line; for an unsorted axis they do not, and
//!   the description changes when rows or columns are permuted.
//! - The last cumulative value equals the marginal's total mass.
use std::fmt;

use ndarray::{Array1, ArrayView1};

use crate::distributions::marginal::Marginal;
use crate::table::Variable;

/// CdfInterval: one step of the CDF.
///
/// Fields
/// ------
/// - `lower`: `Option<f64>`
///   Open lower endpoint; `None` means −∞.
/// - `upper`: `Option<f64>`
///   Closed upper endpoint; `None` means +∞ (and the interval is open
///   above).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CdfInterval {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

impl fmt::Display for CdfInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.lower, self.upper) {
            (None, Some(upper)) => write!(f, "(-∞, {upper}]"),
            (Some(lower), Some(upper)) => write!(f, "({lower}, {upper}]"),
            (Some(lower), None) => write!(f, "({lower}, ∞)"),
            (None, None) => write!(f, "(-∞, ∞)"),
        }
    }
}

/// Cdf: step-function description of a marginal's CDF.
#[derive(Debug, Clone, PartialEq)]
pub struct Cdf {
    variable: Variable,
    intervals: Vec<CdfInterval>,
    cumulative: Array1<f64>,
}

impl Cdf {
    /// Build the CDF of `marginal`.
    ///
    /// Parameters
    /// ----------
    /// - `marginal`: `&Marginal`
    ///   Values and probabilities in table order.
    ///
    /// Returns
    /// -------
    /// `Cdf`
    ///   `marginal.len() + 1` intervals and as many cumulative
    ///   probabilities, the first being 0.
    ///
    /// Notes
    /// -----
    /// - A NaN probability is read as 0 so one placeholder does not turn
    ///   every later step into NaN.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use joint_stats::distributions::{Cdf, marginal_of};
    /// use joint_stats::table::{JointTable, Variable};
    ///
    /// let table = JointTable::from_numeric(vec![
    ///     vec![0.0, 1.0, 2.0],
    ///     vec![0.0, 0.25, 0.25],
    ///     vec![1.0, 0.125, 0.375],
    /// ]);
    /// let cdf = Cdf::from_marginal(&marginal_of(&table, Variable::X).unwrap());
    /// assert_eq!(cdf.cumulative().to_vec(), vec![0.0, 0.5, 1.0]);
    /// assert_eq!(cdf.intervals()[1].to_string(), "(0, 1]");
    /// ```
    pub fn from_marginal(marginal: &Marginal) -> Cdf {
        let values = marginal.values();
        let n = values.len();

        let mut intervals = Vec::with_capacity(n + 1);
        intervals.push(CdfInterval { lower: None, upper: values.first().copied() });
        for k in 0..n {
            let upper = values.get(k + 1).copied();
            intervals.push(CdfInterval { lower: Some(values[k]), upper });
        }

        Cdf {
            variable: marginal.variable(),
            intervals,
            cumulative: accumulate(marginal.probabilities()),
        }
    }

    pub fn variable(&self) -> Variable {
        self.variable
    }

    pub fn intervals(&self) -> &[CdfInterval] {
        &self.intervals
    }

    pub fn cumulative(&self) -> ArrayView1<'_, f64> {
        self.cumulative.view()
    }

    /// Iterate over `(interval, F)` steps.
    pub fn steps(&self) -> impl Iterator<Item = (CdfInterval, f64)> + '_ {
        self.intervals.iter().copied().zip(self.cumulative.iter().copied())
    }

    /// Whether the cumulative sequence never decreases. Only negative
    /// probabilities (admitted in lenient mode) break this.
    pub fn is_non_decreasing(&self) -> bool {
        self.cumulative.windows(2).into_iter().all(|w| w[1] >= w[0])
    }
}

/// CDF of a marginal distribution.
pub fn cdf_of(marginal: &Marginal) -> Cdf {
    Cdf::from_marginal(marginal)
}

/// `[0, p₀, p₀ + p₁, …]`, treating NaN as 0.
fn accumulate(probabilities: ArrayView1<'_, f64>) -> Array1<f64> {
    let mut out = Vec::with_capacity(probabilities.len() + 1);
    let mut acc = 0.0;
    out.push(acc);
    for &p in probabilities {
        acc += if p.is_nan() { 0.0 } else { p };
        out.push(acc);
    }
    Array1::from(out)
}
