//! joint_stats: descriptive statistics of discrete bivariate distributions.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the statistics engine to Python via the `_joint_stats` extension
//! module. Given a joint probability table of a discrete pair (X, Y), the
//! engine derives marginals, CDFs, moments, E[XY], covariance, correlation,
//! an independence verdict, and the moments of a linear transform
//! Z = a·V + b.
//!
//! Key behaviors
//! -------------
//! - [`table`]: the raw grid ([`table::JointTable`]), engine options, and
//!   validation into a numeric [`table::JointDistribution`].
//! - [`distributions`]: marginal distributions and step-function CDFs.
//! - [`moments`]: E[Vᵖ], variance, standard deviation, E[XY], covariance
//!   and correlation.
//! - [`statistical_tests`]: the cell-wise independence check.
//! - [`transform`]: affine expression parsing and the linear transform
//!   solver, including the soft-failing display variant.
//! - [`summary`]: all of the above for one table in a single pass.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every computation borrows its input table immutably and returns owned
//!   values; nothing holds state across calls.
//! - Table order is canonical: header values are never sorted.
//! - Default options are strict. Lenient coercion of unusable cells to 0
//!   is opt-in through [`table::EngineOptions::lenient`].
//!
//! Conventions
//! -----------
//! - One error enum per subtree (`TableError`, `MomentError`,
//!   `TransformError`), each with a `Result` alias and, behind
//!   `python-bindings`, a conversion into `ValueError`.
//! - Logging goes through the `log` facade; the crate never installs a
//!   logger.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code depends on the inner modules and can ignore the PyO3
//!   items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports `_joint_stats` and re-exports
//!   `JointStats` from `joint_stats.tables`.
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each module; `tests/` holds the end-to-end
//!   pipeline on the classroom table and proptest invariants over random
//!   tables.

pub mod distributions;
pub mod moments;
pub mod statistical_tests;
pub mod summary;
pub mod table;
pub mod transform;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    statistical_tests::IndependenceReport,
    summary::JointSummary,
    table::{EngineOptions, JointDistribution, JointTable},
    transform::{render_linear_transform_with, solve_linear_transform_with},
    utils::{extract_joint_table, extract_variable},
};

/// JointStats: Python-facing wrapper for a resolved joint table.
///
/// Purpose
/// -------
/// Resolve a joint probability table once from Python and expose every
/// derived statistic as methods and properties, forwarding all computation
/// to [`JointDistribution`] and [`JointSummary`].
///
/// Parameters
/// ----------
/// Constructed from Python via `JointStats(table, strict=True, tolerance=0.0)`:
/// - `table`: `&PyAny`
///   2-D array-like of floats; row 0 holds the Y values, column 0 the X
///   values, cell `[0][0]` is ignored.
/// - `strict`: `bool`
///   Reject non-finite cells, negative probabilities and duplicate header
///   values (`True`), or read non-finite cells as 0 (`False`).
/// - `tolerance`: `f64`
///   Independence comparison slack; must be finite and ≥ 0.
///
/// Fields
/// ------
/// - `table`: [`JointTable`]
///   The table as supplied, kept for the transform entry points.
/// - `options`: [`EngineOptions`]
/// - `dist`: [`JointDistribution`]
/// - `summary`: [`JointSummary`]
///
/// Notes
/// -----
/// - Variables are passed as `"X"` or `"Y"` (either case); anything else
///   raises `ValueError`.
/// - Engine errors are raised as `ValueError` with the Rust `Display`
///   message.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "joint_stats.tables")]
pub struct JointStats {
    table: JointTable,
    options: EngineOptions,
    dist: JointDistribution,
    summary: JointSummary,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl JointStats {
    #[new]
    #[pyo3(
        signature = (table, strict = true, tolerance = 0.0),
        text_signature = "(table, /, strict=True, tolerance=0.0)"
    )]
    pub fn new<'py>(
        py: Python<'py>, table: &Bound<'py, PyAny>, strict: bool, tolerance: f64,
    ) -> PyResult<JointStats> {
        let table = extract_joint_table(py, table)?;
        let options = EngineOptions::new(strict, tolerance)?;
        let dist = JointDistribution::from_table(&table, &options)?;
        let summary = JointSummary::from_distribution(&dist, options.independence_tolerance);
        Ok(JointStats { table, options, dist, summary })
    }

    /// `(values, probabilities)` of the marginal of `variable`.
    pub fn marginal(&self, variable: &str) -> PyResult<(Vec<f64>, Vec<f64>)> {
        let marginal = &self.summary.variable(extract_variable(variable)?).marginal;
        Ok((marginal.values().to_vec(), marginal.probabilities().to_vec()))
    }

    /// CDF steps as `(lower, upper, F)`; `None` marks an unbounded end.
    pub fn cdf(&self, variable: &str) -> PyResult<Vec<(Option<f64>, Option<f64>, f64)>> {
        let cdf = &self.summary.variable(extract_variable(variable)?).cdf;
        Ok(cdf.steps().map(|(interval, f)| (interval.lower, interval.upper, f)).collect())
    }

    /// CDF steps as `(label, F)` with labels such as `"(-1, 5]"`.
    pub fn cdf_labels(&self, variable: &str) -> PyResult<Vec<(String, f64)>> {
        let cdf = &self.summary.variable(extract_variable(variable)?).cdf;
        Ok(cdf.steps().map(|(interval, f)| (interval.to_string(), f)).collect())
    }

    #[pyo3(signature = (variable, power = 1), text_signature = "(self, variable, /, power=1)")]
    pub fn expectation(&self, variable: &str, power: i32) -> PyResult<f64> {
        Ok(self.dist.expectation(extract_variable(variable)?, power))
    }

    pub fn variance(&self, variable: &str) -> PyResult<f64> {
        Ok(self.summary.variable(extract_variable(variable)?).variance)
    }

    pub fn standard_deviation(&self, variable: &str) -> PyResult<f64> {
        Ok(self.dist.standard_deviation(extract_variable(variable)?)?)
    }

    #[getter]
    pub fn total_mass(&self) -> f64 {
        self.summary.total_mass
    }

    #[getter]
    pub fn expected_product_xy(&self) -> f64 {
        self.summary.expected_product_xy
    }

    #[getter]
    pub fn covariance(&self) -> f64 {
        self.summary.covariance
    }

    /// Correlation coefficient; raises `ValueError` for a constant variable.
    #[getter]
    pub fn correlation(&self) -> PyResult<f64> {
        Ok(self.summary.correlation.clone()?)
    }

    #[getter]
    pub fn independent(&self) -> bool {
        self.summary.independence.is_independent()
    }

    /// First mismatching cell as `(row, column, x, y, p_xy, p_x * p_y)`, or
    /// `None` when X and Y are independent.
    pub fn independence_report(&self) -> Option<(usize, usize, f64, f64, f64, f64)> {
        match self.summary.independence {
            IndependenceReport::Independent => None,
            IndependenceReport::Dependent {
                row,
                column,
                x_value,
                y_value,
                joint_probability,
                product_of_marginals,
            } => Some((row, column, x_value, y_value, joint_probability, product_of_marginals)),
        }
    }

    /// `(E[Z], D²Z)` for an affine expression; raises `ValueError` on a
    /// malformed expression.
    pub fn linear_transform(&self, expr: &str) -> PyResult<(f64, f64)> {
        let outcome = solve_linear_transform_with(expr, &self.table, &self.options)?;
        Ok((outcome.expectation, outcome.variance))
    }

    /// `(E[Z], D²Z)` as display strings; never raises.
    pub fn render_linear_transform(&self, expr: &str) -> (String, String) {
        let rendered = render_linear_transform_with(expr, &self.table, &self.options);
        (rendered.expectation, rendered.variance)
    }
}

/// _joint_stats: PyO3 module initializer for the Python extension.
///
/// Creates the `tables` submodule, attaches it to `_joint_stats`, and
/// registers it in `sys.modules` as `joint_stats.tables` so dotted imports
/// work from Python.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _joint_stats<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let tables_mod = PyModule::new(_py, "tables")?;
    tables(_py, m, &tables_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    _py.import("sys")?.getattr("modules")?.set_item("joint_stats.tables", tables_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn tables<'py>(
    _py: Python, joint_stats: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<JointStats>()?;
    joint_stats.add_submodule(m)?;
    Ok(())
}
