//! moments::errors: failures of the moment engine.
//!
//! Purpose
//! -------
//! Report statistics that are mathematically undefined for the given
//! table (a constant variable has no correlation) and forward table
//! validation failures from the table-level entry points.
//!
//! Conventions
//! -----------
//! - The raw variance is carried in the error so the caller can tell an
//!   exact zero from floating-point cancellation and choose what to show.
//! - `From<TableError>` lets table-level helpers use `?` on
//!   [`JointDistribution::from_table`](crate::table::JointDistribution::from_table).

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

use crate::table::{TableError, Variable};

pub type MomentResult<T> = Result<T, MomentError>;

/// MomentError: errors raised by the moment engine.
///
/// Variants
/// --------
/// - `DegenerateVariance { variable, variance }`
///   Var[`variable`] is zero or negative (cancellation), so a statistic
///   dividing by its square root is undefined.
/// - `Table(TableError)`
///   The joint table could not be resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum MomentError {
    DegenerateVariance { variable: Variable, variance: f64 },
    Table(TableError),
}

impl std::error::Error for MomentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MomentError::Table(err) => Some(err),
            MomentError::DegenerateVariance { .. } => None,
        }
    }
}

impl std::fmt::Display for MomentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MomentError::DegenerateVariance { variable, variance } => {
                write!(f, "Degenerate variance of {variable}: D{variable}^2 = {variance}.")
            }
            MomentError::Table(err) => write!(f, "{err}"),
        }
    }
}

impl From<TableError> for MomentError {
    fn from(err: TableError) -> Self {
        MomentError::Table(err)
    }
}

#[cfg(feature = "python-bindings")]
impl From<MomentError> for PyErr {
    fn from(err: MomentError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn degenerate_variance_display_names_variable_and_value() {
        let msg =
            MomentError::DegenerateVariance { variable: Variable::Y, variance: -0.25 }.to_string();
        assert!(msg.contains("DY^2"), "Got: {msg}");
        assert!(msg.contains("-0.25"), "Got: {msg}");
    }

    #[test]
    fn table_errors_are_wrapped_with_source() {
        let err: MomentError = TableError::TooFewRows { rows: 1 }.into();
        assert_eq!(err.to_string(), TableError::TooFewRows { rows: 1 }.to_string());
        assert!(err.source().is_some());
    }
}
