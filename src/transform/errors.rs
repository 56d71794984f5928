//! transform::errors: failures of the affine parser and transform solver.
//!
//! Purpose
//! -------
//! Describe why an expression such as `"-2X+5"` could not be turned into a
//! linear transform of X or Y, and forward moment/table failures raised
//! while evaluating it.
//!
//! Key behaviors
//! -------------
//! - Parser variants carry the byte offset into the expression where the
//!   problem was detected, so an editor can underline it.
//! - [`TransformError::is_parse_error`] separates malformed expressions from
//!   failures of the table they were evaluated against.
//! - Converts to `PyErr` (`ValueError`) when `python-bindings` is enabled.
//!
//! Conventions
//! -----------
//! - Positions are byte offsets into the original (untrimmed) string.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

use crate::{moments::MomentError, table::TableError};

pub type TransformResult<T> = Result<T, TransformError>;

/// TransformError: errors raised while parsing or solving a linear
/// transform.
///
/// Variants
/// --------
/// - `MissingVariable`
///   The expression is a constant; neither X nor Y appears.
/// - `MixedVariables`
///   Both X and Y appear.
/// - `NonLinear { position }`
///   A variable term is multiplied by another variable term, or something
///   is divided by a variable term.
/// - `DivisionByZero { position }`
///   Division by a sub-expression that evaluates to the constant 0.
/// - `UnexpectedToken { position, found }`
///   A character or token that does not fit the grammar.
/// - `UnexpectedEnd`
///   The expression stops mid-term (`"2X+"`, `"(X"`, `""`).
/// - `NestingTooDeep { limit }`
///   More than `limit` nested parentheses or unary signs.
/// - `NonFinite { coefficient, constant }`
///   The parsed coefficient or constant overflowed to ±∞ or NaN.
/// - `Moment(MomentError)`
///   The table could not be resolved or its moments are unusable.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformError {
    // ---- Expression shape ----
    MissingVariable,
    MixedVariables,
    NonLinear { position: usize },
    DivisionByZero { position: usize },
    UnexpectedToken { position: usize, found: String },
    UnexpectedEnd,
    NestingTooDeep { limit: usize },
    NonFinite { coefficient: f64, constant: f64 },

    // ---- Evaluation ----
    Moment(MomentError),
}

impl TransformError {
    /// True when the expression itself is at fault, independent of any
    /// table.
    pub fn is_parse_error(&self) -> bool {
        !matches!(self, TransformError::Moment(_))
    }
}

impl std::error::Error for TransformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransformError::Moment(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for TransformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransformError::MissingVariable => {
                write!(f, "Expression must reference X or Y.")
            }
            TransformError::MixedVariables => {
                write!(f, "Expression must reference only one of X and Y.")
            }
            TransformError::NonLinear { position } => {
                write!(f, "Expression is not affine in its variable (at offset {position}).")
            }
            TransformError::DivisionByZero { position } => {
                write!(f, "Division by zero at offset {position}.")
            }
            TransformError::UnexpectedToken { position, found } => {
                write!(f, "Unexpected {found:?} at offset {position}.")
            }
            TransformError::UnexpectedEnd => write!(f, "Unexpected end of expression."),
            TransformError::NestingTooDeep { limit } => {
                write!(f, "Expression nests deeper than {limit} levels.")
            }
            TransformError::NonFinite { coefficient, constant } => {
                write!(
                    f,
                    "Expression does not reduce to finite coefficients: a = {coefficient}, b = {constant}."
                )
            }
            TransformError::Moment(err) => write!(f, "{err}"),
        }
    }
}

impl From<MomentError> for TransformError {
    fn from(err: MomentError) -> Self {
        TransformError::Moment(err)
    }
}

impl From<TableError> for TransformError {
    fn from(err: TableError) -> Self {
        TransformError::Moment(MomentError::Table(err))
    }
}

#[cfg(feature = "python-bindings")]
impl From<TransformError> for PyErr {
    fn from(err: TransformError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn table_errors_are_wrapped_as_moment_errors() {
        let err: TransformError = TableError::TooFewColumns { columns: 1 }.into();

        let expected =
            TransformError::Moment(MomentError::Table(TableError::TooFewColumns { columns: 1 }));
        assert_eq!(err, expected);
        assert!(!err.is_parse_error());
        assert!(err.source().is_some());
    }

    #[test]
    // Purpose
    // -------
    // Parser messages carry their offsets and found tokens.
    fn display_includes_position_and_token() {
        let msg = TransformError::UnexpectedToken { position: 3, found: "#".into() }.to_string();
        assert!(msg.contains("\"#\""), "Got: {msg}");
        assert!(msg.contains("offset 3"), "Got: {msg}");

        let msg = TransformError::DivisionByZero { position: 1 }.to_string();
        assert!(msg.contains("offset 1"), "Got: {msg}");
        assert!(TransformError::MissingVariable.is_parse_error());
    }
}
