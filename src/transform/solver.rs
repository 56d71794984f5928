//! transform::solver: expectation and variance of Z = a·V + b.
//!
//! Purpose
//! -------
//! Apply the linearity rules E[aV + b] = a·E[V] + b and
//! Var[aV + b] = a²·Var[V] to a parsed [`AffineForm`], using the moments
//! of the joint table the expression refers to.
//!
//! Key behaviors
//! -------------
//! - [`solve_linear_transform`] parses, resolves the table and returns a
//!   structured [`TransformOutcome`], propagating every failure.
//! - [`render_linear_transform`] is the display surface: any failure is
//!   logged at `warn` and both values become [`EVALUATION_SENTINEL`].
//!
//! Invariants & assumptions
//! ------------------------
//! - The variance of Z uses the raw Var[V]; it is not clamped, so a
//!   cancellation residue in Var[V] is scaled by a² like everything else.
use log::warn;

use crate::{
    table::{EngineOptions, JointDistribution, JointTable},
    transform::{
        errors::TransformResult,
        parser::{AffineForm, parse_affine},
    },
};

/// Display value used in place of E[Z] and D²Z when the transform cannot
/// be evaluated.
pub const EVALUATION_SENTINEL: &str = "N/A";

/// TransformOutcome: E[Z] and Var[Z] for a parsed transform.
///
/// Fields
/// ------
/// - `form`: [`AffineForm`]
///   The parsed `(a, b, V)`.
/// - `expectation`: `f64`
///   E[Z] = a·E[V] + b.
/// - `variance`: `f64`
///   D²Z = a²·Var[V].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformOutcome {
    pub form: AffineForm,
    pub expectation: f64,
    pub variance: f64,
}

impl JointDistribution {
    /// Moments of the transform `form` under this distribution.
    pub fn linear_transform(&self, form: &AffineForm) -> TransformOutcome {
        let a = form.coefficient;
        TransformOutcome {
            form: *form,
            expectation: form.evaluate(self.expectation(form.variable, 1)),
            variance: a * a * self.variance(form.variable),
        }
    }
}

/// Parse `expr` and compute E[Z] and D²Z for a joint table (default
/// options).
///
/// Errors
/// ------
/// - Any parser variant of `TransformError` (checked before the table).
/// - `TransformError::Moment` wrapping the table's validation failure.
///
/// Examples
/// --------
/// ```rust
/// use joint_stats::table::JointTable;
/// use joint_stats::transform::solve_linear_transform;
///
/// let table = JointTable::from_numeric(vec![
///     vec![0.0, 1.0, 2.0],
///     vec![0.0, 0.25, 0.25],
///     vec![2.0, 0.25, 0.25],
/// ]);
/// let outcome = solve_linear_transform("3X - 1", &table).unwrap();
/// assert_eq!(outcome.expectation, 2.0);
/// assert_eq!(outcome.variance, 9.0);
/// ```
pub fn solve_linear_transform(expr: &str, table: &JointTable) -> TransformResult<TransformOutcome> {
    solve_linear_transform_with(expr, table, &EngineOptions::default())
}

/// [`solve_linear_transform`] under explicit options.
pub fn solve_linear_transform_with(
    expr: &str, table: &JointTable, options: &EngineOptions,
) -> TransformResult<TransformOutcome> {
    let form = parse_affine(expr)?;
    let dist = JointDistribution::from_table(table, options)?;
    Ok(dist.linear_transform(&form))
}

/// RenderedTransform: display strings for E[Z] and D²Z.
///
/// Both fields hold [`EVALUATION_SENTINEL`] when evaluation failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTransform {
    pub expectation: String,
    pub variance: String,
}

impl RenderedTransform {
    fn sentinel() -> RenderedTransform {
        RenderedTransform {
            expectation: EVALUATION_SENTINEL.to_string(),
            variance: EVALUATION_SENTINEL.to_string(),
        }
    }

    /// True when the values are the sentinel rather than numbers.
    pub fn is_evaluation_error(&self) -> bool {
        self.expectation == EVALUATION_SENTINEL
    }
}

/// Soft-failing transform for display (default options).
///
/// Parameters
/// ----------
/// - `expr`: `&str`
///   Expression as typed, e.g. `"-2X+5"`.
/// - `table`: `&JointTable`
///   Current table snapshot.
///
/// Returns
/// -------
/// `RenderedTransform`
///   `f64` `Display` output for both values, or the sentinel pair. Never
///   an error.
pub fn render_linear_transform(expr: &str, table: &JointTable) -> RenderedTransform {
    render_linear_transform_with(expr, table, &EngineOptions::default())
}

/// [`render_linear_transform`] under explicit options.
pub fn render_linear_transform_with(
    expr: &str, table: &JointTable, options: &EngineOptions,
) -> RenderedTransform {
    match solve_linear_transform_with(expr, table, options) {
        Ok(outcome) => RenderedTransform {
            expectation: outcome.expectation.to_string(),
            variance: outcome.variance.to_string(),
        },
        Err(err) => {
            warn!("cannot evaluate transform {expr:?}: {err}");
            RenderedTransform::sentinel()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::{
        moments::MomentError,
        table::{TableError, Variable},
        transform::errors::TransformError,
    };

    fn classroom() -> JointTable {
        JointTable::from_parts(
            "X / Y",
            &[-4.0, 0.0, 2.0, 3.0],
            &[(-1.0, vec![0.22, 0.2, 0.15, 0.08]), (5.0, vec![0.15, 0.05, 0.05, 0.1])],
        )
    }

    #[test]
    // Purpose
    // -------
    // Reproduce the textbook answer for Z = -2X + 5.
    //
    // Given
    // -----
    // - The classroom table: E[X] = 1.1, Var[X] = 8.19.
    //
    // Expect
    // ------
    // - E[Z] = -2·1.1 + 5 = 2.8.
    // - D²Z = 4·8.19 = 32.76.
    fn classroom_transform_of_x() {
        // Arrange
        let table = classroom();

        // Act
        let outcome = solve_linear_transform("-2X+5", &table).unwrap();

        // Assert
        assert_eq!(outcome.form.variable, Variable::X);
        assert_relative_eq!(outcome.expectation, 2.8, epsilon = 1e-12);
        assert_relative_eq!(outcome.variance, 32.76, epsilon = 1e-12);
    }

    #[test]
    fn transform_of_y_uses_y_moments() {
        // E[Y] = -0.54, Var[Y] = 8.0484.
        let outcome = solve_linear_transform("(Y + 1) / 2", &classroom()).unwrap();

        assert_relative_eq!(outcome.expectation, 0.23, epsilon = 1e-12);
        assert_relative_eq!(outcome.variance, 2.0121, epsilon = 1e-12);
    }

    #[test]
    fn constant_shift_leaves_variance_unchanged() {
        let dist = JointDistribution::from_table(&classroom(), &EngineOptions::default()).unwrap();
        let form = parse_affine("X + 100").unwrap();

        let outcome = dist.linear_transform(&form);

        assert_eq!(outcome.variance, dist.variance(Variable::X));
    }

    #[test]
    fn parse_errors_win_over_table_errors() {
        let broken = JointTable::from_numeric(vec![vec![0.0]]);

        assert_eq!(
            solve_linear_transform("X*X", &broken),
            Err(TransformError::NonLinear { position: 1 })
        );
        assert_eq!(
            solve_linear_transform("X", &broken),
            Err(TransformError::Moment(MomentError::Table(TableError::TooFewRows { rows: 1 })))
        );
    }

    #[test]
    // Purpose
    // -------
    // The display surface never fails: errors become the sentinel pair.
    //
    // Given
    // -----
    // - A valid expression, an invalid expression, and a valid expression
    //   on a malformed table.
    //
    // Expect
    // ------
    // - Numbers for the first; the sentinel for both fields otherwise.
    fn render_fails_soft() {
        // Arrange
        let table = classroom();
        let broken = JointTable::from_numeric(vec![vec![0.0, 1.0]]);

        // Act
        let ok = render_linear_transform("3X", &table);
        let bad_expr = render_linear_transform("5/X", &table);
        let bad_table = render_linear_transform("X", &broken);

        // Assert
        assert!(!ok.is_evaluation_error());
        let shown: f64 = ok.expectation.parse().unwrap();
        assert!((shown - 3.3).abs() < 1e-12, "Got: {}", ok.expectation);
        for rendered in [bad_expr, bad_table] {
            assert!(rendered.is_evaluation_error());
            assert_eq!(rendered.expectation, EVALUATION_SENTINEL);
            assert_eq!(rendered.variance, EVALUATION_SENTINEL);
        }
    }

    #[test]
    // Purpose
    // -------
    // A dropped operator renders as the sentinel instead of a wrong number.
    //
    // Given
    // -----
    // - `"-2X 5"`, i.e. `-2X + 5` with the `+` missing.
    //
    // Expect
    // ------
    // - Both values are `EVALUATION_SENTINEL`; the strict solver reports
    //   the stray `5` as an unexpected token.
    fn missing_operator_renders_sentinel() {
        // Arrange
        let table = classroom();

        // Act
        let rendered = render_linear_transform("-2X 5", &table);
        let solved = solve_linear_transform("-2X 5", &table);

        // Assert
        assert!(rendered.is_evaluation_error());
        assert_eq!(rendered.variance, EVALUATION_SENTINEL);
        assert_eq!(
            solved,
            Err(TransformError::UnexpectedToken { position: 4, found: "5".to_string() })
        );
    }

    #[test]
    fn lenient_options_flow_through() {
        let table = JointTable::from_numeric(vec![
            vec![0.0, 1.0, 2.0],
            vec![0.0, 0.5, f64::NAN],
            vec![2.0, 0.5, 0.0],
        ]);

        assert!(solve_linear_transform("X", &table).is_err());

        let outcome = solve_linear_transform_with("X", &table, &EngineOptions::lenient()).unwrap();
        assert_eq!(outcome.expectation, 1.0);
        assert_eq!(outcome.variance, 1.0);
    }
}
