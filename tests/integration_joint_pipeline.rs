//! Integration tests for the joint-table statistics pipeline.
//!
//! Purpose
//! -------
//! - Validate the end-to-end path from a raw editor grid, through
//!   resolution under [`EngineOptions`], to every derived statistic.
//! - Pin the textbook values of the classroom table so that regressions in
//!   any stage show up as a concrete numeric mismatch.
//!
//! Coverage
//! --------
//! - `table`: strict vs lenient resolution, malformed-table reporting,
//!   snapshot isolation of `JointTable::with_cell`.
//! - `distributions`: marginals and CDF steps, including order
//!   sensitivity under row permutation.
//! - `moments`: E, E², Var, E[XY], covariance, correlation.
//! - `statistical_tests`: independence on product and non-product tables.
//! - `transform`: `-2X+5` and the soft-failure display path.
//! - `summary`: agreement with the individual entry points.
//!
//! Exclusions
//! ----------
//! - Parser grammar details and individual error variants, which are
//!   covered by unit tests in `transform::parser`.
//! - Random-table invariants, which live in `tests/properties.rs`.
use joint_stats::{
    distributions::{cdf_of, marginal_of},
    moments::{self, MomentError},
    statistical_tests::{IndependenceReport, independence_report},
    summary::JointSummary,
    table::{Cell, EngineOptions, JointDistribution, JointTable, TableError, Variable},
    transform::{EVALUATION_SENTINEL, render_linear_transform, solve_linear_transform},
};
use approx::assert_relative_eq;
use test_log::test;

const TOL: f64 = 1e-12;

/// The classroom table:
///
/// ```text
/// X / Y |  -4    0     2     3
/// ------+----------------------
///   -1  | 0.22  0.20  0.15  0.08
///    5  | 0.15  0.05  0.05  0.10
/// ```
fn classroom() -> JointTable {
    JointTable::from_numeric(vec![
        vec![0.0, -4.0, 0.0, 2.0, 3.0],
        vec![-1.0, 0.22, 0.2, 0.15, 0.08],
        vec![5.0, 0.15, 0.05, 0.05, 0.1],
    ])
}

/// Same table with the two X rows swapped.
fn classroom_rows_swapped() -> JointTable {
    JointTable::from_numeric(vec![
        vec![0.0, -4.0, 0.0, 2.0, 3.0],
        vec![5.0, 0.15, 0.05, 0.05, 0.1],
        vec![-1.0, 0.22, 0.2, 0.15, 0.08],
    ])
}

fn assert_close(actual: f64, expected: f64) {
    assert_relative_eq!(actual, expected, epsilon = TOL);
}

fn assert_all_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "length mismatch: {actual:?} vs {expected:?}");
    for (a, e) in actual.iter().zip(expected) {
        assert_close(*a, *e);
    }
}

#[test]
// Purpose
// -------
// Marginals and CDFs of the classroom table match the hand computation.
//
// Given
// -----
// - The classroom table.
//
// Expect
// ------
// - P(X) = [0.65, 0.35] over [-1, 5].
// - P(Y) = [0.37, 0.25, 0.20, 0.18] over [-4, 0, 2, 3].
// - F_X = [0, 0.65, 1.0], F_Y = [0, 0.37, 0.62, 0.82, 1.0] with the
//   conventional interval labels.
fn classroom_marginals_and_cdfs() {
    // Arrange
    let table = classroom();

    // Act
    let px = marginal_of(&table, Variable::X).unwrap();
    let py = marginal_of(&table, Variable::Y).unwrap();
    let fx = cdf_of(&px);
    let fy = cdf_of(&py);

    // Assert
    assert_eq!(px.values().to_vec(), vec![-1.0, 5.0]);
    assert_all_close(&px.probabilities().to_vec(), &[0.65, 0.35]);
    assert_eq!(py.values().to_vec(), vec![-4.0, 0.0, 2.0, 3.0]);
    assert_all_close(&py.probabilities().to_vec(), &[0.37, 0.25, 0.2, 0.18]);

    assert_all_close(&fx.cumulative().to_vec(), &[0.0, 0.65, 1.0]);
    assert_all_close(&fy.cumulative().to_vec(), &[0.0, 0.37, 0.62, 0.82, 1.0]);

    let labels: Vec<String> = fy.intervals().iter().map(ToString::to_string).collect();
    assert_eq!(labels, vec!["(-∞, -4]", "(-4, 0]", "(0, 2]", "(2, 3]", "(3, ∞)"]);
}

#[test]
fn classroom_moments() {
    let table = classroom();

    assert_close(moments::expectation(&table, Variable::X, 1).unwrap(), 1.1);
    assert_close(moments::expectation(&table, Variable::X, 2).unwrap(), 9.4);
    assert_close(moments::variance(&table, Variable::X).unwrap(), 8.19);
    assert_close(moments::expectation(&table, Variable::Y, 1).unwrap(), -0.54);
    assert_close(moments::variance(&table, Variable::Y).unwrap(), 8.0484);
    assert_close(moments::expected_product_xy(&table).unwrap(), -0.66);
    assert_close(moments::covariance(&table).unwrap(), -0.066);

    let rho = moments::correlation_coefficient(&table).unwrap();
    assert_close(rho, -0.066 / (8.19_f64.sqrt() * 8.0484_f64.sqrt()));
    assert!((-1.0..=1.0).contains(&rho));
}

#[test]
// Purpose
// -------
// The linear transform solver reproduces the classroom answer and its
// display form fails soft.
//
// Given
// -----
// - Z = -2X + 5 on the classroom table; then malformed expressions.
//
// Expect
// ------
// - E[Z] = 2.8, D²Z = 32.76.
// - Malformed expressions render as the sentinel pair.
fn classroom_linear_transform() {
    // Arrange
    let table = classroom();

    // Act
    let outcome = solve_linear_transform("-2X+5", &table).unwrap();
    let rendered_bad: Vec<_> = ["X*X", "5/X", "7", "X+Y", "2X+", "1/0*X"]
        .iter()
        .map(|expr| render_linear_transform(expr, &table))
        .collect();

    // Assert
    assert_close(outcome.expectation, 2.8);
    assert_close(outcome.variance, 32.76);
    for rendered in rendered_bad {
        assert_eq!(rendered.expectation, EVALUATION_SENTINEL);
        assert_eq!(rendered.variance, EVALUATION_SENTINEL);
    }
}

#[test]
fn classroom_is_dependent() {
    let report = independence_report(&classroom()).unwrap();
    assert!(matches!(report, IndependenceReport::Dependent { row: 0, column: 0, .. }));
}

#[test]
// Purpose
// -------
// Permuting rows changes the CDF description but not E or Var.
//
// Given
// -----
// - The classroom table and the same table with its X rows swapped.
//
// Expect
// ------
// - F_X differs: [0, 0.65, 1] vs [0, 0.35, 1].
// - E[X], Var[X], E[XY] agree to rounding.
fn row_permutation_changes_cdf_but_not_moments() {
    // Arrange
    let original = classroom();
    let swapped = classroom_rows_swapped();

    // Act
    let f_original = cdf_of(&marginal_of(&original, Variable::X).unwrap());
    let f_swapped = cdf_of(&marginal_of(&swapped, Variable::X).unwrap());

    // Assert
    assert_all_close(&f_swapped.cumulative().to_vec(), &[0.0, 0.35, 1.0]);
    assert_ne!(f_original.cumulative(), f_swapped.cumulative());
    assert_eq!(f_swapped.intervals()[1].to_string(), "(5, -1]");

    for variable in [Variable::X, Variable::Y] {
        assert_close(
            moments::expectation(&swapped, variable, 1).unwrap(),
            moments::expectation(&original, variable, 1).unwrap(),
        );
        assert_close(
            moments::variance(&swapped, variable).unwrap(),
            moments::variance(&original, variable).unwrap(),
        );
    }
    assert_close(
        moments::expected_product_xy(&swapped).unwrap(),
        moments::expected_product_xy(&original).unwrap(),
    );
}

#[test]
// Purpose
// -------
// An exact product table is independent and uncorrelated.
//
// Given
// -----
// - P(X) = [0.25, 0.75] on [1, 3], P(Y) = [0.5, 0.25, 0.25] on [-1, 2, 4].
//
// Expect
// ------
// - `Independent`, covariance ≈ 0, correlation ≈ 0.
fn independence_implies_zero_correlation() {
    // Arrange
    let table = JointTable::from_numeric(vec![
        vec![0.0, -1.0, 2.0, 4.0],
        vec![1.0, 0.125, 0.0625, 0.0625],
        vec![3.0, 0.375, 0.1875, 0.1875],
    ]);

    // Act
    let report = independence_report(&table).unwrap();
    let rho = moments::correlation_coefficient(&table).unwrap();

    // Assert
    assert_eq!(report, IndependenceReport::Independent);
    assert!(moments::covariance(&table).unwrap().abs() < TOL);
    assert!(rho.abs() < TOL);
}

#[test]
fn constant_variable_has_undefined_correlation() {
    let table = JointTable::from_numeric(vec![
        vec![0.0, 1.0, 2.0, 3.0],
        vec![7.0, 0.2, 0.3, 0.5],
    ]);

    let err = moments::correlation_coefficient(&table).unwrap_err();

    assert!(matches!(err, MomentError::DegenerateVariance { variable: Variable::X, .. }));
    assert_eq!(moments::standard_deviation(&table, Variable::X).unwrap(), 0.0);
}

#[test]
// Purpose
// -------
// Strict mode rejects unusable cells with coordinates; lenient mode reads
// them as 0 and computes anyway.
//
// Given
// -----
// - The classroom table with cell (1, 2) replaced by the text "abc".
//
// Expect
// ------
// - Strict: `InvalidCellValue { row: 1, column: 2, .. }`.
// - Lenient: P(X = -1) drops by 0.2 to 0.45.
fn strict_and_lenient_policies() {
    // Arrange
    let table = classroom().with_cell(1, 2, Cell::from("abc")).unwrap();

    // Act
    let strict = JointDistribution::from_table(&table, &EngineOptions::default());
    let lenient = JointDistribution::from_table(&table, &EngineOptions::lenient()).unwrap();

    // Assert
    match strict {
        Err(TableError::InvalidCellValue { row, column, .. }) => {
            assert_eq!((row, column), (1, 2));
        }
        other => panic!("expected InvalidCellValue, got {other:?}"),
    }
    let px = lenient.marginal(Variable::X);
    assert_close(px.probabilities()[0], 0.45);
    assert_close(lenient.total_mass(), 0.8);
}

#[test]
fn malformed_tables_are_reported_by_every_entry_point() {
    let ragged = JointTable::from_numeric(vec![
        vec![0.0, -4.0, 0.0],
        vec![-1.0, 0.5, 0.25],
        vec![5.0, 0.25],
    ]);
    let expected = TableError::RaggedRow { row: 2, expected: 3, actual: 2 };

    assert_eq!(marginal_of(&ragged, Variable::X).unwrap_err(), expected);
    assert_eq!(independence_report(&ragged).unwrap_err(), expected);
    assert_eq!(
        moments::expectation(&ragged, Variable::Y, 1).unwrap_err(),
        MomentError::Table(expected.clone())
    );
    assert!(render_linear_transform("X", &ragged).is_evaluation_error());
    assert!(JointSummary::compute(&ragged, &EngineOptions::lenient()).is_err());
}

#[test]
// Purpose
// -------
// Values derived from one snapshot are unaffected by later edits.
//
// Given
// -----
// - A summary of the classroom table, then an edited copy of the table.
//
// Expect
// ------
// - The first summary keeps E[X] = 1.1; the edited table yields a
//   different E[X].
fn edits_do_not_alias_earlier_results() {
    // Arrange
    let table = classroom();
    let before = JointSummary::compute(&table, &EngineOptions::default()).unwrap();

    // Act
    let edited = table.with_cell(2, 0, Cell::Number(6.0)).unwrap();
    let after = JointSummary::compute(&edited, &EngineOptions::default()).unwrap();

    // Assert
    assert_close(before.x.expectation, 1.1);
    assert_close(after.x.expectation, -0.65 + 6.0 * 0.35);
    assert_eq!(table, classroom());
}

#[test]
fn summary_agrees_with_individual_entry_points() {
    let table = classroom();
    let summary = JointSummary::compute(&table, &EngineOptions::default()).unwrap();

    assert_eq!(summary.x.marginal, marginal_of(&table, Variable::X).unwrap());
    assert_eq!(summary.y.cdf, cdf_of(&marginal_of(&table, Variable::Y).unwrap()));
    assert_eq!(summary.covariance, moments::covariance(&table).unwrap());
    assert_eq!(summary.correlation, moments::correlation_coefficient(&table));
    assert_eq!(summary.independence, independence_report(&table).unwrap());
}
