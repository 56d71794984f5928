//! statistical_tests: hypothesis checks on a joint distribution.
//!
//! Purpose
//! -------
//! Collect the test routines that operate on a resolved
//! [`JointDistribution`](crate::table::JointDistribution). This subtree
//! currently implements the cell-wise independence check of X and Y.
//!
//! Key behaviors
//! -------------
//! - [`IndependenceReport`] is a tagged result: `Independent`, or the first
//!   cell (row-major) where P(X = xᵢ, Y = yⱼ) ≠ P(X = xᵢ) · P(Y = yⱼ).
//! - [`independence_report`] resolves a raw table with default options;
//!   [`independence_report_with`] takes explicit [`EngineOptions`](crate::table::EngineOptions)
//!   and uses their tolerance.
//!
//! Invariants & assumptions
//! ------------------------
//! - Failures come only from table resolution and are reported as
//!   [`TableError`](crate::table::TableError); the check itself cannot fail.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the surface as:
//!
//!   ```rust
//!   use joint_stats::statistical_tests::{IndependenceReport, independence_report};
//!   use joint_stats::table::JointTable;
//!
//!   let table = JointTable::from_numeric(vec![
//!       vec![0.0, 1.0, 2.0],
//!       vec![0.0, 0.25, 0.25],
//!       vec![1.0, 0.25, 0.25],
//!   ]);
//!   assert_eq!(independence_report(&table).unwrap(), IndependenceReport::Independent);
//!   ```
//!
//! Testing notes
//! -------------
//! - Unit tests in [`independence`] cover product tables, single-cell
//!   perturbations, scan order and the tolerance knob; the proptest suite
//!   checks that random product tables of dyadic marginals are independent.

pub mod independence;

pub use self::independence::{IndependenceReport, independence_report, independence_report_with};
