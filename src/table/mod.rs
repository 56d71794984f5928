//! table: joint probability tables, engine options and validation.
//!
//! Purpose
//! -------
//! Model the grid the table editor hands to the engine and turn it into a
//! validated numeric snapshot. Everything downstream (marginals, CDFs,
//! moments, independence, linear transforms) starts from a
//! [`JointDistribution`] built here.
//!
//! Key behaviors
//! -------------
//! - [`JointTable`] / [`Cell`]: the raw grid, numbers or text, unvalidated.
//! - [`EngineOptions`]: strict vs lenient cell policy and the independence
//!   comparison tolerance.
//! - [`validation`]: shape guards (≥ 2 rows, ≥ 2 columns, rectangular) and
//!   cell resolution.
//! - [`JointDistribution`]: X values, Y values and the probability
//!   submatrix as `ndarray` containers.
//!
//! Invariants & assumptions
//! ------------------------
//! - Header values keep table order; nothing is sorted.
//! - The source table is borrowed immutably by every entry point.
//!
//! Testing notes
//! -------------
//! - Unit tests in each submodule cover every error branch and the
//!   strict/lenient split; integration tests in `tests/` exercise the
//!   whole pipeline on the classroom table.

pub mod distribution;
pub mod errors;
pub mod joint_table;
pub mod options;
pub mod validation;

pub use self::distribution::JointDistribution;
pub use self::errors::{TableError, TableResult};
pub use self::joint_table::{Cell, JointTable, Variable};
pub use self::options::EngineOptions;
