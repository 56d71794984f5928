//! transform: linear transforms Z = a·V + b of one table variable.
//!
//! Purpose
//! -------
//! Let a user type an affine expression in X or Y and get E[Z] and D²Z
//! back. Parsing and evaluation are separate stages: [`parse_affine`]
//! produces a structured [`AffineForm`], and the solver applies
//! E[aV + b] = a·E[V] + b and Var[aV + b] = a²·Var[V] to it.
//!
//! Key behaviors
//! -------------
//! - [`solve_linear_transform`] returns a [`TransformOutcome`] or a
//!   [`TransformError`].
//! - [`render_linear_transform`] never fails; it yields display strings,
//!   with [`EVALUATION_SENTINEL`] standing in for both values on error.
//!
//! Downstream usage
//! ----------------
//! - Editors that show a live preview call [`render_linear_transform`] on
//!   every keystroke; programmatic callers use [`solve_linear_transform`]
//!   and match on [`TransformError`].
//!
//! Testing notes
//! -------------
//! - [`parser`] tests cover the grammar and every error variant; [`solver`]
//!   tests reproduce the classroom answer for `-2X+5` and the soft-failure
//!   path.

pub mod errors;
pub mod parser;
pub mod solver;

pub use self::errors::{TransformError, TransformResult};
pub use self::parser::{AffineForm, MAX_NESTING, parse_affine};
pub use self::solver::{
    EVALUATION_SENTINEL, RenderedTransform, TransformOutcome, render_linear_transform,
    render_linear_transform_with, solve_linear_transform, solve_linear_transform_with,
};
