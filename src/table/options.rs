//! Engine options: numeric policy and comparison settings.
//!
//! Purpose
//! -------
//! Collect the knobs that change how a joint table is read and compared
//! in one place, so call sites pass an explicit, validated configuration
//! instead of ad-hoc flags.
//!
//! Key behaviors
//! -------------
//! - `strict` selects the cell policy: reject non-numeric or non-finite
//!   cells, negative probabilities and duplicate header values (default),
//!   or coerce unusable cells to 0 and accept the rest as-is.
//! - `independence_tolerance` is the largest |pᵢⱼ − P(xᵢ)·P(yⱼ)| still
//!   treated as a match. The default 0 means exact comparison.
//!
//! Conventions
//! -----------
//! - [`EngineOptions::default`] is strict with tolerance 0.
//! - Table-level free functions in the crate use the default options;
//!   lenient callers go through [`JointDistribution::from_table`].
//!
//! [`JointDistribution::from_table`]: crate::table::JointDistribution::from_table
use crate::table::errors::{TableError, TableResult};

/// EngineOptions: configuration for resolving and comparing joint tables.
///
/// Fields
/// ------
/// - `strict`: `bool`
///   Fail with `TableError::InvalidCellValue` / `DuplicateAxisValue`
///   instead of coercing.
/// - `independence_tolerance`: `f64`
///   Finite, non-negative comparison slack for the independence test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineOptions {
    pub strict: bool,
    pub independence_tolerance: f64,
}

impl EngineOptions {
    /// Construct validated options.
    ///
    /// Errors
    /// ------
    /// - `TableError::InvalidTolerance(t)` when `t` is negative, NaN or
    ///   infinite.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use joint_stats::table::EngineOptions;
    /// let opts = EngineOptions::new(false, 1e-12).unwrap();
    /// assert!(!opts.strict);
    /// assert!(EngineOptions::new(true, -1.0).is_err());
    /// ```
    pub fn new(strict: bool, independence_tolerance: f64) -> TableResult<EngineOptions> {
        if !independence_tolerance.is_finite() || independence_tolerance < 0.0 {
            return Err(TableError::InvalidTolerance(independence_tolerance));
        }
        Ok(EngineOptions { strict, independence_tolerance })
    }

    /// Lenient coercion with exact independence comparison.
    pub fn lenient() -> EngineOptions {
        EngineOptions { strict: false, independence_tolerance: 0.0 }
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        EngineOptions { strict: true, independence_tolerance: 0.0 }
    }
}
