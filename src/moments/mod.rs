//! moments: expectations, variances, E[XY] and correlation.
//!
//! Purpose
//! -------
//! Provide the moment-based statistics of a discrete pair (X, Y). The
//! computations are methods on [`JointDistribution`](crate::table::JointDistribution);
//! the free functions re-exported here take a raw [`JointTable`](crate::table::JointTable)
//! and resolve it with the default strict options.
//!
//! Key behaviors
//! -------------
//! - [`expectation`]: E[Vᵖ] over the marginal of V.
//! - [`variance`]: E[V²] − E[V]², unclamped.
//! - [`standard_deviation`]: √Var with cancellation noise clamped to 0.
//! - [`expected_product_xy`] and [`covariance`].
//! - [`correlation_coefficient`]: fails with
//!   [`MomentError::DegenerateVariance`] for a constant variable.
//!
//! Testing notes
//! -------------
//! - [`engine`] unit tests check the classroom table by hand; the
//!   permutation-invariance property is exercised by the proptest suite.

pub mod engine;
pub mod errors;

pub use self::engine::{
    VARIANCE_CANCELLATION_EPS, correlation_coefficient, covariance, expectation,
    expected_product_xy, standard_deviation, variance,
};
pub use self::errors::{MomentError, MomentResult};
