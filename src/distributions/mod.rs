//! distributions: marginal distributions and their CDFs.
//!
//! - [`marginal`]: row sums (X) and column sums (Y) of the probability
//!   submatrix, in table order.
//! - [`cdf`]: step-function description of a marginal's CDF, one interval
//!   more than the number of values.
//!
//! Both operate on resolved [`JointDistribution`](crate::table::JointDistribution)
//! snapshots; the table-level helpers [`marginal_of`] and [`cdf_of`] use the
//! default strict options.

pub mod cdf;
pub mod marginal;

pub use self::cdf::{Cdf, CdfInterval, cdf_of};
pub use self::marginal::{Marginal, marginal_of};
