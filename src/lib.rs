//! Monte Carlo estimation of π: random points in the unit square, counting
//! the fraction that lands inside the inscribed quarter-circle. Two
//! strategies share the formula `π ≈ 4 × inside / total` and nothing else:
//! a thread-partitioned estimator and a single-threaded bulk-array one.

pub mod parallel;
pub mod vectorized;

pub use parallel::MonteCarloPi;
pub use vectorized::{estimate_pi, estimate_pi_seeded};

use thiserror::Error;

/// Failures local to a single estimation call.
#[derive(Debug, Error)]
pub enum EstimateError {
    /// A zero trial or worker count was passed in.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A worker thread died before reporting its count.
    #[error("worker failure: {0}")]
    WorkerFailure(String),
}

pub type Result<T> = std::result::Result<T, EstimateError>;

/// The boundary is inclusive: a point at distance exactly 1 counts.
pub fn inside_unit_circle(x: f64, y: f64) -> bool {
    (x * x + y * y).sqrt() <= 1.0
}
