//! The ordinary least squares solver.
//!
//! ## Purpose
//!
//! Derives the fitted line `y = m·x + b` and the x-mean from the sigma
//! sums. Two algebraically equivalent parameterizations are kept as
//! separate operations for output-format compatibility; they must agree
//! to within floating-point rounding for identical input.
//!
//! ## Design notes
//!
//! * All operations are pure, stateless, single-shot computations over
//!   an immutable input sequence.
//! * Inputs are validated up front; a zero slope denominator is surfaced
//!   as `ZeroXVariance` rather than propagated as NaN or infinity.

use num_traits::Float;

use crate::engine::validator::Validator;
use crate::math::sums::SigmaSums;
use crate::primitives::errors::RegressionError;
use crate::primitives::point::Point;

/// Fit the slope `m` and baseline `b` of the least squares line,
/// returned as `(b, m)`.
///
/// ```text
///      N Σ(xy) − Σx Σy
/// m = -----------------
///      N Σ(x²) − (Σx)²
///
///      Σy − m Σx
/// b = -----------
///          N
/// ```
pub fn best_fit<T: Float>(points: &[Point<T>]) -> Result<(T, T), RegressionError> {
    Validator::validate_points(points)?;

    let sums = SigmaSums::accumulate(points);
    let n = T::from(points.len()).unwrap();
    let denominator = sums.denominator(points.len());
    Validator::validate_denominator(denominator)?;

    let m = (n * sums.xy - sums.x * sums.y) / denominator;
    let b = (sums.y - m * sums.x) / n;
    Ok((b, m))
}

/// Fit the intercept `a` and slope `b` of the least squares line,
/// returned as `(a, b)`.
///
/// A rearrangement of the `best_fit` equations over the same
/// denominator:
///
/// ```text
///      Σy Σ(x²) − Σx Σ(xy)
/// a = ---------------------
///       N Σ(x²) − (Σx)²
///
///      N Σ(xy) − Σx Σy
/// b = -----------------
///      N Σ(x²) − (Σx)²
/// ```
pub fn least_squares<T: Float>(points: &[Point<T>]) -> Result<(T, T), RegressionError> {
    Validator::validate_points(points)?;

    let sums = SigmaSums::accumulate(points);
    let n = T::from(points.len()).unwrap();
    let denominator = sums.denominator(points.len());
    Validator::validate_denominator(denominator)?;

    let a = (sums.y * sums.x_squared - sums.x * sums.xy) / denominator;
    let b = (n * sums.xy - sums.x * sums.y) / denominator;
    Ok((a, b))
}

/// Arithmetic mean of the x-coordinates, `Σx / N`.
pub fn mean_x<T: Float>(points: &[Point<T>]) -> Result<T, RegressionError> {
    Validator::validate_points(points)?;

    let sums = SigmaSums::accumulate(points);
    Ok(sums.x / T::from(points.len()).unwrap())
}
