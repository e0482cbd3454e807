//! Layer 5: API
//!
//! ## Purpose
//!
//! The primary entry points for fitting a line: [`fit`] over an already
//! collected point sequence, and [`fit_from`] over any
//! [`PointSource`](crate::adapters::PointSource) strategy. Types
//! re-exported here are considered stable.

use core::result;

use num_traits::Float;

use crate::adapters::PointSource;
use crate::engine::output::FitResult;
use crate::engine::solver;
use crate::primitives::errors::RegressionError;
use crate::primitives::point::Point;

/// Result type alias for fit operations.
pub type Result<T> = result::Result<T, RegressionError>;

/// Fit the least squares line over `points` and evaluate its x-mean.
///
/// Fails on an empty dataset, a non-finite coordinate, or zero variance
/// in x.
pub fn fit<T: Float>(points: &[Point<T>]) -> Result<FitResult<T>> {
    let (intercept, slope) = solver::best_fit(points)?;
    let x_mean = solver::mean_x(points)?;
    Ok(FitResult {
        n: points.len(),
        intercept,
        slope,
        x_mean,
    })
}

/// Collect points from `source`, then fit them.
pub fn fit_from<T, S>(source: S) -> Result<FitResult<T>>
where
    T: Float,
    S: PointSource<T>,
{
    let points = source.collect()?;
    fit(&points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_bundles_line_and_mean() {
        let points = vec![Point::new(1.0, 2.0), Point::new(2.0, 4.0), Point::new(3.0, 6.0)];
        let result = fit(&points).unwrap();
        assert_eq!(result.n, 3);
        assert_eq!(result.slope, 2.0);
        assert_eq!(result.intercept, 0.0);
        assert_eq!(result.x_mean, 2.0);
        assert_eq!(result.predict(result.x_mean), 4.0);
    }

    #[test]
    fn fit_rejects_empty_input() {
        let points: Vec<Point<f64>> = Vec::new();
        assert!(matches!(fit(&points), Err(RegressionError::EmptyDataset)));
    }
}
