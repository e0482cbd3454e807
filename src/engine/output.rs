//! Output types for fit operations.
//!
//! ## Purpose
//!
//! Defines the [`FitResult`] container returned by the high-level fit
//! entry point, together with line evaluation and the human-readable
//! report rendering.
//!
//! ## Design notes
//!
//! * This module stores results; it does not compute them.
//! * `Display` renders fixed-point values with six decimals, matching
//!   standard double formatting with trailing zeros.

use core::fmt;

use num_traits::Float;

/// A fitted least squares line together with the x-mean of its dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitResult<T> {
    /// Number of points the line was fitted over.
    pub n: usize,

    /// Predicted y at x = 0 (the baseline `b`).
    pub intercept: T,

    /// Rate of change of y with respect to x (the slope `m`).
    pub slope: T,

    /// Arithmetic mean of the x-coordinates (x̄).
    pub x_mean: T,
}

impl<T: Float> FitResult<T> {
    /// Evaluate the fitted line at `x`.
    pub fn predict(&self, x: T) -> T {
        self.slope * x + self.intercept
    }
}

impl<T: Float + fmt::Display> fmt::Display for FitResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Best fit (OLS):")?;
        writeln!(f, "b={:.6}", self.intercept)?;
        writeln!(f, "m={:.6}", self.slope)?;
        writeln!(f)?;
        writeln!(f, "y={:.6} at x=x̄={:.6}", self.predict(self.x_mean), self.x_mean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicts_along_the_line() {
        let fit = FitResult { n: 3, intercept: 1.0, slope: 2.0, x_mean: 2.0 };
        assert_eq!(fit.predict(0.0), 1.0);
        assert_eq!(fit.predict(3.0), 7.0);
    }

    #[test]
    fn report_uses_fixed_point_with_six_decimals() {
        let fit = FitResult { n: 3, intercept: 0.0, slope: 2.0, x_mean: 2.0 };
        let report = fit.to_string();
        assert_eq!(
            report,
            "Best fit (OLS):\nb=0.000000\nm=2.000000\n\ny=4.000000 at x=x̄=2.000000\n"
        );
    }
}
