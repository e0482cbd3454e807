//! Input validation for fit operations.
//!
//! ## Purpose
//!
//! Upfront checks that reject datasets no line can be fitted to, with a
//! descriptive error instead of a silently propagated NaN or infinity.
//!
//! ## Design notes
//!
//! * Validation is fail-fast: returns on the first violation found.
//! * Error messages include the offending index and value.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Validated conditions
//!
//! * **Emptiness**: at least one point is required before any fit, since
//!   every operation divides by N.
//! * **Finiteness**: every coordinate must be finite (not NaN or Inf).
//! * **Degeneracy**: the slope denominator `N·Σx² − (Σx)²` must be
//!   nonzero, i.e. the x-values must not all be identical.

use num_traits::Float;

use crate::primitives::errors::RegressionError;
use crate::primitives::point::Point;

/// Validation utility for fit inputs.
///
/// All methods return `Result<(), RegressionError>` and fail fast upon
/// the first violation.
pub struct Validator;

impl Validator {
    /// Validate a point sequence before any fit is attempted.
    pub fn validate_points<T: Float>(points: &[Point<T>]) -> Result<(), RegressionError> {
        if points.is_empty() {
            return Err(RegressionError::EmptyDataset);
        }

        for (i, p) in points.iter().enumerate() {
            if !p.x.is_finite() {
                return Err(RegressionError::NonFiniteValue(format!(
                    "x[{}]={}",
                    i,
                    p.x.to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !p.y.is_finite() {
                return Err(RegressionError::NonFiniteValue(format!(
                    "y[{}]={}",
                    i,
                    p.y.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Reject a zero slope denominator (all x-values identical).
    pub fn validate_denominator<T: Float>(denominator: T) -> Result<(), RegressionError> {
        if denominator == T::zero() {
            return Err(RegressionError::ZeroXVariance);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_single_finite_point() {
        let points = [Point::new(1.0, 2.0)];
        assert!(Validator::validate_points(&points).is_ok());
    }

    #[test]
    fn rejects_an_empty_sequence() {
        let points: [Point<f64>; 0] = [];
        assert!(matches!(
            Validator::validate_points(&points),
            Err(RegressionError::EmptyDataset)
        ));
    }

    #[test]
    fn rejects_nan_coordinates_with_position() {
        let points = [Point::new(1.0, 2.0), Point::new(f64::NAN, 3.0)];
        match Validator::validate_points(&points) {
            Err(RegressionError::NonFiniteValue(detail)) => {
                assert!(detail.starts_with("x[1]="));
            }
            other => panic!("expected NonFiniteValue, got {:?}", other),
        }
    }

    #[test]
    fn rejects_infinite_y() {
        let points = [Point::new(1.0, f64::INFINITY)];
        assert!(matches!(
            Validator::validate_points(&points),
            Err(RegressionError::NonFiniteValue(_))
        ));
    }

    #[test]
    fn rejects_zero_denominator() {
        assert!(matches!(
            Validator::validate_denominator(0.0),
            Err(RegressionError::ZeroXVariance)
        ));
        assert!(Validator::validate_denominator(7445.0).is_ok());
    }
}
