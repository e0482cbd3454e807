//! Layer 4: Adapters
//!
//! Input acquisition strategies.
//!
//! This layer adapts the raw input surfaces to the fitting engine. Both
//! adapters produce the same ordered point sequence, so the engine never
//! knows where its data came from:
//!
//! - **args**: coordinate pairs taken directly from command-line tokens
//! - **file**: numeric tokens scanned out of a delimited text stream
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters ← You are here
//!   ↓
//! Layer 3: Engine (validator, solver, output)
//!   ↓
//! Layer 2: Math (sums)
//!   ↓
//! Layer 1: Primitives (point, errors)
//! ```

use core::str::FromStr;

use num_traits::Float;

use crate::primitives::errors::RegressionError;
use crate::primitives::point::Point;

/// Paired command-line coordinate tokens.
pub mod args;

/// Delimited text stream scanning.
pub mod file;

/// A strategy producing the ordered point sequence consumed by the
/// fitting engine.
pub trait PointSource<T> {
    /// Consume the source and produce its points in input order.
    fn collect(self) -> Result<Vec<Point<T>>, RegressionError>;
}

/// Parse one numeric token, mapping failure to `InvalidToken`.
pub(crate) fn parse_token<T: Float + FromStr>(token: &str) -> Result<T, RegressionError> {
    token
        .parse()
        .map_err(|_| RegressionError::InvalidToken(token.to_owned()))
}
