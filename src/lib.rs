//! Ordinary least squares line fitting over (x, y) samples.
//!
//! Computes the slope and intercept of the best-fit line for an ordered
//! point sequence, collected either from paired coordinate tokens or
//! scanned out of a delimited text stream. The numeric layers are
//! generic over [`num_traits::Float`], so f32 and f64 both work.
//!
//! # Example
//!
//! ```
//! use regression::prelude::*;
//!
//! let points = vec![Point::new(1.0, 2.0), Point::new(2.0, 4.0), Point::new(3.0, 6.0)];
//! let line = fit(&points).unwrap();
//! assert!((line.slope - 2.0).abs() < 1e-12);
//! assert!((line.predict(line.x_mean) - 4.0).abs() < 1e-12);
//! ```
//!
//! # Architecture
//!
//! ```text
//! CLI binary (main, cli)
//!   ↓
//! Layer 5: API (fit entry points, prelude)
//!   ↓
//! Layer 4: Adapters (args, file)
//!   ↓
//! Layer 3: Engine (validator, solver, output)
//!   ↓
//! Layer 2: Math (sums)
//!   ↓
//! Layer 1: Primitives (point, errors)
//! ```

/// Layer 1: core types and errors.
pub mod primitives;

/// Layer 2: pure numerical reductions.
pub mod math;

/// Layer 3: fit formulas, validation, and results.
pub mod engine;

/// Layer 4: input acquisition strategies.
pub mod adapters;

/// Layer 5: high-level entry points.
pub mod api;

/// Commonly used items, re-exported in one place.
pub mod prelude {
    pub use crate::adapters::args::ArgPairsSource;
    pub use crate::adapters::file::DelimitedFileSource;
    pub use crate::adapters::PointSource;
    pub use crate::api::{fit, fit_from, Result};
    pub use crate::engine::output::FitResult;
    pub use crate::primitives::errors::RegressionError;
    pub use crate::primitives::point::Point;
}
