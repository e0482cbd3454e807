//! Layer 3: Engine
//!
//! Core fitting logic.
//!
//! This layer turns sigma sums into fitted line parameters. It owns the
//! upfront input validation, the two fit parameterizations, and the
//! result container.
//!
//! # Module Organization
//!
//! - **validator**: Input validation rules (empty, non-finite, degenerate)
//! - **solver**: The fit formulas and the x-mean
//! - **output**: Structured result with human-readable rendering
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters (args, file)
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math (sums)
//!   ↓
//! Layer 1: Primitives (point, errors)
//! ```

/// Validation utilities.
///
/// Provides:
/// - Checks for data consistency (emptiness, NaN/Inf coordinates)
/// - Rejection of zero-variance slope denominators
pub mod validator;

/// The ordinary least squares solver.
///
/// Provides:
/// - `best_fit` and `least_squares`, two parameterizations of one line
/// - The x-coordinate mean
pub mod solver;

/// Output types for fit operations.
///
/// Provides:
/// - The `FitResult` container struct
/// - Line evaluation and report formatting
pub mod output;
