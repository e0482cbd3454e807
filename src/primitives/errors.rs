//! Shared error types.
//!
//! ## Purpose
//!
//! One unified error enum covers both halves of the crate: dataset
//! acquisition (token parsing, file reading) and fitting (degenerate
//! input). All errors are detected close to their source and surfaced
//! immediately; the command-line front end alone decides user-facing
//! messages and exit codes.

use thiserror::Error;

/// Unified error type for dataset acquisition and line fitting.
#[derive(Debug, Error)]
pub enum RegressionError {
    /// The dataset contains no points.
    #[error("empty dataset: at least one point is required")]
    EmptyDataset,

    /// All x-values are identical, so the slope denominator is zero.
    #[error("degenerate fit: zero variance in x")]
    ZeroXVariance,

    /// A coordinate is NaN or infinite, reported as `x[i]=value`.
    #[error("non-finite coordinate {0}")]
    NonFiniteValue(String),

    /// A token could not be parsed as a real number.
    #[error("invalid numeric token '{0}'")]
    InvalidToken(String),

    /// A numeric token in a delimited stream exceeded the accumulator limit.
    #[error("numeric token longer than {max} bytes")]
    TokenOverflow {
        /// The accumulator limit that was exceeded.
        max: usize,
    },

    /// The input stream failed mid-read.
    #[error("read failure: {0}")]
    Io(#[from] std::io::Error),
}
