//! Point acquisition from command-line coordinate tokens.
//!
//! Tokens are paired left to right as (x₁,y₁,x₂,y₂,…). An odd token
//! count is not fatal: the trailing token is ignored with a logged
//! warning and the fit proceeds over the even prefix. Malformed tokens
//! are an explicit parse error rather than a silent zero.

use core::str::FromStr;

use log::warn;
use num_traits::Float;

use crate::adapters::{parse_token, PointSource};
use crate::primitives::errors::RegressionError;
use crate::primitives::point::Point;

/// Coordinate pairs taken from an ordered token slice.
#[derive(Debug, Clone, Copy)]
pub struct ArgPairsSource<'a> {
    tokens: &'a [String],
}

impl<'a> ArgPairsSource<'a> {
    /// Wrap a token slice, typically the positional CLI arguments.
    pub fn new(tokens: &'a [String]) -> Self {
        Self { tokens }
    }
}

impl<T: Float + FromStr> PointSource<T> for ArgPairsSource<'_> {
    fn collect(self) -> Result<Vec<Point<T>>, RegressionError> {
        if self.tokens.len() % 2 != 0 {
            // unwrap is fine: an odd length implies at least one token
            warn!(
                "odd number of coordinate tokens; ignoring trailing '{}'",
                self.tokens.last().unwrap()
            );
        }

        let mut points = Vec::with_capacity(self.tokens.len() / 2);
        for pair in self.tokens.chunks_exact(2) {
            let x = parse_token(&pair[0])?;
            let y = parse_token(&pair[1])?;
            points.push(Point::new(x, y));
        }
        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn pairs_tokens_left_to_right() {
        let tokens = tokens(&["1.0", "2.0", "3.5", "-4.0"]);
        let points: Vec<Point<f64>> = ArgPairsSource::new(&tokens).collect().unwrap();
        assert_eq!(points, vec![Point::new(1.0, 2.0), Point::new(3.5, -4.0)]);
    }

    #[test]
    fn odd_token_count_ignores_the_trailing_token() {
        let tokens = tokens(&["1", "2", "3", "4", "99"]);
        let points: Vec<Point<f64>> = ArgPairsSource::new(&tokens).collect().unwrap();
        assert_eq!(points, vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
    }

    #[test]
    fn malformed_token_is_an_explicit_error() {
        let tokens = tokens(&["1.0", "abc"]);
        let result: Result<Vec<Point<f64>>, _> = ArgPairsSource::new(&tokens).collect();
        match result {
            Err(RegressionError::InvalidToken(token)) => assert_eq!(token, "abc"),
            other => panic!("expected InvalidToken, got {:?}", other),
        }
    }

    #[test]
    fn empty_token_slice_yields_no_points() {
        let tokens: Vec<String> = Vec::new();
        let points: Vec<Point<f64>> = ArgPairsSource::new(&tokens).collect().unwrap();
        assert!(points.is_empty());
    }
}
