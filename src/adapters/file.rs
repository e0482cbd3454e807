//! Point acquisition from a delimited text stream.
//!
//! ## Purpose
//!
//! Scans a byte stream for numeric tokens and pairs them alternately
//! into points. Any text file works where numbers are separated by one
//! or more non-numeric bytes: commas, whitespace, newlines, or anything
//! else.
//!
//! ## Design notes
//!
//! * Tokens are runs of ASCII digits, `.` and `-`; every other byte is
//!   a delimiter, and delimiter runs collapse.
//! * The token accumulator grows dynamically but is capped at
//!   [`MAX_TOKEN_LEN`] bytes; exceeding the cap aborts the whole parse.
//! * A token terminated by end of input is flushed like any other.
//! * Completed tokens alternate x, y, x, y; an unpaired trailing
//!   x-value is ignored with a logged warning.
//! * The reader is consumed by collection, so the underlying handle is
//!   released on every exit path.
//! * No quoting support: a field like `"1,000"` is read as two tokens.

use core::str::FromStr;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use log::warn;
use num_traits::Float;

use crate::adapters::{parse_token, PointSource};
use crate::primitives::errors::RegressionError;
use crate::primitives::point::Point;

/// Upper bound on a single numeric token, in bytes.
pub const MAX_TOKEN_LEN: usize = 256;

/// Numeric tokens scanned out of a delimited byte stream.
#[derive(Debug)]
pub struct DelimitedFileSource<R> {
    reader: R,
    swap_axes: bool,
}

impl DelimitedFileSource<BufReader<File>> {
    /// Open `path` for buffered reading.
    ///
    /// With `swap_axes` set, x and y are exchanged for every parsed
    /// point, for files whose columns are reversed.
    pub fn open(path: impl AsRef<Path>, swap_axes: bool) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::from_reader(BufReader::new(file), swap_axes))
    }
}

impl<R: Read> DelimitedFileSource<R> {
    /// Scan an arbitrary reader instead of a file on disk.
    pub fn from_reader(reader: R, swap_axes: bool) -> Self {
        Self { reader, swap_axes }
    }
}

impl<R: Read, T: Float + FromStr> PointSource<T> for DelimitedFileSource<R> {
    fn collect(self) -> Result<Vec<Point<T>>, RegressionError> {
        let Self { reader, swap_axes } = self;

        let mut xs: Vec<T> = Vec::new();
        let mut ys: Vec<T> = Vec::new();
        let mut accum = String::new();
        let mut into_y = false;

        for byte in reader.bytes() {
            let c = char::from(byte?);
            if c.is_ascii_digit() || c == '.' || c == '-' {
                if accum.len() == MAX_TOKEN_LEN {
                    return Err(RegressionError::TokenOverflow { max: MAX_TOKEN_LEN });
                }
                accum.push(c);
            } else if !accum.is_empty() {
                flush_token(&mut accum, &mut xs, &mut ys, &mut into_y)?;
            }
        }

        // a final token may be terminated by end of input
        if !accum.is_empty() {
            flush_token(&mut accum, &mut xs, &mut ys, &mut into_y)?;
        }

        if xs.len() > ys.len() {
            warn!("odd number of numeric tokens; ignoring unpaired trailing x value");
        }

        let mut points: Vec<Point<T>> =
            xs.into_iter().zip(ys).map(|(x, y)| Point::new(x, y)).collect();
        if swap_axes {
            for point in points.iter_mut() {
                *point = point.swapped();
            }
        }
        Ok(points)
    }
}

/// Parse the accumulated token and append it to the list whose turn it
/// is, toggling between the x- and y-lists.
fn flush_token<T: Float + FromStr>(
    accum: &mut String,
    xs: &mut Vec<T>,
    ys: &mut Vec<T>,
    into_y: &mut bool,
) -> Result<(), RegressionError> {
    let value = parse_token(accum)?;
    if *into_y {
        ys.push(value);
    } else {
        xs.push(value);
    }
    *into_y = !*into_y;
    accum.clear();
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn parse(text: &str, swap: bool) -> Result<Vec<Point<f64>>, RegressionError> {
        DelimitedFileSource::from_reader(Cursor::new(text.to_owned()), swap).collect()
    }

    #[test]
    fn parses_comma_separated_pairs() {
        let points = parse("1,2\n3.5,-4\n", false).unwrap();
        assert_eq!(points, vec![Point::new(1.0, 2.0), Point::new(3.5, -4.0)]);
    }

    #[test]
    fn any_non_numeric_byte_delimits() {
        let points = parse("1 2;3\t4|5 6", false).unwrap();
        assert_eq!(
            points,
            vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0), Point::new(5.0, 6.0)]
        );
    }

    #[test]
    fn delimiter_runs_collapse() {
        let points = parse(",,  1 ,, 2 ,,\n", false).unwrap();
        assert_eq!(points, vec![Point::new(1.0, 2.0)]);
    }

    #[test]
    fn trailing_token_at_end_of_input_is_flushed() {
        let points = parse("1,2\n3,4", false).unwrap();
        assert_eq!(points, vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
    }

    #[test]
    fn unpaired_trailing_x_is_ignored() {
        let points = parse("1,2,3", false).unwrap();
        assert_eq!(points, vec![Point::new(1.0, 2.0)]);
    }

    #[test]
    fn swap_mode_exchanges_every_point() {
        let points = parse("1,2\n3,4\n", true).unwrap();
        assert_eq!(points, vec![Point::new(2.0, 1.0), Point::new(4.0, 3.0)]);
    }

    #[test]
    fn oversized_token_aborts_the_parse() {
        let text = format!("{},1\n", "9".repeat(MAX_TOKEN_LEN + 1));
        assert!(matches!(
            parse(&text, false),
            Err(RegressionError::TokenOverflow { max: MAX_TOKEN_LEN })
        ));
    }

    #[test]
    fn token_at_the_limit_is_accepted() {
        // 0.5 padded with trailing zeros up to exactly MAX_TOKEN_LEN bytes
        let token = format!("0.5{}", "0".repeat(MAX_TOKEN_LEN - 3));
        let points = parse(&format!("{},1\n", token), false).unwrap();
        assert_eq!(points, vec![Point::new(0.5, 1.0)]);
    }

    #[test]
    fn malformed_token_is_an_explicit_error() {
        assert!(matches!(
            parse("1.2.3,4\n", false),
            Err(RegressionError::InvalidToken(_))
        ));
    }

    #[test]
    fn empty_input_yields_no_points() {
        let points = parse("", false).unwrap();
        assert!(points.is_empty());
    }
}
