//! # Diffraction Series
//!
//! A [`Series`] is the ordered `(2θ, intensity)` pair sequence read from one
//! measurement file. Columns are stored separately (structure of arrays) so the
//! wire format (`x`/`y` arrays) and the chart layer can borrow them directly.
//!
//! ## Input Format
//!
//! ```text
//! # 2theta  intensity
//! 10.00     1532
//! 10.02     1540   extra-columns-ignored
//! ```
//!
//! Blank lines and `#` comments are skipped, as is any line whose first two
//! whitespace-separated tokens are not both numbers. See [`parse`].

mod error;
mod parser;


pub use error::{ParseError, SeriesError};
pub use parser::{parse, parse_file, parse_reader};

use serde::Serialize;

/// Ordered `(x, y)` pairs with at least one entry.
///
/// The x column is kept in input order and is not required to be sorted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Series {
    /// Build a series from separate columns.
    ///
    /// Fails if the columns differ in length or are empty.
    pub fn from_columns(x: Vec<f64>, y: Vec<f64>) -> Result<Self, SeriesError> {
        if x.len() != y.len() {
            return Err(SeriesError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        if x.is_empty() {
            return Err(SeriesError::Empty);
        }
        Ok(Self { x, y })
    }

    /// Build a series from `(x, y)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, SeriesError>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let (x, y): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
        Self::from_columns(x, y)
    }

    /// Diffraction angles (2θ).
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Intensities.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Number of pairs. Always at least one.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false; kept for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate over `(x, y)` pairs in input order.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Consume the series, returning the x and y columns.
    pub fn into_columns(self) -> (Vec<f64>, Vec<f64>) {
        (self.x, self.y)
    }
}
