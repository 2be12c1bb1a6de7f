//! Rectangular `f64` matrix with a plain-text interchange format.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// An immutable `rows × cols` grid of `f64`.
///
/// Every row has the same length and both dimensions are at least 1.
/// A matrix is never mutated after construction; pipeline stages hand
/// matrices to each other by value, so a consumer can never observe a
/// half-written one.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: Vec<Vec<f64>>,
}

impl Matrix {
    /// Builds a matrix from rows, rejecting empty and ragged input.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, Error> {
        let width = rows.first().map_or(0, |row| row.len());
        if width == 0 {
            return Err(Error::MalformedMatrix {
                row: 0,
                expected: 1,
                found: 0,
            });
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(Error::MalformedMatrix {
                    row: i,
                    expected: width,
                    found: row.len(),
                });
            }
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn cols(&self) -> usize {
        self.rows[0].len()
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.rows[i][j]
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.rows[i]
    }
}

/// One row per line, values separated by single spaces.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let line = row
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl FromStr for Matrix {
    type Err = Error;

    /// Parses the [`Display`] format. Blank lines are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                line.split_whitespace()
                    .map(|token| token.parse::<f64>())
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }
}
