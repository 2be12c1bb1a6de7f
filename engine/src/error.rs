//! Error types for matrix-engine operations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("matrix dimension mismatch: A is {0}x{1}, B is {2}x{3}")]
    DimensionMismatch(usize, usize, usize, usize),

    #[error("invalid pool size: {0}")]
    InvalidPoolSize(usize),

    #[error("compute failure: {0}")]
    ComputeFailure(String),

    #[error("malformed matrix: row {row} has {found} values, expected {expected}")]
    MalformedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("parse error: {0}")]
    Parse(#[from] std::num::ParseFloatError),
}
