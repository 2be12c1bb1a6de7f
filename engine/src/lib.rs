//! Parallel dense matrix multiplication.
//!
//! `matrix-engine` computes C = A × B by partitioning the output into
//! one work unit per cell and running the units across a fixed-size
//! pool of workers. Workers share nothing but the two read-only
//! operands; results arrive unordered and are assembled into the
//! product before it is returned.
//!
//! # Example
//!
//! ```
//! use matrix_engine::{Matrix, Multiplier};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), matrix_engine::Error> {
//! let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]])?;
//! let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]])?;
//!
//! let product = Multiplier::new(2)?.multiply(a, b).await?;
//! assert_eq!(product.row(0), &[19.0, 22.0]);
//! assert_eq!(product.row(1), &[43.0, 50.0]);
//! # Ok(())
//! # }
//! ```

mod engine;
mod error;
mod matrix;
mod partition;
mod pool;

pub use engine::Multiplier;
pub use error::Error;
pub use matrix::Matrix;
pub use partition::{PartialResult, WorkUnit, partition};
