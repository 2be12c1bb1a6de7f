//! The multiply engine: partition, execute, assemble.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::thread::available_parallelism;

use tracing::debug;

use crate::error::Error;
use crate::matrix::Matrix;
use crate::partition::{self, PartialResult};
use crate::pool;

/// Parallel dense matrix multiplier with a fixed worker pool size.
///
/// One output cell is one unit of work; the pool computes cells in an
/// unspecified order and the engine assembles them into the product.
/// The product is not observable until every cell has arrived.
pub struct Multiplier {
    pool_size: usize,
}

impl Multiplier {
    /// Creates a multiplier with `pool_size` workers. Zero workers is
    /// invalid.
    pub fn new(pool_size: usize) -> Result<Self, Error> {
        if pool_size == 0 {
            return Err(Error::InvalidPoolSize(pool_size));
        }
        Ok(Self { pool_size })
    }

    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    /// Computes `a × b`, returning the fully assembled `m×p` product.
    pub async fn multiply(&self, a: Matrix, b: Matrix) -> Result<Matrix, Error> {
        self.multiply_observed(a, b, |_| {}).await
    }

    /// Same as [`multiply`](Self::multiply), invoking `on_partial` for
    /// every cell as it is folded into the product. A single compute
    /// pass; the observer sees exactly `m·p` partial results, in
    /// arrival order.
    pub async fn multiply_observed(
        &self,
        a: Matrix,
        b: Matrix,
        mut on_partial: impl FnMut(&PartialResult),
    ) -> Result<Matrix, Error> {
        let a = Arc::new(a);
        let b = Arc::new(b);
        let units = partition::partition(&a, &b)?;
        let expected = units.len();

        let partials = pool::execute(units, self.pool_size).await?;
        if partials.len() != expected {
            return Err(Error::ComputeFailure(format!(
                "collected {} of {} results",
                partials.len(),
                expected,
            )));
        }

        let (m, p) = (a.rows(), b.cols());
        let mut cells = vec![vec![0.0; p]; m];
        for partial in &partials {
            on_partial(partial);
            cells[partial.row][partial.col] = partial.value;
        }

        debug!(rows = m, cols = p, pool = self.pool_size, "multiply complete");
        Matrix::from_rows(cells)
    }
}

impl Default for Multiplier {
    /// One worker per available hardware execution unit.
    fn default() -> Self {
        let pool_size = available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1);
        Self { pool_size }
    }
}
