//! Work-unit partitioning for one multiply call.

use std::sync::Arc;

use crate::error::Error;
use crate::matrix::Matrix;

/// The smallest schedulable piece of multiply work: one output cell,
/// plus shared read-only handles to the operands.
///
/// Units are independent of each other and consumed exactly once.
#[derive(Debug, Clone)]
pub struct WorkUnit {
    pub row: usize,
    pub col: usize,
    a: Arc<Matrix>,
    b: Arc<Matrix>,
}

/// One computed output cell, as returned by a worker.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialResult {
    pub row: usize,
    pub col: usize,
    pub value: f64,
}

/// Enumerates the `m·p` work units for `a × b`, one per output cell,
/// in row-major order. Consumers must not rely on the order.
pub fn partition(a: &Arc<Matrix>, b: &Arc<Matrix>) -> Result<Vec<WorkUnit>, Error> {
    if a.cols() != b.rows() {
        return Err(Error::DimensionMismatch(
            a.rows(),
            a.cols(),
            b.rows(),
            b.cols(),
        ));
    }

    let mut units = Vec::with_capacity(a.rows() * b.cols());
    for row in 0..a.rows() {
        for col in 0..b.cols() {
            units.push(WorkUnit {
                row,
                col,
                a: Arc::clone(a),
                b: Arc::clone(b),
            });
        }
    }
    Ok(units)
}

impl WorkUnit {
    /// Computes this unit's cell, accumulating in `k = 0..n` order.
    /// The summation order is fixed so results are reproducible across
    /// pool sizes.
    pub fn compute(&self) -> PartialResult {
        let n = self.a.cols();
        let mut value = 0.0;
        for k in 0..n {
            value += self.a.get(self.row, k) * self.b.get(k, self.col);
        }
        PartialResult {
            row: self.row,
            col: self.col,
            value,
        }
    }
}
