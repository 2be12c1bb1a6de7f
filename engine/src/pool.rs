//! Fixed-size worker pool draining a queue of work units.

use std::sync::Arc;

use futures_util::future::try_join_all;
use tokio::sync::{Mutex, mpsc};

use crate::error::Error;
use crate::partition::{PartialResult, WorkUnit};

/// Runs `units` across exactly `pool_size` workers and collects one
/// partial result per unit, in arrival order.
///
/// Workers share the queue receiver; each takes a unit, computes it
/// outside the lock, and sends the result back. The queue is filled
/// up front and closed, so an idle worker exits as soon as it finds
/// the queue drained.
pub async fn execute(units: Vec<WorkUnit>, pool_size: usize) -> Result<Vec<PartialResult>, Error> {
    if pool_size == 0 {
        return Err(Error::InvalidPoolSize(pool_size));
    }

    let total = units.len();
    let (unit_tx, unit_rx) = mpsc::channel(total.max(1));
    let (result_tx, mut result_rx) = mpsc::channel(total.max(1));

    for unit in units {
        // Capacity covers every unit, so this never blocks.
        unit_tx
            .send(unit)
            .await
            .map_err(|e| Error::ComputeFailure(e.to_string()))?;
    }
    drop(unit_tx);

    let unit_rx = Arc::new(Mutex::new(unit_rx));
    let mut workers = Vec::with_capacity(pool_size);
    for _ in 0..pool_size {
        let queue = Arc::clone(&unit_rx);
        let results = result_tx.clone();
        workers.push(tokio::spawn(async move {
            loop {
                let unit = queue.lock().await.recv().await;
                let Some(unit) = unit else { break };
                if results.send(unit.compute()).await.is_err() {
                    break;
                }
            }
        }));
    }
    drop(result_tx);

    let mut partials = Vec::with_capacity(total);
    while let Some(partial) = result_rx.recv().await {
        partials.push(partial);
    }

    try_join_all(workers)
        .await
        .map_err(|e| Error::ComputeFailure(e.to_string()))?;

    Ok(partials)
}
