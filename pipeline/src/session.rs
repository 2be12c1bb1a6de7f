//! One streaming run: two generators, a pairing consumer, a counter.

use futures_util::future::join_all;
use matrix_engine::Multiplier;
use tracing::info;

use crate::consumer;
use crate::error::Error;
use crate::generate;
use crate::stream::{self, StreamItem};

const DEFAULT_CAPACITY: usize = 8;

/// Parameters for one streaming generate-and-multiply session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Generated matrices are `size × size`.
    pub size: usize,
    /// How many matrices the A generator produces.
    pub count_a: usize,
    /// How many matrices the B generator produces.
    pub count_b: usize,
    /// Worker pool size; `None` means one worker per available
    /// hardware execution unit.
    pub pool_size: Option<usize>,
    /// Capacity of each stream.
    pub capacity: usize,
}

impl SessionConfig {
    pub fn new(size: usize, count_a: usize, count_b: usize) -> Self {
        Self {
            size,
            count_a,
            count_b,
            pool_size: None,
            capacity: DEFAULT_CAPACITY,
        }
    }
}

/// Runs one pipeline session to completion and returns the number of
/// completed pairs.
///
/// The session owns the completed-pair counter; it is incremented only
/// here, on the output-stream consumption path. All three task handles
/// are awaited before the count is reported, since draining the output
/// stream alone does not prove the tasks have exited.
pub async fn run(config: SessionConfig) -> Result<usize, Error> {
    let multiplier = match config.pool_size {
        Some(size) => Multiplier::new(size)?,
        None => Multiplier::default(),
    };

    let (tx_a, rx_a) = stream::channel(config.capacity);
    let (tx_b, rx_b) = stream::channel(config.capacity);
    let (tx_out, mut rx_out) = stream::channel(config.capacity);

    let gen_a = tokio::spawn(generate::generate(config.size, config.count_a, tx_a));
    let gen_b = tokio::spawn(generate::generate(config.size, config.count_b, tx_b));
    let pairing = tokio::spawn(consumer::pair_and_multiply(rx_a, rx_b, tx_out, multiplier));

    let mut completed = 0usize;
    loop {
        match rx_out.take().await {
            StreamItem::Matrix(_) => {
                completed += 1;
                info!(completed, "product ready");
            }
            StreamItem::EndOfStream => break,
        }
    }

    for joined in join_all([gen_a, gen_b]).await {
        joined.map_err(|e| Error::Task(e.to_string()))??;
    }
    pairing.await.map_err(|e| Error::Task(e.to_string()))??;

    info!(completed, "session complete");
    Ok(completed)
}
