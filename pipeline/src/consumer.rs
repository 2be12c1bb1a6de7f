//! Lock-step pairing of two input streams through the multiply engine.

use matrix_engine::Multiplier;
use tracing::{debug, warn};

use crate::error::Error;
use crate::stream::{MatrixReceiver, MatrixSender, StreamItem};

/// Drains `rx_a` and `rx_b` in lock-step, multiplying positional pairs
/// and publishing each product to `out`.
///
/// Pairing stops at the shorter stream: the first `EndOfStream` taken
/// from either input terminates the output stream, and asymmetric
/// stream lengths are truncated rather than treated as an error.
///
/// A multiply failure is fatal to the session. The output stream is
/// terminated and the error returned; skipping the bad pair would
/// shift the positional correspondence of every pair after it.
pub async fn pair_and_multiply(
    mut rx_a: MatrixReceiver,
    mut rx_b: MatrixReceiver,
    out: MatrixSender,
    multiplier: Multiplier,
) -> Result<(), Error> {
    loop {
        // Both takes happen before either item is examined.
        let item_a = rx_a.take().await;
        let item_b = rx_b.take().await;

        let (a, b) = match (item_a, item_b) {
            (StreamItem::Matrix(a), StreamItem::Matrix(b)) => (a, b),
            _ => {
                debug!("input stream ended, draining");
                return out.finish().await;
            }
        };

        match multiplier.multiply(a, b).await {
            Ok(product) => {
                out.publish(product).await?;
                debug!("pair multiplied");
            }
            Err(e) => {
                warn!(error = %e, "multiply failed, terminating session");
                let _ = out.finish().await;
                return Err(e.into());
            }
        }
    }
}
