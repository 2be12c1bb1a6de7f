//! Random matrix generation onto a stream.

use matrix_engine::Matrix;
use rand::Rng;
use tracing::debug;

use crate::error::Error;
use crate::stream::MatrixSender;

/// Publishes `count` random `size × size` matrices to `sender` in
/// order, then terminates the stream.
///
/// Entries are independent draws from a uniform `[0, 10)`. The stream
/// is the generator's only externally visible side effect. A closed
/// stream means the consumer has stopped taking items, so the
/// generator stops quietly instead of treating it as a failure.
pub async fn generate(size: usize, count: usize, sender: MatrixSender) -> Result<(), Error> {
    for seq in 0..count {
        let matrix = random_matrix(size)?;
        if sender.publish(matrix).await.is_err() {
            debug!(seq, "consumer gone, generator stopping early");
            return Ok(());
        }
        debug!(seq, size, "matrix generated");
    }

    let _ = sender.finish().await;
    Ok(())
}

fn random_matrix(size: usize) -> Result<Matrix, Error> {
    let mut rng = rand::thread_rng();
    let rows = (0..size)
        .map(|_| (0..size).map(|_| rng.gen_range(0.0..10.0)).collect())
        .collect();
    Ok(Matrix::from_rows(rows)?)
}
