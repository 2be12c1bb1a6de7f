//! Bounded matrix streams with an explicit end-of-stream marker.

use matrix_engine::Matrix;
use tokio::sync::mpsc;

use crate::error::Error;

/// An element of a matrix stream: either a payload or the terminal
/// marker. The element type is closed, so a consumer can never mistake
/// an end marker for data.
#[derive(Debug)]
pub enum StreamItem {
    Matrix(Matrix),
    EndOfStream,
}

/// Creates a bounded single-producer/single-consumer matrix stream.
///
/// Items are delivered FIFO. `publish` blocks while the stream is at
/// capacity; `take` blocks until an item is available.
pub fn channel(capacity: usize) -> (MatrixSender, MatrixReceiver) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (MatrixSender { tx }, MatrixReceiver { rx, drained: false })
}

/// Producer half of a matrix stream.
pub struct MatrixSender {
    tx: mpsc::Sender<StreamItem>,
}

impl MatrixSender {
    /// Publishes one matrix, blocking while the stream is at capacity.
    /// Fails with [`Error::StreamClosed`] if the consumer is gone.
    pub async fn publish(&self, matrix: Matrix) -> Result<(), Error> {
        self.tx
            .send(StreamItem::Matrix(matrix))
            .await
            .map_err(|_| Error::StreamClosed)
    }

    /// Terminates the stream with exactly one `EndOfStream`. Consumes
    /// the sender so no matrix can follow the marker.
    pub async fn finish(self) -> Result<(), Error> {
        self.tx
            .send(StreamItem::EndOfStream)
            .await
            .map_err(|_| Error::StreamClosed)
    }
}

/// Consumer half of a matrix stream.
pub struct MatrixReceiver {
    rx: mpsc::Receiver<StreamItem>,
    drained: bool,
}

impl MatrixReceiver {
    /// Takes the next item, blocking until one is available.
    ///
    /// Once `EndOfStream` has been taken (or the producer is gone),
    /// every further call returns `EndOfStream` immediately rather
    /// than blocking.
    pub async fn take(&mut self) -> StreamItem {
        if self.drained {
            return StreamItem::EndOfStream;
        }
        match self.rx.recv().await {
            Some(StreamItem::Matrix(matrix)) => StreamItem::Matrix(matrix),
            Some(StreamItem::EndOfStream) | None => {
                self.drained = true;
                StreamItem::EndOfStream
            }
        }
    }
}
