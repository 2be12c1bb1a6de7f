//! Error types for pipeline operations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("engine error: {0}")]
    Engine(#[from] matrix_engine::Error),

    #[error("matrix file not found: {0}")]
    NotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("stream closed before end of stream")]
    StreamClosed,

    #[error("task failed: {0}")]
    Task(String),
}
