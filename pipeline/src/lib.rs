//! Streaming generate-and-multiply pipeline.
//!
//! `matrix-pipeline` wires the multiply engine into an asynchronous
//! pipeline: two generators each fill a bounded matrix stream, a
//! pairing consumer drains both streams in lock-step and multiplies
//! each positional pair, and a session orchestrator counts finished
//! products until the end-of-stream marker arrives.
//!
//! Matrices cross stream boundaries by ownership transfer, never by
//! sharing, and every stream is terminated by exactly one explicit
//! `EndOfStream` marker.
//!
//! # Example
//!
//! ```no_run
//! use matrix_pipeline::SessionConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), matrix_pipeline::Error> {
//!     // Two generators produce 8 random 16x16 matrices each; the
//!     // consumer multiplies them pairwise.
//!     let completed = matrix_pipeline::run(SessionConfig::new(16, 8, 8)).await?;
//!     assert_eq!(completed, 8);
//!     Ok(())
//! }
//! ```

mod consumer;
mod error;
mod generate;
pub mod io;
mod session;
mod stream;

pub use consumer::pair_and_multiply;
pub use error::Error;
pub use generate::generate;
pub use session::{SessionConfig, run};
pub use stream::{MatrixReceiver, MatrixSender, StreamItem, channel};
