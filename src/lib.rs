//! Tiny consumer abstraction over AWS SQS
//!
//! Wraps a single queue endpoint and exposes receive / delete / shift /
//! poll operations with default long-polling parameters. Messages are
//! acknowledged (deleted) as soon as a shift completes, before the
//! caller has processed them, so delivery is at-least-once with early
//! acknowledgment.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use shiftq::{Queue, QueueParams};
//!
//! #[tokio::main]
//! async fn main() {
//!     let queue = Arc::new(
//!         Queue::new(
//!             "https://sqs.us-east-1.amazonaws.com/123456789012/jobs",
//!             "us-east-1",
//!             QueueParams::default(),
//!         )
//!         .await,
//!     );
//!
//!     let (msg_tx, msg_rx) = flume::bounded(32);
//!     let (err_tx, _err_rx) = flume::bounded(32);
//!
//!     let poller = {
//!         let queue = Arc::clone(&queue);
//!         tokio::spawn(async move { queue.poll(msg_tx, err_tx).await })
//!     };
//!
//!     while let Ok(body) = msg_rx.recv_async().await {
//!         println!("{body}");
//!     }
//!
//!     queue.stop_poll();
//!     let _ = poller.await;
//! }
//! ```

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Error types for queue operations
pub mod error;
/// The queue consumer and its polling loop
pub mod queue;
/// Common types for queue operations
pub mod types;

pub use error::{QueueError, QueueResult};
pub use queue::Queue;
pub use types::{Message, QueueParams};
