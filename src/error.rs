use aws_sdk_sqs::error::{BuildError, SdkError};
use aws_sdk_sqs::operation::delete_message_batch::DeleteMessageBatchError;
use aws_sdk_sqs::operation::receive_message::ReceiveMessageError;
use thiserror::Error;

/// Result type alias for queue operations
pub type QueueResult<T> = Result<T, QueueError>;

/// Error types for queue operations
#[derive(Error, Debug)]
pub enum QueueError {
    /// A successful receive call returned zero messages. Expected and
    /// recurring on an idle queue; not a fatal condition.
    #[error("no messages found")]
    NotFound,

    /// Error receiving messages from SQS
    #[error("failed to receive messages from SQS")]
    ReceiveMessage(#[from] SdkError<ReceiveMessageError>),

    /// Error batch-deleting messages from SQS
    #[error("failed to delete messages from SQS")]
    DeleteMessage(#[from] SdkError<DeleteMessageBatchError>),

    /// Error building a batch delete entry from a message id and
    /// receipt handle
    #[error("failed to build delete request: {0}")]
    BuildRequest(#[from] BuildError),
}

impl QueueError {
    /// Returns `true` for the not-found condition, i.e. "no work
    /// available right now" rather than a provider failure.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}
