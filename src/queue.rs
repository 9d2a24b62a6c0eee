use aws_config::{BehaviorVersion, Region};
use aws_sdk_sqs::types::DeleteMessageBatchRequestEntry;
use aws_sdk_sqs::Client as SqsClient;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::error::{QueueError, QueueResult};
use crate::types::{Message, QueueParams};

/// Consumer bound to a single SQS queue endpoint
///
/// All operations take `&self`; the underlying SQS client is
/// thread-safe, so concurrent calls are memory-safe but uncoordinated
/// (concurrent [`shift`]s interleave batches). Run at most one
/// [`poll`] loop per instance.
///
/// [`shift`]: Self::shift
/// [`poll`]: Self::poll
pub struct Queue {
    endpoint: String,
    params: QueueParams,
    client: SqsClient,
    stop: CancellationToken,
}

impl Queue {
    /// Creates a consumer bound to `endpoint`, resolving parameter
    /// defaults and building an SQS client from ambient AWS
    /// configuration with the given region.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Queue URL
    /// * `region` - AWS region the queue lives in
    /// * `params` - Consumption parameters; zero-valued fields default
    pub async fn new(
        endpoint: impl Into<String>,
        region: impl Into<String>,
        params: QueueParams,
    ) -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.into()))
            .load()
            .await;

        Self::with_client(SqsClient::new(&config), endpoint, params)
    }

    /// Creates a consumer from a pre-configured SQS client
    ///
    /// # Arguments
    ///
    /// * `client` - Pre-configured SQS client
    /// * `endpoint` - Queue URL
    /// * `params` - Consumption parameters; zero-valued fields default
    #[must_use]
    pub fn with_client(client: SqsClient, endpoint: impl Into<String>, params: QueueParams) -> Self {
        Self {
            endpoint: endpoint.into(),
            params: params.resolved(),
            client,
            stop: CancellationToken::new(),
        }
    }

    /// Returns the queue URL this consumer is bound to
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the resolved consumption parameters
    #[must_use]
    pub const fn params(&self) -> QueueParams {
        self.params
    }

    /// Fetches up to `max_messages` messages using long polling
    ///
    /// Provider entries missing an id, receipt handle, or body are
    /// skipped with a warning, so every returned [`Message`] carries
    /// all three fields.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::NotFound`] if the call succeeds but the
    /// queue has no messages available; any SDK failure is propagated
    /// as [`QueueError::ReceiveMessage`].
    pub async fn receive(&self) -> QueueResult<Vec<Message>> {
        let result = self
            .client
            .receive_message()
            .queue_url(&self.endpoint)
            .max_number_of_messages(self.params.max_messages)
            .visibility_timeout(self.params.visibility_timeout)
            .wait_time_seconds(self.params.wait_time_seconds)
            .send()
            .await?;

        let messages: Vec<Message> = result
            .messages()
            .iter()
            .filter_map(|msg| {
                let (Some(id), Some(receipt_handle), Some(body)) =
                    (msg.message_id(), msg.receipt_handle(), msg.body())
                else {
                    warn!("Skipping message with missing id, receipt handle, or body");
                    return None;
                };

                Some(Message {
                    id: id.to_string(),
                    receipt_handle: receipt_handle.to_string(),
                    body: body.to_string(),
                })
            })
            .collect();

        if messages.is_empty() {
            return Err(QueueError::NotFound);
        }

        debug!("Received {} messages", messages.len());
        Ok(messages)
    }

    /// Batch-acknowledges the given messages by deleting them
    ///
    /// An empty slice is a no-op (SQS rejects empty batch requests, so
    /// no call is made). Batch-level failure is returned as a whole;
    /// per-entry failures within an accepted batch are not inspected
    /// or retried.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::DeleteMessage`] if the batch call fails,
    /// or [`QueueError::BuildRequest`] if an entry cannot be built.
    pub async fn delete(&self, messages: &[Message]) -> QueueResult<()> {
        if messages.is_empty() {
            return Ok(());
        }

        let mut entries = Vec::with_capacity(messages.len());
        for msg in messages {
            entries.push(
                DeleteMessageBatchRequestEntry::builder()
                    .id(&msg.id)
                    .receipt_handle(&msg.receipt_handle)
                    .build()?,
            );
        }

        self.client
            .delete_message_batch()
            .queue_url(&self.endpoint)
            .set_entries(Some(entries))
            .send()
            .await?;

        debug!("Deleted {} messages", messages.len());
        Ok(())
    }

    /// Receives a batch and immediately deletes it, returning the
    /// received messages
    ///
    /// Deletion happens before the caller sees the messages, so a
    /// failure downstream of a successful shift loses them (early-ack
    /// at-least-once consumption).
    ///
    /// # Errors
    ///
    /// Propagates the receive error (including
    /// [`QueueError::NotFound`]) without attempting the delete, or the
    /// delete error after a successful receive.
    pub async fn shift(&self) -> QueueResult<Vec<Message>> {
        let messages = self.receive().await?;
        self.delete(&messages).await?;
        Ok(messages)
    }

    /// Runs the polling loop until [`stop_poll`] is called
    ///
    /// Each iteration checks the stop signal, then performs one
    /// [`shift`]. Message bodies from a successful shift are pushed
    /// onto `messages` in receive order; [`QueueError::NotFound`] is
    /// absorbed; every other error is pushed onto `errors`. The loop
    /// never terminates on provider errors.
    ///
    /// The stop signal is only observed between iterations, so
    /// [`stop_poll`] may wait out one in-flight shift (bounded by
    /// `wait_time_seconds`). The loop also exits when all receivers of
    /// a channel it needs to push to have been dropped.
    ///
    /// Sends block when a bounded channel is full; backpressure is
    /// controlled by the caller's channel capacity and drain rate.
    ///
    /// [`shift`]: Self::shift
    /// [`stop_poll`]: Self::stop_poll
    #[allow(clippy::cognitive_complexity)]
    pub async fn poll(&self, messages: flume::Sender<String>, errors: flume::Sender<QueueError>) {
        info!("Polling started on {}", self.endpoint);

        loop {
            if self.stop.is_cancelled() {
                info!("Polling stopped on {}", self.endpoint);
                break;
            }

            match self.shift().await {
                Ok(batch) => {
                    for msg in batch {
                        if messages.send_async(msg.body).await.is_err() {
                            info!("Message channel closed, polling stopped");
                            return;
                        }
                    }
                }
                Err(QueueError::NotFound) => {}
                Err(err) => {
                    if errors.send_async(err).await.is_err() {
                        info!("Error channel closed, polling stopped");
                        return;
                    }
                }
            }
        }
    }

    /// Signals a running [`poll`] loop to terminate at its next
    /// iteration check. Idempotent; a stopped consumer stays stopped.
    ///
    /// [`poll`]: Self::poll
    pub fn stop_poll(&self) {
        self.stop.cancel();
    }
}
