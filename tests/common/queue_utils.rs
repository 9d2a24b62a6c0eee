//! Queue test setup utilities

#![allow(dead_code)]

use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_sqs::Client as SqsClient;
use shiftq::{Queue, QueueParams};
use uuid::Uuid;

/// Test context that provides an SQS client and a dedicated queue
pub struct QueueTestContext {
    pub sqs_client: SqsClient,
    pub queue_url: String,
}

impl QueueTestContext {
    /// Creates a new test context with a unique queue on LocalStack
    pub async fn new(test_name: &str) -> Self {
        // Create unique queue name
        let queue_name = format!("{}-{}", test_name, Uuid::new_v4());

        // Setup LocalStack client with hardcoded credentials for CI
        let credentials = Credentials::from_keys(
            "test", // AWS_ACCESS_KEY_ID
            "test", // AWS_SECRET_ACCESS_KEY
            None,   // no session token
        );

        let config = aws_config::defaults(BehaviorVersion::latest())
            .endpoint_url("http://localhost:4566")
            .region(Region::new("us-east-1"))
            .credentials_provider(credentials)
            .load()
            .await;

        let sqs_client = SqsClient::new(&config);

        let result = sqs_client
            .create_queue()
            .queue_name(&queue_name)
            .send()
            .await
            .expect("Failed to create test queue");

        let queue_url = result
            .queue_url()
            .expect("Queue URL not returned")
            .to_string();

        Self {
            sqs_client,
            queue_url,
        }
    }

    /// Builds a consumer bound to this context's queue
    pub fn consumer(&self, params: QueueParams) -> Queue {
        Queue::with_client(self.sqs_client.clone(), self.queue_url.clone(), params)
    }

    /// Enqueues a message body directly through the SQS client
    pub async fn send_test_message(&self, body: &str) {
        self.sqs_client
            .send_message()
            .queue_url(&self.queue_url)
            .message_body(body)
            .send()
            .await
            .expect("Failed to send test message");
    }

    /// Deletes the backing queue, leaving the context pointing at a
    /// queue that no longer exists
    pub async fn delete_queue(&self) {
        self.sqs_client
            .delete_queue()
            .queue_url(&self.queue_url)
            .send()
            .await
            .expect("Failed to delete test queue");
    }
}

impl Drop for QueueTestContext {
    fn drop(&mut self) {
        // Clean up the queue
        let client = self.sqs_client.clone();
        let queue_url = self.queue_url.clone();

        // Use tokio runtime to delete queue
        let handle = tokio::runtime::Handle::try_current();
        if let Ok(handle) = handle {
            handle.spawn(async move {
                let _ = client.delete_queue().queue_url(&queue_url).send().await;
            });
        }
    }
}

/// Test parameters with a short long-poll wait so empty-queue calls
/// return quickly
pub fn short_wait_params() -> QueueParams {
    QueueParams {
        max_messages: 10,
        visibility_timeout: 30,
        wait_time_seconds: 1,
    }
}
