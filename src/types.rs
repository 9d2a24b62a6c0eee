const DEFAULT_MAX_MESSAGES: i32 = 10;
const DEFAULT_VISIBILITY_TIMEOUT: i32 = 1;
const DEFAULT_WAIT_TIME_SECONDS: i32 = 20;

/// A message received from the queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Message ID assigned by the provider
    pub id: String,
    /// Receipt handle required to acknowledge (delete) the message
    pub receipt_handle: String,
    /// The message body
    pub body: String,
}

/// Consumption parameters for receive calls
///
/// Zero-valued fields are resolved to defaults when the [`Queue`] is
/// constructed: 10 messages per batch, a 1 second visibility timeout
/// and a 20 second long-poll wait. The resolved snapshot is immutable
/// and reused for every receive call.
///
/// [`Queue`]: crate::Queue
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueueParams {
    /// Maximum number of messages to retrieve per receive call
    pub max_messages: i32,
    /// Visibility timeout for received messages (in seconds)
    pub visibility_timeout: i32,
    /// Wait time for long polling (in seconds)
    pub wait_time_seconds: i32,
}

impl QueueParams {
    pub(crate) const fn resolved(self) -> Self {
        Self {
            max_messages: if self.max_messages == 0 {
                DEFAULT_MAX_MESSAGES
            } else {
                self.max_messages
            },
            visibility_timeout: if self.visibility_timeout == 0 {
                DEFAULT_VISIBILITY_TIMEOUT
            } else {
                self.visibility_timeout
            },
            wait_time_seconds: if self.wait_time_seconds == 0 {
                DEFAULT_WAIT_TIME_SECONDS
            } else {
                self.wait_time_seconds
            },
        }
    }
}
