use chrono::Utc;

/// Represents a message in transit through the broker.
///
/// A message consists of the queue it is addressed to, the payload text,
/// and a timestamp indicating when it was published.
///
/// The payload is the entire wire format: plain text, no envelope, no
/// headers. Queue name and timestamp are broker-side routing and
/// bookkeeping only and are not part of what the consumer processes.
///
/// # Fields
///
/// - `queue` - The name of the queue this message is addressed to.
/// - `payload` - The actual message content, a plain text string.
/// - `timestamp` - The Unix timestamp (in milliseconds) representing when the message was published.
#[derive(Debug, Clone)]
pub struct Message {
    pub queue: String,
    pub payload: String,
    pub timestamp: i64,
}

impl Message {
    /// Creates a message addressed to the given queue, stamped with the
    /// current time.
    pub fn new(queue: &str, payload: String) -> Self {
        Self {
            queue: queue.to_string(),
            payload,
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}
