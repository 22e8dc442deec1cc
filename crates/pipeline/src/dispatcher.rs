//! Best-effort message dispatch.

use std::sync::Arc;

use tracing::{info, warn};

use chat_core::{Message, Platform};

/// Delivers a sequence of messages to the platform, counting successes.
///
/// Dispatch is a best-effort batch, not a transaction: a failed send never
/// stops the remaining messages, and partial delivery is an expected
/// outcome rather than an error.
pub struct Dispatcher {
    platform: Arc<dyn Platform>,
}

impl Dispatcher {
    /// Create a dispatcher over the given platform.
    pub fn new(platform: Arc<dyn Platform>) -> Self {
        Self { platform }
    }

    /// Send every message, in order, and return how many sends succeeded.
    ///
    /// An empty batch logs and returns 0 without touching the platform.
    pub async fn dispatch(&self, user_id: &str, messages: &[Message]) -> usize {
        if messages.is_empty() {
            warn!(user_id, "no messages to dispatch");
            return 0;
        }

        let mut sent = 0;
        for message in messages {
            if self.platform.send_message(user_id, message).await {
                sent += 1;
            } else {
                warn!(user_id, message_id = %message.id, "message delivery failed");
            }
        }

        info!(user_id, sent, total = messages.len(), "dispatched messages");
        sent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mock_backend::RecordingPlatform;

    #[tokio::test]
    async fn test_empty_batch_sends_nothing() {
        let platform = Arc::new(RecordingPlatform::new());
        let dispatcher = Dispatcher::new(Arc::clone(&platform) as Arc<dyn Platform>);

        let sent = dispatcher.dispatch("user-1", &[]).await;

        assert_eq!(sent, 0);
        assert_eq!(platform.sent_count().await, 0);
    }

    #[tokio::test]
    async fn test_counts_successful_sends() {
        let platform = Arc::new(RecordingPlatform::new());
        let dispatcher = Dispatcher::new(Arc::clone(&platform) as Arc<dyn Platform>);

        let messages = [Message::assistant("a"), Message::assistant("b")];
        let sent = dispatcher.dispatch("user-1", &messages).await;

        assert_eq!(sent, 2);
        assert_eq!(platform.sent_count().await, 2);
    }

    #[tokio::test]
    async fn test_failure_does_not_short_circuit() {
        let platform = Arc::new(RecordingPlatform::new());
        platform.push_outcome(false).await;
        platform.push_outcome(true).await;
        platform.push_outcome(false).await;
        let dispatcher = Dispatcher::new(Arc::clone(&platform) as Arc<dyn Platform>);

        let messages = [
            Message::assistant("a"),
            Message::assistant("b"),
            Message::assistant("c"),
        ];
        let sent = dispatcher.dispatch("user-1", &messages).await;

        // One success, but all three were attempted in order.
        assert_eq!(sent, 1);
        let attempts = platform.sent().await;
        assert_eq!(attempts.len(), 3);
        assert_eq!(attempts[0].1.content, "a");
        assert_eq!(attempts[2].1.content, "c");
    }
}
