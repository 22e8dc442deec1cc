//! Recording platform double.

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::Mutex;

use chat_core::{Message, Platform};

/// A [`Platform`] that records every outbound message instead of sending it.
///
/// By default every send succeeds. Tests can enqueue explicit outcomes with
/// [`push_outcome`](Self::push_outcome); each send consumes one queued
/// outcome, falling back to success when the queue is empty.
#[derive(Debug, Default)]
pub struct RecordingPlatform {
    sent: Mutex<Vec<(String, Message)>>,
    outcomes: Mutex<VecDeque<bool>>,
}

impl RecordingPlatform {
    /// Create a platform where every send succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the outcome for a future send.
    pub async fn push_outcome(&self, success: bool) {
        self.outcomes.lock().await.push_back(success);
    }

    /// All messages handed to the platform so far, in send order,
    /// regardless of outcome.
    pub async fn sent(&self) -> Vec<(String, Message)> {
        self.sent.lock().await.clone()
    }

    /// Number of messages handed to the platform so far.
    pub async fn sent_count(&self) -> usize {
        self.sent.lock().await.len()
    }
}

#[async_trait]
impl Platform for RecordingPlatform {
    async fn send_message(&self, user_id: &str, message: &Message) -> bool {
        self.sent
            .lock()
            .await
            .push((user_id.to_string(), message.clone()));
        self.outcomes.lock().await.pop_front().unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_sends_in_order() {
        let platform = RecordingPlatform::new();
        assert!(platform.send_message("user-1", &Message::assistant("a")).await);
        assert!(platform.send_message("user-1", &Message::assistant("b")).await);

        let sent = platform.sent().await;
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].1.content, "a");
        assert_eq!(sent[1].1.content, "b");
    }

    #[tokio::test]
    async fn test_programmed_outcomes_are_consumed_in_order() {
        let platform = RecordingPlatform::new();
        platform.push_outcome(false).await;
        platform.push_outcome(true).await;

        assert!(!platform.send_message("u", &Message::assistant("a")).await);
        assert!(platform.send_message("u", &Message::assistant("b")).await);
        // Queue exhausted: default back to success.
        assert!(platform.send_message("u", &Message::assistant("c")).await);
    }
}
