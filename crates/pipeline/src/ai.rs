//! AI reply orchestration.

use std::sync::Arc;

use tracing::{debug, error};

use chat_core::{AiBackend, Conversation, Message};

use crate::styler::Styler;

/// Invokes the AI backend for one raw reply and styles it for delivery.
///
/// This is the boundary that owns backend failure: any error from the
/// port is caught here, logged, and turned into an empty reply sequence.
/// A backend outage degrades to "no reply sent", never to a crashed
/// pipeline.
pub struct AiOrchestrator {
    backend: Arc<dyn AiBackend>,
    styler: Styler,
}

impl AiOrchestrator {
    /// Create an orchestrator over the given backend.
    pub fn new(backend: Arc<dyn AiBackend>) -> Self {
        Self {
            backend,
            styler: Styler::new(),
        }
    }

    /// Generate the styled reply sequence for a conversation.
    ///
    /// Returns an empty Vec when the backend fails.
    pub async fn generate(&self, conversation: &Conversation) -> Vec<Message> {
        debug!(
            backend = self.backend.name(),
            history = conversation.len(),
            "generating AI reply"
        );

        match self.backend.generate_reply(&conversation.messages).await {
            Ok(raw) => self.styler.format(&raw),
            Err(e) => {
                error!(backend = self.backend.name(), "AI reply failed: {}", e);
                Vec::new()
            }
        }
    }
}
