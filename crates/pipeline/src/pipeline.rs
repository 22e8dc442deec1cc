//! End-to-end request flow.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, trace};

use chat_core::{AiBackend, ConversationRepository, Message, Platform};

use crate::ai::AiOrchestrator;
use crate::config::BotConfig;
use crate::context::ContextLoader;
use crate::dispatcher::Dispatcher;
use crate::error::PipelineError;
use crate::state::StateManager;

/// Confirmation sent after a successful reset command.
const RESET_CONFIRMATION: &str = "✨ Memory cleared! Let's start over.";

/// Composes the pipeline components into the end-to-end request flow.
///
/// One invocation moves through `Loaded → (Reset | Processing) →
/// Dispatched`; a terminal outcome is always reached. Operational
/// failures are absorbed inside the owning component — the only error
/// this type surfaces is a repository failure during the initial load.
///
/// Invocations for the same user are not serialized: two concurrent
/// `execute` calls can load the same prior state, append independently,
/// and the later save silently overwrites the earlier one's effect.
/// Deployments expecting concurrent messages from a single user should
/// serialize per user id upstream.
pub struct Pipeline {
    loader: ContextLoader,
    state: StateManager,
    ai: AiOrchestrator,
    dispatcher: Dispatcher,
    reset_commands: HashSet<String>,
}

impl Pipeline {
    /// Compose a pipeline from pre-built components.
    pub fn new(
        loader: ContextLoader,
        state: StateManager,
        ai: AiOrchestrator,
        dispatcher: Dispatcher,
        config: &BotConfig,
    ) -> Self {
        Self {
            loader,
            state,
            ai,
            dispatcher,
            reset_commands: config.reset_commands.clone(),
        }
    }

    /// Wire a pipeline directly from its ports. This is the composition
    /// shortcut used by binaries and examples.
    pub fn from_ports(
        repository: Arc<dyn ConversationRepository>,
        backend: Arc<dyn AiBackend>,
        platform: Arc<dyn Platform>,
        config: &BotConfig,
    ) -> Self {
        Self::new(
            ContextLoader::new(Arc::clone(&repository), config.system_prompt.clone()),
            StateManager::new(repository),
            AiOrchestrator::new(backend),
            Dispatcher::new(platform),
            config,
        )
    }

    /// Process one inbound message end-to-end.
    ///
    /// Reset commands clear the history and dispatch a confirmation
    /// without ever invoking the AI backend. Everything else appends the
    /// user message, requests a reply, persists the conversation (user
    /// message included, even when the backend produced nothing), and
    /// dispatches whatever replies exist.
    pub async fn execute(&self, user_id: &str, incoming: &str) -> Result<(), PipelineError> {
        trace!(user_id, incoming, "pipeline invocation started");
        let conversation = self.loader.load(user_id).await?;

        if self.reset_commands.contains(incoming.trim()) {
            debug!(user_id, "reset command received");
            self.state.reset_conversation(&conversation).await;
            let confirmation = Message::assistant(RESET_CONFIRMATION);
            self.dispatcher.dispatch(user_id, &[confirmation]).await;
            return Ok(());
        }

        let conversation = self
            .state
            .append_messages(conversation, vec![Message::user(incoming)]);

        let replies = self.ai.generate(&conversation).await;

        let conversation = self.state.append_messages(conversation, replies.clone());
        self.state.save(&conversation).await;

        self.dispatcher.dispatch(user_id, &replies).await;
        Ok(())
    }
}
