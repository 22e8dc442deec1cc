//! Console bot example wiring the full pipeline by hand.
//!
//! This example is the composition root in miniature: every component is
//! built with explicit constructor calls and handed its ports, no
//! container involved. The AI backend is the echo mock, the platform
//! prints to stdout, and conversations live in the in-memory store.
//!
//! Run with: cargo run -p pipeline --example console_bot
//!
//! Configuration via .env file or environment variables:
//!   BOT_RESET_COMMANDS  - Comma-separated reset commands (default: "clear")
//!   BOT_SYSTEM_PROMPT   - Persona text for new conversations
//!   BOT_AI_TIMEOUT_SECS - AI connection timeout in seconds (default: 60)

use std::sync::Arc;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};

use chat_core::{AiProvider, ConversationRepository, Message, Platform};
use memory_store::InMemoryStore;
use mock_backend::{EchoBackend, StaticModelProvider};
use model_catalog::ModelCatalog;
use pipeline::{BotConfig, Pipeline};

/// A platform that prints outbound messages to stdout.
struct ConsolePlatform;

#[async_trait]
impl Platform for ConsolePlatform {
    async fn send_message(&self, _user_id: &str, message: &Message) -> bool {
        println!("bot> {}", message.content);
        true
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present (searches current dir and parents)
    let _ = dotenvy::dotenv();

    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let config = BotConfig::from_env()?;

    // Catalog with a static provider, standing in for real credentials.
    let catalog = ModelCatalog::new().with_provider(
        AiProvider::OpenAi,
        Arc::new(StaticModelProvider::new(["gpt-4o", "gpt-5-mini"])),
    );
    let models = catalog.list_models().await;
    println!("Available models:");
    for model in &models {
        println!("  {}/{}", model.provider, model.name);
    }

    // Wire the object graph.
    let store = Arc::new(InMemoryStore::new());
    let backend = Arc::new(EchoBackend::with_prefix("Echo: "));
    let platform = Arc::new(ConsolePlatform);
    let bot = Pipeline::from_ports(
        store as Arc<dyn ConversationRepository>,
        backend,
        platform as Arc<dyn Platform>,
        &config,
    );

    println!("\nConsole bot is running!");
    println!("Type a message and press Enter. Type \"clear\" to reset.");
    println!("Press Ctrl+D to stop.\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        bot.execute("console-user", &line).await?;
    }

    Ok(())
}
