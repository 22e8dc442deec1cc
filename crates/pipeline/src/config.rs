//! Runtime configuration for the pipeline.

use std::collections::HashSet;
use std::env;
use std::time::Duration;

use chat_core::ConfigError;

/// Default timeout for AI backend connections (60 seconds).
const DEFAULT_AI_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration consumed by the conversation pipeline.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Literal input strings that trigger a conversation reset instead of
    /// normal AI processing. Compared against the trimmed inbound text.
    pub reset_commands: HashSet<String>,

    /// Persona text injected as a system message when a new conversation
    /// is created. `None` or empty means no seeding.
    pub system_prompt: Option<String>,

    /// Timeout handed to AI backend adapters at construction. The
    /// pipeline itself imposes no timeout of its own.
    pub ai_connection_timeout: Duration,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            reset_commands: HashSet::from(["clear".to_string()]),
            system_prompt: None,
            ai_connection_timeout: DEFAULT_AI_TIMEOUT,
        }
    }
}

impl BotConfig {
    /// Create configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BOT_RESET_COMMANDS` - Comma-separated reset commands (default: "clear")
    /// - `BOT_SYSTEM_PROMPT` - Persona text for new conversations
    /// - `BOT_AI_TIMEOUT_SECS` - AI connection timeout in seconds (default: 60)
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let reset_commands = match env::var("BOT_RESET_COMMANDS") {
            Ok(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .collect(),
            Err(_) => defaults.reset_commands,
        };

        let system_prompt = env::var("BOT_SYSTEM_PROMPT")
            .ok()
            .filter(|p| !p.trim().is_empty());

        let ai_connection_timeout = match env::var("BOT_AI_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw.parse().map_err(|_| ConfigError::Invalid {
                    key: "BOT_AI_TIMEOUT_SECS".to_string(),
                    value: raw.clone(),
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => defaults.ai_connection_timeout,
        };

        Ok(Self {
            reset_commands,
            system_prompt,
            ai_connection_timeout,
        })
    }

    /// Set the persona text, dropping empty values.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        let prompt = prompt.into();
        self.system_prompt = if prompt.trim().is_empty() {
            None
        } else {
            Some(prompt)
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reset_command_is_clear() {
        let config = BotConfig::default();
        assert!(config.reset_commands.contains("clear"));
        assert_eq!(config.reset_commands.len(), 1);
        assert_eq!(config.ai_connection_timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_with_system_prompt_drops_blank() {
        let config = BotConfig::default().with_system_prompt("   ");
        assert!(config.system_prompt.is_none());

        let config = BotConfig::default().with_system_prompt("You are helpful.");
        assert_eq!(config.system_prompt.as_deref(), Some("You are helpful."));
    }
}
