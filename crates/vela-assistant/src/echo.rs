use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;
use vela_common::{ChatMessage, ChatSender};
use vela_config::schema::AssistantConfig;

use crate::{Assistant, AssistantError};

/// Waits a fixed delay, then quotes the latest user message back.
#[derive(Debug, Clone)]
pub struct EchoAssistant {
    delay: Duration,
    prefix: String,
}

impl EchoAssistant {
    pub fn new(delay: Duration, prefix: impl Into<String>) -> Self {
        Self {
            delay,
            prefix: prefix.into(),
        }
    }

    pub fn from_config(config: &AssistantConfig) -> Self {
        Self::new(
            Duration::from_millis(config.reply_delay_ms),
            config.reply_prefix.clone(),
        )
    }
}

impl Default for EchoAssistant {
    fn default() -> Self {
        Self::from_config(&AssistantConfig::default())
    }
}

#[async_trait]
impl Assistant for EchoAssistant {
    async fn respond(&self, history: &[ChatMessage]) -> Result<String, AssistantError> {
        let last = history
            .iter()
            .rev()
            .find(|m| m.sender == ChatSender::User)
            .ok_or(AssistantError::EmptyConversation)?;

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        debug!(message_id = %last.id, "echo reply ready");
        Ok(format!("{}\"{}\"", self.prefix, last.content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn echoes_last_user_message() {
        let assistant = EchoAssistant::new(Duration::ZERO, "AI Response: I received your message: ");
        let history = vec![
            ChatMessage::user("first"),
            ChatMessage::assistant("reply"),
            ChatMessage::user("second"),
        ];
        let reply = assistant.respond(&history).await.unwrap();
        assert_eq!(reply, "AI Response: I received your message: \"second\"");
    }

    #[tokio::test]
    async fn empty_history_is_an_error() {
        let assistant = EchoAssistant::new(Duration::ZERO, "");
        let err = assistant.respond(&[]).await.unwrap_err();
        assert!(matches!(err, AssistantError::EmptyConversation));
    }

    #[tokio::test]
    async fn waits_configured_delay() {
        let assistant = EchoAssistant::new(Duration::from_millis(20), "");
        let start = tokio::time::Instant::now();
        assistant.respond(&[ChatMessage::user("hi")]).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn default_matches_config_defaults() {
        let assistant = EchoAssistant::default();
        assert_eq!(assistant.delay, Duration::from_millis(1000));
        assert!(assistant.prefix.starts_with("AI Response"));
    }

    #[test]
    fn converts_into_shell_error() {
        let err: vela_common::ShellError = AssistantError::Unavailable("offline".into()).into();
        assert_eq!(err.to_string(), "assistant error: assistant unavailable: offline");
    }
}
