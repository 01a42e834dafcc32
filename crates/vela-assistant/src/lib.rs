//! Assistant collaborator for the Vela sidebar chat.
//!
//! The shell hands a conversation to an [`Assistant`] off the UI thread
//! and records whatever comes back. The only built-in implementation is
//! [`EchoAssistant`], a placeholder that acknowledges the last message.

mod echo;

use async_trait::async_trait;
use vela_common::ChatMessage;

pub use echo::EchoAssistant;

#[async_trait]
pub trait Assistant: Send + Sync {
    /// Produce a reply to the conversation so far. `history` ends with the
    /// message being answered.
    async fn respond(&self, history: &[ChatMessage]) -> Result<String, AssistantError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("nothing to respond to")]
    EmptyConversation,
    #[error("assistant unavailable: {0}")]
    Unavailable(String),
}

impl From<AssistantError> for vela_common::ShellError {
    fn from(e: AssistantError) -> Self {
        vela_common::ShellError::Assistant(e.to_string())
    }
}
