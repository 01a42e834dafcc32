//! Assistant runtime management and reply polling.

use std::sync::Arc;

use vela_assistant::{Assistant, AssistantError, EchoAssistant};
use vela_common::ShellError;
use vela_core::ChatTurn;

use super::assistant_task::assistant_task;
use super::core::VelaApp;
use super::types::AssistantReply;

impl VelaApp {
    /// Lazily initialize the async assistant task and its channels.
    pub(super) fn ensure_assistant_runtime(&mut self) {
        if self.assistant_tx.is_some() {
            return;
        }

        let (turn_tx, turn_rx) = std::sync::mpsc::channel::<ChatTurn>();
        let (reply_tx, reply_rx) = std::sync::mpsc::channel::<AssistantReply>();

        if self.tokio_runtime.is_none() {
            match tokio::runtime::Builder::new_multi_thread()
                .worker_threads(1)
                .enable_all()
                .build()
            {
                Ok(rt) => self.tokio_runtime = Some(rt),
                Err(e) => {
                    tracing::error!("Failed to create tokio runtime: {e}");
                    return;
                }
            }
        }

        let Some(rt) = self.tokio_runtime.as_ref() else {
            return;
        };
        let assistant: Arc<dyn Assistant> =
            Arc::new(EchoAssistant::from_config(&self.config.assistant));
        rt.spawn(async move {
            assistant_task(assistant, turn_rx, reply_tx).await;
        });

        self.assistant_tx = Some(turn_tx);
        self.assistant_rx = Some(reply_rx);
    }

    /// Hand a conversation to the assistant task.
    pub(super) fn request_assistant_reply(&mut self, turn: ChatTurn) {
        self.ensure_assistant_runtime();
        let sent = match self.assistant_tx {
            Some(ref tx) => tx.send(turn).map_err(|_| "assistant task stopped"),
            None => Err("assistant runtime not running"),
        };
        if let Err(reason) = sent {
            tracing::warn!(reason, "assistant request dropped");
            if let Some(ref mut shell) = self.shell {
                shell.complete_chat(Err(unavailable(reason)));
            }
        }
    }

    /// Poll for assistant replies (non-blocking).
    pub(super) fn poll_assistant(&mut self) {
        let Some(ref rx) = self.assistant_rx else {
            return;
        };
        let replies: Vec<AssistantReply> = rx.try_iter().collect();
        if let Some(ref mut shell) = self.shell {
            for reply in replies {
                shell.complete_chat(reply.map_err(ShellError::from));
            }
        }
    }
}

fn unavailable(reason: &str) -> ShellError {
    AssistantError::Unavailable(reason.to_string()).into()
}
