//! Background async task that answers sidebar chat messages.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;

use vela_assistant::Assistant;
use vela_core::ChatTurn;

use super::types::AssistantReply;

/// Answer conversations one at a time until the sending side is dropped.
pub(super) async fn assistant_task(
    assistant: Arc<dyn Assistant>,
    turn_rx: Receiver<ChatTurn>,
    reply_tx: Sender<AssistantReply>,
) {
    while let Ok(turn) = tokio::task::block_in_place(|| turn_rx.recv()) {
        let reply = assistant.respond(&turn.history).await;
        if let Err(ref e) = reply {
            tracing::warn!(error = %e, "assistant reply failed");
        }
        if reply_tx.send(reply).is_err() {
            break;
        }
    }
    tracing::debug!("assistant task finished");
}
